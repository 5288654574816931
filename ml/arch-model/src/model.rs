//! The arch classification network.

use burn::module::Module;
use burn::nn;
use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::pool::{MaxPool2d, MaxPool2dConfig};
use burn::prelude::Backend;
use burn::tensor::activation::relu;
use burn::tensor::Tensor;
use serde::{Deserialize, Serialize};
use sole_types::{ArchClass, SoleScan};

/// Configuration for the arch classification network.
///
/// # Example
///
/// ```
/// use arch_model::ArchNetConfig;
///
/// let config = ArchNetConfig::default();
/// assert_eq!(config.hidden, 128);
/// assert_eq!(config.classes, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchNetConfig {
    /// Number of hidden units in the classification head.
    pub hidden: usize,

    /// Number of output classes.
    pub classes: usize,
}

impl Default for ArchNetConfig {
    fn default() -> Self {
        Self {
            hidden: 128,
            classes: ArchClass::COUNT,
        }
    }
}

impl ArchNetConfig {
    /// Creates a configuration with a custom hidden size.
    #[must_use]
    pub const fn new(hidden: usize) -> Self {
        Self {
            hidden,
            classes: ArchClass::COUNT,
        }
    }

    /// Sets the number of output classes.
    #[must_use]
    pub const fn with_classes(mut self, classes: usize) -> Self {
        self.classes = classes;
        self
    }

    /// Validates the configuration.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.hidden > 0 && self.classes > 0
    }
}

/// Convolutional arch classifier for sole photographs.
///
/// Architecture: three conv/`ReLU`/maxpool stages (3 → 16 → 32 → 64
/// channels, stride-2 pooling) over the fixed 224×224 input, followed by
/// a hidden linear layer and the class head.
///
/// # Type Parameters
///
/// - `B`: The Burn backend (e.g. `NdArray`, `Wgpu`)
#[derive(Debug, Module)]
pub struct ArchNet<B: Backend> {
    conv1: Conv2d<B>,
    conv2: Conv2d<B>,
    conv3: Conv2d<B>,
    pool: MaxPool2d,
    fc1: nn::Linear<B>,
    fc2: nn::Linear<B>,
}

/// Feature channels after the last conv stage.
const FINAL_CHANNELS: usize = 64;

/// Spatial size after three stride-2 pools over 224.
const FINAL_SIDE: usize = SoleScan::INPUT_WIDTH / 8;

/// Flattened feature dimension entering the classification head.
const FLATTENED_DIM: usize = FINAL_CHANNELS * FINAL_SIDE * FINAL_SIDE;

impl<B: Backend> ArchNet<B> {
    /// Creates a new network with randomly initialized weights.
    #[must_use]
    pub fn new(config: ArchNetConfig, device: &B::Device) -> Self {
        let conv1 = Conv2dConfig::new([SoleScan::CHANNELS, 16], [3, 3])
            .with_padding(nn::PaddingConfig2d::Same)
            .init(device);
        let conv2 = Conv2dConfig::new([16, 32], [3, 3])
            .with_padding(nn::PaddingConfig2d::Same)
            .init(device);
        let conv3 = Conv2dConfig::new([32, FINAL_CHANNELS], [3, 3])
            .with_padding(nn::PaddingConfig2d::Same)
            .init(device);
        let pool = MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init();
        let fc1 = nn::LinearConfig::new(FLATTENED_DIM, config.hidden).init(device);
        let fc2 = nn::LinearConfig::new(config.hidden, config.classes).init(device);

        Self {
            conv1,
            conv2,
            conv3,
            pool,
            fc1,
            fc2,
        }
    }

    /// Runs the forward pass.
    ///
    /// # Arguments
    ///
    /// - `input`: Tensor of shape `[batch, 3, 224, 224]`, values in `[0, 1]`
    ///
    /// # Returns
    ///
    /// Tensor of shape `[batch, classes]` (logits, not probabilities).
    pub fn forward(&self, input: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.pool.forward(relu(self.conv1.forward(input)));
        let x = self.pool.forward(relu(self.conv2.forward(x)));
        let x = self.pool.forward(relu(self.conv3.forward(x)));
        let x: Tensor<B, 2> = x.flatten(1, 3);
        let x = relu(self.fc1.forward(x));
        self.fc2.forward(x)
    }
}
