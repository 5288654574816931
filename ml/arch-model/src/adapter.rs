//! The classifier adapter implementing the diagnosis boundary trait.

use std::path::Path;

use burn::prelude::Backend;
use burn::tensor::activation::softmax;
use burn::tensor::{Tensor, TensorData};
use sole_types::{ArchClass, ArchClassifier, ArchPrediction, ClassifyError, SoleScan};

use crate::checkpoint::load_checkpoint;
use crate::error::{ModelError, Result};
use crate::model::{ArchNet, ArchNetConfig};

/// An [`ArchNet`] wired up as an [`ArchClassifier`].
///
/// Owns the loaded network and its device. Constructed once per process
/// (loading the checkpoint is the cold-start cost) and reused for every
/// inference.
pub struct ArchNetClassifier<B: Backend> {
    model: ArchNet<B>,
    device: B::Device,
}

impl<B: Backend> ArchNetClassifier<B> {
    /// Wraps an already-loaded network.
    #[must_use]
    pub const fn new(model: ArchNet<B>, device: B::Device) -> Self {
        Self { model, device }
    }

    /// Builds the network and loads its weights from a checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] for a degenerate configuration
    /// and the [`load_checkpoint`] errors for a missing or unreadable
    /// checkpoint. Either failure is terminal for the session.
    pub fn from_checkpoint(
        config: ArchNetConfig,
        path: &Path,
        device: &B::Device,
    ) -> Result<Self> {
        if !config.is_valid() {
            return Err(ModelError::invalid_config(format!(
                "hidden={}, classes={}",
                config.hidden, config.classes
            )));
        }

        let model = ArchNet::<B>::new(config, device);
        let model = load_checkpoint(model, path, device)?;
        Ok(Self::new(model, device.clone()))
    }
}

impl<B: Backend> ArchClassifier for ArchNetClassifier<B> {
    fn classify(&self, scan: &SoleScan) -> std::result::Result<ArchPrediction, ClassifyError> {
        let data = TensorData::new(scan.values().to_vec(), SoleScan::shape());
        let input = Tensor::<B, 3>::from_data(data, &self.device).reshape([
            1,
            SoleScan::CHANNELS,
            SoleScan::INPUT_HEIGHT,
            SoleScan::INPUT_WIDTH,
        ]);

        let logits = self.model.forward(input);
        let probabilities = softmax(logits, 1);

        let values = probabilities
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| ClassifyError::backend(format!("{e:?}")))?;

        if values.len() != ArchClass::COUNT {
            return Err(ClassifyError::shape_mismatch(
                format!("[1, {}]", ArchClass::COUNT),
                format!("[1, {}]", values.len()),
            ));
        }

        ArchPrediction::from_probabilities([values[0], values[1], values[2]])
            .map_err(|e| ClassifyError::backend(e.to_string()))
    }
}
