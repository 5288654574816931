//! Burn arch classifier and checkpoint persistence for sole diagnosis.
//!
//! This crate provides the trained-model side of the diagnosis pipeline:
//!
//! # Model
//!
//! - [`ArchNet`] - Convolutional classifier over 224×224×3 sole scans
//! - [`ArchNetClassifier`] - Adapter implementing the injected
//!   [`ArchClassifier`](sole_types::ArchClassifier) boundary
//!
//! # Checkpoint Persistence
//!
//! Weights load and save through Burn's recorder system:
//! - Binary format (compact, the deployment default)
//! - JSON format (human-readable, debuggable)
//!
//! # Preprocessing
//!
//! [`preprocess`] decodes uploaded JPEG/PNG bytes and emits normalized
//! CHW scan tensors.
//!
//! # Backend Support
//!
//! The model is generic over Burn backends; the shell pins `burn-ndarray`
//! for CPU inference.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod adapter;
mod checkpoint;
mod error;
mod model;
pub mod preprocess;

pub use adapter::ArchNetClassifier;
pub use checkpoint::{load_checkpoint, save_checkpoint, CheckpointFormat};
pub use error::{ModelError, Result};
pub use model::{ArchNet, ArchNetConfig};
