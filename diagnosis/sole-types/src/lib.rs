//! Label vocabularies and contracts for foot-sole arch diagnosis.
//!
//! This crate provides the shared types of the diagnosis pipeline:
//!
//! # Vocabulary Types
//!
//! - [`ArchClass`] - Foot-arch classification (`Flat`, `Normal`, `High`)
//! - [`LegShape`] - User-declared leg alignment (`O脚`, `X脚`, `正常`)
//! - [`Bunion`] - User-declared bunion flag (`あり`, `なし`)
//! - [`PatternId`] - Insole recommendation identifier in `[1, 12]`
//!
//! # Inference Contracts
//!
//! - [`SoleScan`] - Preprocessed 224×224×3 image tensor, CHW, `[0, 1]`
//! - [`ArchPrediction`] - Probability vector plus predicted class
//! - [`ArchClassifier`] - The injected classifier boundary
//!
//! # Layer 0 Crate
//!
//! This crate has no ML or rendering dependencies. It can be used in:
//! - Inference adapters
//! - Report assembly
//! - Shells and tests
//!
//! # Validation
//!
//! Invalid labels, tensor shapes, and probability vectors are rejected at
//! construction with [`ValidationError`]; downstream code never re-checks
//! them.
//!
//! # Example
//!
//! ```
//! use sole_types::{ArchClass, Bunion, LegShape};
//!
//! let leg: LegShape = "O脚".parse().unwrap();
//! assert_eq!(leg, LegShape::OShaped);
//! assert_eq!(ArchClass::Flat.as_str(), "Flat");
//! assert!(!Bunion::Absent.is_present());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod arch;
mod bunion;
mod classifier;
mod error;
mod leg;
mod pattern;
mod prediction;
mod scan;

pub use arch::ArchClass;
pub use bunion::Bunion;
pub use classifier::ArchClassifier;
pub use error::{ClassifyError, ValidationError};
pub use leg::LegShape;
pub use pattern::PatternId;
pub use prediction::ArchPrediction;
pub use scan::SoleScan;
