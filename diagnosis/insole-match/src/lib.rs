//! Pattern resolution and report assembly for foot-sole arch diagnosis.
//!
//! Given an arch classification, a declared leg shape, and a declared
//! bunion flag, this crate deterministically derives the insole
//! recommendation identifier and assembles the diagnosis report:
//!
//! - [`resolve`] - maps the 4×3 combination grid bijectively onto `1..=12`;
//!   a declared bunion overrides the arch axis for the lookup only
//! - [`descriptions`] - static explanatory passages, empty-string
//!   degradation for unregistered keys
//! - [`assemble`] / [`Report`] - fixed-order report record, bunion block
//!   present iff the flag is set
//! - [`diagnose`] - one synchronous unit of work against an injected
//!   [`ArchClassifier`](sole_types::ArchClassifier)
//! - [`ReportRenderer`] - the boundary to downloadable-document rendering
//!
//! # Layer 0 Crate
//!
//! Pure mapping and assembly; no ML, I/O, or rendering dependencies.
//! Every operation here is total and deterministic over validated
//! vocabulary values.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod descriptions;
mod pipeline;
mod report;
mod resolver;

pub use pipeline::{diagnose, Diagnosis, DiagnosisRequest};
pub use report::{assemble, Report, ReportRenderer, ReportSection, RenderedDocument, REPORT_TITLE};
pub use resolver::resolve;
