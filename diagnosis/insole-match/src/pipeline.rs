//! The diagnosis pipeline: classify, resolve, assemble.

use chrono::NaiveDate;
use sole_types::{ArchClassifier, ArchPrediction, Bunion, ClassifyError, LegShape, PatternId, SoleScan};

use crate::report::{assemble, Report};
use crate::resolver::resolve;

/// Request-scoped diagnosis context.
///
/// Everything one diagnosis needs besides the scan itself, captured
/// explicitly at the boundary. There is no module-level state anywhere in
/// the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisRequest {
    /// Declared leg shape.
    pub leg: LegShape,
    /// Declared bunion flag.
    pub bunion: Bunion,
    /// Diagnosis date stamped into the report.
    pub date: NaiveDate,
}

/// Result of one diagnosis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    /// Raw classifier output.
    pub prediction: ArchPrediction,
    /// Resolved recommendation identifier.
    pub pattern: PatternId,
    /// Assembled report.
    pub report: Report,
}

/// Runs one synchronous diagnosis: one inference call, one pattern
/// resolution, one report assembly.
///
/// # Errors
///
/// Propagates the classifier's [`ClassifyError`]; resolution and assembly
/// never fail.
pub fn diagnose<C: ArchClassifier>(
    classifier: &C,
    scan: &SoleScan,
    request: &DiagnosisRequest,
) -> Result<Diagnosis, ClassifyError> {
    let prediction = classifier.classify(scan)?;
    let arch = prediction.predicted();
    let pattern = resolve(arch, request.leg, request.bunion);
    let report = assemble(arch, request.leg, request.bunion, pattern, request.date);

    Ok(Diagnosis {
        prediction,
        pattern,
        report,
    })
}
