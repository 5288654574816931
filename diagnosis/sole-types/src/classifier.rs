//! Classifier boundary trait.

use crate::error::ClassifyError;
use crate::prediction::ArchPrediction;
use crate::scan::SoleScan;

/// The injected arch-classifier boundary.
///
/// The diagnosis core never loads, fetches, or caches model artifacts; it
/// receives a classifier through this trait and calls it once per request.
/// Implementations are expected to be loaded once per process and reused
/// for every inference.
pub trait ArchClassifier {
    /// Runs one forward pass over a preprocessed scan.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifyError`] if the backend fails or produces output
    /// of an unexpected shape.
    fn classify(&self, scan: &SoleScan) -> Result<ArchPrediction, ClassifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::ArchClass;

    struct FixedClassifier([f32; 3]);

    impl ArchClassifier for FixedClassifier {
        fn classify(&self, _scan: &SoleScan) -> Result<ArchPrediction, ClassifyError> {
            ArchPrediction::from_probabilities(self.0)
                .map_err(|e| ClassifyError::backend(e.to_string()))
        }
    }

    #[test]
    fn trait_object_is_usable() {
        let classifier: &dyn ArchClassifier = &FixedClassifier([0.0, 0.0, 1.0]);
        let scan = SoleScan::new(vec![0.5; SoleScan::VALUE_COUNT]);
        let scan = match scan {
            Ok(scan) => scan,
            Err(_) => return,
        };

        let prediction = classifier.classify(&scan);
        assert_eq!(prediction.map(|p| p.predicted()).ok(), Some(ArchClass::Flat));
    }
}
