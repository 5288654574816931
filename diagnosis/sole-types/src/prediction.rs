//! Classifier prediction types.

use serde::{Deserialize, Serialize};

use crate::arch::ArchClass;
use crate::error::ValidationError;

/// Output of one arch-classification forward pass.
///
/// Holds the full probability vector (indexed by classifier output index,
/// see [`ArchClass::from_class_index`]) together with the predicted class.
///
/// # Example
///
/// ```
/// use sole_types::{ArchClass, ArchPrediction};
///
/// let prediction = ArchPrediction::from_probabilities([0.1, 0.2, 0.7]);
/// assert_eq!(prediction.map(|p| p.predicted()), Ok(ArchClass::Flat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchPrediction {
    probabilities: [f32; ArchClass::COUNT],
    predicted: ArchClass,
}

impl ArchPrediction {
    /// Creates a prediction from a probability vector.
    ///
    /// The predicted class is the argmax; ties resolve to the lowest index
    /// so repeated calls are deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProbability`] if any entry is not a
    /// finite value in `[0, 1]`.
    pub fn from_probabilities(
        probabilities: [f32; ArchClass::COUNT],
    ) -> Result<Self, ValidationError> {
        for &p in &probabilities {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(ValidationError::InvalidProbability(p));
            }
        }

        let mut best = 0;
        for (index, &p) in probabilities.iter().enumerate() {
            if p > probabilities[best] {
                best = index;
            }
        }

        // Indices 0..COUNT always map to a class.
        match ArchClass::from_class_index(best) {
            Some(predicted) => Ok(Self {
                probabilities,
                predicted,
            }),
            None => Err(ValidationError::InvalidProbability(probabilities[best])),
        }
    }

    /// Returns the predicted class.
    #[must_use]
    pub const fn predicted(&self) -> ArchClass {
        self.predicted
    }

    /// Returns the full probability vector, indexed by classifier output
    /// index.
    #[must_use]
    pub const fn probabilities(&self) -> [f32; ArchClass::COUNT] {
        self.probabilities
    }

    /// Returns the probability of the predicted class.
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.probabilities[self.predicted.class_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_selects_predicted() {
        let prediction = ArchPrediction::from_probabilities([0.7, 0.2, 0.1]);
        assert_eq!(prediction.map(|p| p.predicted()), Ok(ArchClass::High));

        let prediction = ArchPrediction::from_probabilities([0.1, 0.8, 0.1]);
        assert_eq!(prediction.map(|p| p.predicted()), Ok(ArchClass::Normal));

        let prediction = ArchPrediction::from_probabilities([0.1, 0.2, 0.7]);
        assert_eq!(prediction.map(|p| p.predicted()), Ok(ArchClass::Flat));
    }

    #[test]
    fn tie_resolves_to_lowest_index() {
        let prediction = ArchPrediction::from_probabilities([0.4, 0.4, 0.2]);
        assert_eq!(prediction.map(|p| p.predicted()), Ok(ArchClass::High));
    }

    #[test]
    fn confidence_is_predicted_probability() {
        let prediction = ArchPrediction::from_probabilities([0.1, 0.2, 0.7]);
        let confidence = prediction.map(|p| p.confidence());
        assert_eq!(confidence, Ok(0.7));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let result = ArchPrediction::from_probabilities([0.5, 1.2, 0.1]);
        assert_eq!(result, Err(ValidationError::InvalidProbability(1.2)));
    }

    #[test]
    fn rejects_nan_probability() {
        let result = ArchPrediction::from_probabilities([f32::NAN, 0.5, 0.5]);
        assert!(result.is_err());
    }
}
