//! Arch classification labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Foot-arch classification produced by the classifier.
///
/// Displayed labels are the English class names used by the trained model.
///
/// # Example
///
/// ```
/// use sole_types::ArchClass;
///
/// let arch = ArchClass::Flat;
/// assert_eq!(arch.as_str(), "Flat");
/// assert_eq!(ArchClass::from_class_index(2), Some(ArchClass::Flat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchClass {
    /// Collapsed arch, full sole contact.
    Flat,
    /// Well-formed arch with balanced load.
    Normal,
    /// Elevated arch with reduced contact area.
    High,
}

impl ArchClass {
    /// All arch classes.
    pub const ALL: [Self; 3] = [Self::Flat, Self::Normal, Self::High];

    /// Number of classes the classifier distinguishes.
    pub const COUNT: usize = 3;

    /// Returns the displayed label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    /// Maps a classifier output index to a class.
    ///
    /// The trained model emits probabilities in the order
    /// `{0: High, 1: Normal, 2: Flat}`. This ordering is part of the model
    /// artifact's contract and must not be rearranged.
    #[must_use]
    pub const fn from_class_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::High),
            1 => Some(Self::Normal),
            2 => Some(Self::Flat),
            _ => None,
        }
    }

    /// Returns the classifier output index for this class.
    ///
    /// Inverse of [`ArchClass::from_class_index`].
    #[must_use]
    pub const fn class_index(&self) -> usize {
        match self {
            Self::High => 0,
            Self::Normal => 1,
            Self::Flat => 2,
        }
    }
}

impl std::fmt::Display for ArchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArchClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::UnknownArchLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_index_round_trip() {
        for arch in ArchClass::ALL {
            assert_eq!(ArchClass::from_class_index(arch.class_index()), Some(arch));
        }
    }

    #[test]
    fn class_index_order() {
        // Trained artifact ordering: 0 High, 1 Normal, 2 Flat.
        assert_eq!(ArchClass::from_class_index(0), Some(ArchClass::High));
        assert_eq!(ArchClass::from_class_index(1), Some(ArchClass::Normal));
        assert_eq!(ArchClass::from_class_index(2), Some(ArchClass::Flat));
        assert_eq!(ArchClass::from_class_index(3), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ArchClass::Flat), "Flat");
        assert_eq!(format!("{}", ArchClass::High), "High");
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("flat".parse(), Ok(ArchClass::Flat));
        assert_eq!("NORMAL".parse(), Ok(ArchClass::Normal));
        assert_eq!("High".parse(), Ok(ArchClass::High));
    }

    #[test]
    fn parse_unknown_label() {
        let parsed: Result<ArchClass, _> = "arched".parse();
        assert_eq!(
            parsed,
            Err(ValidationError::UnknownArchLabel("arched".to_string()))
        );
    }

    #[test]
    fn serialization_round_trip() {
        let json = serde_json::to_string(&ArchClass::High);
        assert!(json.is_ok());

        let parsed: Result<ArchClass, _> = serde_json::from_str(&json.unwrap_or_default());
        assert_eq!(parsed.ok(), Some(ArchClass::High));
    }
}
