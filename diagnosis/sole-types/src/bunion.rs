//! Bunion (hallux valgus) flag.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// User-declared presence of a bunion.
///
/// This is declared on the input form, never inferred from the image.
/// Display labels are the deployment's Japanese terms (`あり`, `なし`).
///
/// # Example
///
/// ```
/// use sole_types::Bunion;
///
/// assert!(Bunion::Present.is_present());
/// assert_eq!(Bunion::from_present(false), Bunion::Absent);
/// assert_eq!(Bunion::Absent.label(), "なし");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bunion {
    /// Bunion declared present.
    Present,
    /// Bunion declared absent.
    Absent,
}

impl Bunion {
    /// Returns the displayed label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Present => "あり",
            Self::Absent => "なし",
        }
    }

    /// Returns `true` if a bunion was declared.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    /// Creates a flag from a boolean.
    #[must_use]
    pub const fn from_present(present: bool) -> Self {
        if present {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

impl std::fmt::Display for Bunion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Bunion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" | "yes" | "あり" => Ok(Self::Present),
            "absent" | "no" | "なし" => Ok(Self::Absent),
            _ => Err(ValidationError::UnknownBunionLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_present_round_trip() {
        assert!(Bunion::from_present(true).is_present());
        assert!(!Bunion::from_present(false).is_present());
    }

    #[test]
    fn labels() {
        assert_eq!(Bunion::Present.label(), "あり");
        assert_eq!(Bunion::Absent.label(), "なし");
    }

    #[test]
    fn parse_variants() {
        assert_eq!("present".parse(), Ok(Bunion::Present));
        assert_eq!("NO".parse(), Ok(Bunion::Absent));
        assert_eq!("あり".parse(), Ok(Bunion::Present));
        assert_eq!("なし".parse(), Ok(Bunion::Absent));
    }

    #[test]
    fn parse_unknown_label() {
        let parsed: Result<Bunion, _> = "maybe".parse();
        assert_eq!(
            parsed,
            Err(ValidationError::UnknownBunionLabel("maybe".to_string()))
        );
    }
}
