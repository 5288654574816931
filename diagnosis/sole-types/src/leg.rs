//! Leg shape labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// User-declared overall leg alignment.
///
/// Display labels are the Japanese terms used in the deployment
/// (`O脚`, `X脚`, `正常`).
///
/// # Example
///
/// ```
/// use sole_types::LegShape;
///
/// let leg: LegShape = "O脚".parse().unwrap();
/// assert_eq!(leg, LegShape::OShaped);
/// assert_eq!(leg.label(), "O脚");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegShape {
    /// Knees apart, legs bowed outward.
    OShaped,
    /// Knees together, ankles apart.
    XShaped,
    /// Balanced alignment.
    Normal,
}

impl LegShape {
    /// All leg shapes.
    pub const ALL: [Self; 3] = [Self::OShaped, Self::XShaped, Self::Normal];

    /// Returns the displayed label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OShaped => "O脚",
            Self::XShaped => "X脚",
            Self::Normal => "正常",
        }
    }
}

impl std::fmt::Display for LegShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LegShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "o" | "o脚" => Ok(Self::OShaped),
            "x" | "x脚" => Ok(Self::XShaped),
            "normal" | "正常" => Ok(Self::Normal),
            _ => Err(ValidationError::UnknownLegLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(LegShape::OShaped.label(), "O脚");
        assert_eq!(LegShape::XShaped.label(), "X脚");
        assert_eq!(LegShape::Normal.label(), "正常");
    }

    #[test]
    fn parse_short_and_japanese() {
        assert_eq!("o".parse(), Ok(LegShape::OShaped));
        assert_eq!("X".parse(), Ok(LegShape::XShaped));
        assert_eq!("normal".parse(), Ok(LegShape::Normal));
        assert_eq!("O脚".parse(), Ok(LegShape::OShaped));
        assert_eq!("X脚".parse(), Ok(LegShape::XShaped));
        assert_eq!("正常".parse(), Ok(LegShape::Normal));
    }

    #[test]
    fn parse_unknown_label() {
        let parsed: Result<LegShape, _> = "Y脚".parse();
        assert_eq!(
            parsed,
            Err(ValidationError::UnknownLegLabel("Y脚".to_string()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", LegShape::Normal), "正常");
    }
}
