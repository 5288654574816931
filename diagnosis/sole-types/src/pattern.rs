//! Insole recommendation pattern identifiers.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Insole recommendation identifier, always in `[1, 12]`.
///
/// Each of the twelve identifiers selects one insole product. The value is
/// derived deterministically from the arch/leg/bunion combination by the
/// pattern resolver.
///
/// # Example
///
/// ```
/// use sole_types::PatternId;
///
/// let id = PatternId::new(7);
/// assert_eq!(id.map(PatternId::get), Some(7));
/// assert_eq!(PatternId::new(0), None);
/// assert_eq!(PatternId::new(13), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatternId(u8);

impl PatternId {
    /// Number of distinct pattern identifiers.
    pub const COUNT: u8 = 12;

    /// All twelve identifiers in ascending order.
    pub const ALL: [Self; 12] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
    ];

    /// Creates a pattern identifier, rejecting values outside `[1, 12]`.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id != 0 && id <= Self::COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Creates a pattern identifier, erroring on out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternIdOutOfRange`] for values outside
    /// `[1, 12]`.
    pub const fn try_new(id: u8) -> Result<Self, ValidationError> {
        match Self::new(id) {
            Some(pattern) => Ok(pattern),
            None => Err(ValidationError::PatternIdOutOfRange(id)),
        }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
