//! Caller-supplied distance ceilings.

use std::fmt;
use std::str::FromStr;

use crate::error::{DistanceError, Result};

/// Upper bound on the distances a caller cares about.
///
/// A bounded threshold lets the driver abandon a computation as soon as the
/// distance is known to be larger than the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Threshold {
    /// No ceiling; the exact distance is always computed.
    #[default]
    Unbounded,
    /// Distances strictly greater than this value are reported as exceeded.
    AtMost(usize),
}

impl Threshold {
    /// Build a bounded threshold.
    pub const fn at_most(max_distance: usize) -> Self {
        Threshold::AtMost(max_distance)
    }

    /// Validate an optional signed limit, where `None` means unbounded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_levenshtein::distance::Threshold;
    ///
    /// assert_eq!(Threshold::from_limit(None), Ok(Threshold::Unbounded));
    /// assert_eq!(Threshold::from_limit(Some(2)), Ok(Threshold::AtMost(2)));
    /// assert!(Threshold::from_limit(Some(-1)).is_err());
    /// ```
    pub fn from_limit(limit: Option<i64>) -> Result<Self> {
        match limit {
            None => Ok(Threshold::Unbounded),
            Some(value) => Threshold::try_from(value),
        }
    }

    /// The numeric ceiling, if any.
    pub fn limit(self) -> Option<usize> {
        match self {
            Threshold::Unbounded => None,
            Threshold::AtMost(max_distance) => Some(max_distance),
        }
    }

    /// Returns `true` if this threshold never triggers an early exit.
    pub fn is_unbounded(self) -> bool {
        matches!(self, Threshold::Unbounded)
    }

    /// Returns `true` if `value` lies strictly above the ceiling.
    #[inline(always)]
    pub fn is_exceeded_by(self, value: usize) -> bool {
        match self {
            Threshold::Unbounded => false,
            Threshold::AtMost(max_distance) => value > max_distance,
        }
    }
}

impl From<usize> for Threshold {
    fn from(max_distance: usize) -> Self {
        Threshold::AtMost(max_distance)
    }
}

impl From<Option<usize>> for Threshold {
    fn from(max_distance: Option<usize>) -> Self {
        max_distance.map_or(Threshold::Unbounded, Threshold::AtMost)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = DistanceError;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(DistanceError::NegativeThreshold(value));
        }
        // Larger than any addressable sequence, so it can never be exceeded.
        Ok(usize::try_from(value).map_or(Threshold::Unbounded, Threshold::AtMost))
    }
}

impl FromStr for Threshold {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "unbounded" | "none" | "inf" => return Ok(Threshold::Unbounded),
            _ => {}
        }
        let value: i64 = s
            .parse()
            .map_err(|_| DistanceError::InvalidThreshold(s.to_string()))?;
        Threshold::try_from(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Unbounded => write!(f, "unbounded"),
            Threshold::AtMost(max_distance) => write!(f, "{}", max_distance),
        }
    }
}
