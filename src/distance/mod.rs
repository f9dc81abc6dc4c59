//! Bounded Levenshtein distance.
//!
//! The engine is built in three layers:
//! - **Normalization** ([`trim_units`]): trims boundary whitespace from both
//!   operands without copying them
//! - **DP core** ([`DistanceRows`]): two rolling rows sized to the shorter
//!   operand, swapped after every outer step
//! - **Bounded driver** ([`BoundedDriver`]): picks the orientation and stops
//!   as soon as the distance provably exceeds the caller's [`Threshold`]
//!
//! The unbounded [`variants`] are kept alongside as reference implementations
//! and benchmark baselines.

use std::fmt;

use smallvec::SmallVec;

use crate::error::Result;

mod driver;
mod normalize;
mod rows;
mod threshold;
pub mod variants;

pub use driver::{BoundedDriver, DriverState};
pub use normalize::{trim_pair, trim_units, CodeUnit};
pub use rows::DistanceRows;
pub use threshold::Threshold;

/// Outcome of a bounded distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// The exact edit distance.
    Exact(usize),
    /// The distance is greater than the threshold.
    ///
    /// The carried value is the lower bound that triggered the abort. It is
    /// strictly above the threshold but is not, in general, the exact distance.
    Exceeded(usize),
}

impl Distance {
    /// The carried value, exact or not.
    pub fn value(self) -> usize {
        match self {
            Distance::Exact(d) | Distance::Exceeded(d) => d,
        }
    }

    /// The exact distance, if it was computed.
    pub fn exact(self) -> Option<usize> {
        match self {
            Distance::Exact(d) => Some(d),
            Distance::Exceeded(_) => None,
        }
    }

    /// Returns `true` if the threshold was exceeded.
    pub fn is_exceeded(self) -> bool {
        matches!(self, Distance::Exceeded(_))
    }

    /// Returns `true` if the distance fits under the threshold.
    pub fn is_within(self) -> bool {
        !self.is_exceeded()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Exact(d) => write!(f, "{}", d),
            Distance::Exceeded(d) => write!(f, ">={}", d),
        }
    }
}

/// Compute the Levenshtein distance between two strings, up to a threshold.
///
/// Both strings are trimmed of leading and trailing whitespace, then compared
/// by Unicode scalar value. The rows are sized to the shorter operand.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::{distance, Distance, Threshold};
///
/// assert_eq!(distance("kitten", "sitting", Threshold::Unbounded), Distance::Exact(3));
/// assert_eq!(distance(" test", "test ", Threshold::AtMost(0)), Distance::Exact(0));
/// assert!(distance("kitten", "sitting", Threshold::AtMost(1)).is_exceeded());
/// ```
pub fn distance(a: &str, b: &str, threshold: Threshold) -> Distance {
    let (a, b) = trim_pair(a, b);
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();

    BoundedDriver::new(&a_chars, &b_chars, threshold).run()
}

/// Compute the exact Levenshtein distance between two trimmed strings.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::exact_distance;
///
/// assert_eq!(exact_distance("kitten", "sitten"), 1);
/// assert_eq!(exact_distance("", "  abc "), 3);
/// ```
pub fn exact_distance(a: &str, b: &str) -> usize {
    distance(a, b, Threshold::Unbounded).value()
}

/// Compute a distance with a signed, optional maximum supplied by a caller.
///
/// `None` means unbounded. A negative maximum is rejected before any work is
/// done.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::{try_distance, Distance};
/// use bounded_levenshtein::DistanceError;
///
/// assert_eq!(try_distance("test", "best", Some(1)), Ok(Distance::Exact(1)));
/// assert_eq!(
///     try_distance("test", "best", Some(-1)),
///     Err(DistanceError::NegativeThreshold(-1))
/// );
/// ```
pub fn try_distance(a: &str, b: &str, max_distance: Option<i64>) -> Result<Distance> {
    let threshold = Threshold::from_limit(max_distance)?;
    Ok(distance(a, b, threshold))
}

/// Returns `true` if the distance between `a` and `b` is at most `max_distance`.
pub fn is_within(a: &str, b: &str, max_distance: usize) -> bool {
    distance(a, b, Threshold::AtMost(max_distance)).is_within()
}

/// Compute a bounded distance over arbitrary code units.
///
/// Useful when the caller's text is already in another encoding, such as
/// UTF-16 code units or raw bytes. Units are trimmed according to their
/// [`CodeUnit`] implementation and compared by equality only.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::{distance_units, Distance, Threshold};
///
/// let a: Vec<u16> = " Kitten".encode_utf16().collect();
/// let b: Vec<u16> = "Miten ".encode_utf16().collect();
/// assert_eq!(distance_units(&a, &b, Threshold::Unbounded), Distance::Exact(2));
/// ```
pub fn distance_units<T: CodeUnit>(a: &[T], b: &[T], threshold: Threshold) -> Distance {
    BoundedDriver::new(trim_units(a), trim_units(b), threshold).run()
}
