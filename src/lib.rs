//! # bounded-levenshtein
//!
//! Levenshtein edit distance with linear memory and an optional ceiling.
//!
//! The engine trims boundary whitespace from both operands, lays the shorter
//! one along two rolling rows, and stops as soon as the distance is known to
//! exceed the caller's threshold.
//!
//! ## Example
//!
//! ```rust
//! use bounded_levenshtein::prelude::*;
//!
//! assert_eq!(distance("kitten", "sitting", Threshold::Unbounded), Distance::Exact(3));
//!
//! match distance("kitten", "sitting", Threshold::AtMost(1)) {
//!     Distance::Exact(d) => println!("distance: {}", d),
//!     Distance::Exceeded(bound) => println!("at least {}", bound),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{DistanceError, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::variants::{matrix_distance, two_row_distance};
    pub use crate::distance::{
        distance, distance_units, exact_distance, is_within, try_distance, BoundedDriver,
        CodeUnit, Distance, DriverState, Threshold,
    };
    pub use crate::error::{DistanceError, Result};
}
