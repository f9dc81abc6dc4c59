//! Bounded driver: orientation choice and early exit.
//!
//! The driver lays the shorter operand along the row, feeds the longer one
//! through [`DistanceRows`] a unit at a time, and after every row checks
//! whether the distance can still fit under the threshold.
//!
//! The early-exit test uses a lower bound taken over the whole row. Every
//! alignment of the two operands crosses row `j` at some cell `i`, and from
//! there it still has to cover the difference between the `n - j` and `m - i`
//! units left on either side, so
//!
//! ```text
//! distance >= min over i of (row[i] + |(n - j) - (m - i)|)
//! ```
//!
//! The bound never indexes the row by `j`, so it is valid for any `j`, and it
//! is exact on the final row.

use tracing::{debug, trace};

use super::normalize::CodeUnit;
use super::rows::DistanceRows;
use super::threshold::Threshold;
use super::Distance;

/// Lifecycle of a bounded computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// Rows remain to be computed.
    Running,
    /// The threshold was breached before the last row; terminal.
    EarlyExited,
    /// Every row was computed; terminal.
    Completed,
}

impl DriverState {
    /// Returns `true` for either terminal state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, DriverState::Running)
    }
}

/// Step-wise bounded edit distance computation.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::{BoundedDriver, Distance, DriverState, Threshold};
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
///
/// let mut driver = BoundedDriver::new(&a, &b, Threshold::AtMost(1));
/// while driver.step() == DriverState::Running {}
///
/// assert_eq!(driver.state(), DriverState::EarlyExited);
/// assert!(driver.outcome().is_some_and(Distance::is_exceeded));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedDriver<'a, T> {
    outer: &'a [T],
    rows: DistanceRows<'a, T>,
    threshold: Threshold,
    state: DriverState,
    outcome: Option<Distance>,
}

impl<'a, T: CodeUnit> BoundedDriver<'a, T> {
    /// Prepare a computation, laying the shorter operand along the row.
    ///
    /// The operands are used as given; trimming happens before this point.
    pub fn new(a: &'a [T], b: &'a [T], threshold: Threshold) -> Self {
        let swapped = a.len() > b.len();
        let (shorter, longer) = if swapped { (b, a) } else { (a, b) };

        trace!(
            target: "bounded_levenshtein::driver",
            shorter = shorter.len(),
            longer = longer.len(),
            swapped,
            %threshold,
            "orientation chosen"
        );

        let mut driver = Self {
            outer: longer,
            rows: DistanceRows::new(shorter),
            threshold,
            state: DriverState::Running,
            outcome: None,
        };

        if longer.is_empty() {
            driver.complete();
        }
        driver
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Result of the computation, once it has reached a terminal state.
    pub fn outcome(&self) -> Option<Distance> {
        self.outcome
    }

    /// Number of rows computed so far.
    pub fn rows_computed(&self) -> usize {
        self.rows.rows_computed()
    }

    /// Length of the shorter operand, which sizes both rows.
    pub fn row_width(&self) -> usize {
        self.rows.width()
    }

    /// Compute one more row and apply the early-exit check.
    ///
    /// Calling this in a terminal state does nothing.
    pub fn step(&mut self) -> DriverState {
        if self.state.is_terminal() {
            return self.state;
        }

        let j = self.rows.rows_computed();
        let unit = self.outer[j];
        let row = self.rows.advance(unit);
        let remaining = self.outer.len() - (j + 1);

        if remaining == 0 {
            self.complete();
        } else if !self.threshold.is_unbounded() {
            let bound = row_lower_bound(row, remaining);
            if self.threshold.is_exceeded_by(bound) {
                debug!(
                    target: "bounded_levenshtein::driver",
                    row = j + 1,
                    bound,
                    threshold = %self.threshold,
                    "distance exceeds threshold, stopping early"
                );
                self.state = DriverState::EarlyExited;
                self.outcome = Some(Distance::Exceeded(bound));
            }
        }

        self.state
    }

    /// Drive the computation to a terminal state and return its result.
    pub fn run(mut self) -> Distance {
        while self.step() == DriverState::Running {}
        self.outcome.unwrap_or(Distance::Exact(self.rows.distance()))
    }

    fn complete(&mut self) {
        let distance = self.rows.distance();
        self.state = DriverState::Completed;
        self.outcome = Some(if self.threshold.is_exceeded_by(distance) {
            Distance::Exceeded(distance)
        } else {
            Distance::Exact(distance)
        });
    }
}

/// Smallest distance still reachable from `row` with `remaining` outer units
/// left to consume.
#[inline]
fn row_lower_bound(row: &[usize], remaining: usize) -> usize {
    let width = row.len() - 1;
    row.iter()
        .enumerate()
        .map(|(i, &cost)| cost + remaining.abs_diff(width - i))
        .fold(usize::MAX, usize::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_unbounded_runs_every_row() {
        let a = chars("kitten");
        let b = chars("sitting");
        let mut driver = BoundedDriver::new(&a, &b, Threshold::Unbounded);

        let mut steps = 0;
        while driver.step() == DriverState::Running {
            steps += 1;
        }

        assert_eq!(steps + 1, 7);
        assert_eq!(driver.state(), DriverState::Completed);
        assert_eq!(driver.outcome(), Some(Distance::Exact(3)));
    }

    #[test]
    fn test_shorter_operand_sizes_rows() {
        let a = chars("sitting");
        let b = chars("kitten");

        let driver = BoundedDriver::new(&a, &b, Threshold::Unbounded);
        assert_eq!(driver.row_width(), 6);

        let driver = BoundedDriver::new(&b, &a, Threshold::Unbounded);
        assert_eq!(driver.row_width(), 6);
    }

    #[test]
    fn test_early_exit_skips_remaining_rows() {
        let a = chars("aaaaaaaaaa");
        let b = chars("bbbbbbbbbbbbbbbbbbbb");
        let mut driver = BoundedDriver::new(&a, &b, Threshold::AtMost(2));

        while driver.step() == DriverState::Running {}

        assert_eq!(driver.state(), DriverState::EarlyExited);
        assert!(driver.rows_computed() < b.len());
        assert!(matches!(driver.outcome(), Some(Distance::Exceeded(v)) if v > 2));
    }

    #[test]
    fn test_length_gap_exits_on_first_row() {
        // Ten units of length difference can never fit under a bound of 3.
        let a = chars("ab");
        let b = chars("abababababab");
        let mut driver = BoundedDriver::new(&a, &b, Threshold::AtMost(3));

        assert_eq!(driver.step(), DriverState::EarlyExited);
        assert_eq!(driver.rows_computed(), 1);
        assert_eq!(driver.outcome(), Some(Distance::Exceeded(10)));
    }

    #[test]
    fn test_threshold_equal_to_distance_is_exact() {
        let a = chars("kitten");
        let b = chars("sitting");
        assert_eq!(
            BoundedDriver::new(&a, &b, Threshold::AtMost(3)).run(),
            Distance::Exact(3)
        );
        assert!(BoundedDriver::new(&a, &b, Threshold::AtMost(2))
            .run()
            .is_exceeded());
    }

    #[test]
    fn test_diagonal_cell_is_not_a_lower_bound() {
        // Row 2 of "bc" against "abc" holds d("ab", "bc") = 2 on its diagonal,
        // yet the full distance is 1.
        let a = chars("bc");
        let b = chars("abc");
        assert_eq!(
            BoundedDriver::new(&a, &b, Threshold::AtMost(1)).run(),
            Distance::Exact(1)
        );
    }

    #[test]
    fn test_empty_operands_complete_immediately() {
        let empty: Vec<char> = Vec::new();
        let driver = BoundedDriver::new(&empty, &empty, Threshold::AtMost(0));
        assert_eq!(driver.state(), DriverState::Completed);
        assert_eq!(driver.run(), Distance::Exact(0));

        let word = chars("word");
        assert_eq!(
            BoundedDriver::new(&empty, &word, Threshold::Unbounded).run(),
            Distance::Exact(4)
        );
        assert_eq!(
            BoundedDriver::new(&word, &empty, Threshold::AtMost(1)).run(),
            Distance::Exceeded(4)
        );
    }

    #[test]
    fn test_step_after_terminal_is_noop() {
        let a = chars("a");
        let b = chars("b");
        let mut driver = BoundedDriver::new(&a, &b, Threshold::Unbounded);
        assert_eq!(driver.step(), DriverState::Completed);
        assert_eq!(driver.step(), DriverState::Completed);
        assert_eq!(driver.rows_computed(), 1);
    }

    #[test]
    fn test_row_lower_bound() {
        assert_eq!(row_lower_bound(&[0, 1, 2], 0), 2);
        assert_eq!(row_lower_bound(&[3], 4), 7);
        assert_eq!(row_lower_bound(&[2, 1, 0], 2), 2);
    }
}
