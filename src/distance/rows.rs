//! Rolling two-row dynamic programming core.
//!
//! The full `(n+1) x (m+1)` table is never materialized. Only two rows of
//! length `m + 1` exist, where `m` is the length of the operand laid out along
//! the row. After each outer step the rows trade roles: the freshly computed
//! row becomes "previous" and the stale one is overwritten next.

use super::normalize::CodeUnit;

/// Two reusable distance rows laid out along one operand.
///
/// Each call to [`advance`](DistanceRows::advance) consumes one unit of the
/// other operand and produces the next row of the table.
#[derive(Debug, Clone)]
pub struct DistanceRows<'s, T> {
    row_units: &'s [T],
    previous: Vec<usize>,
    current: Vec<usize>,
    rows: usize,
}

impl<'s, T: CodeUnit> DistanceRows<'s, T> {
    /// Allocate both rows and seed "previous" with `0, 1, ..., m`.
    pub fn new(row_units: &'s [T]) -> Self {
        let width = row_units.len() + 1;
        Self {
            row_units,
            previous: (0..width).collect(),
            current: vec![0; width],
            rows: 0,
        }
    }

    /// Length of the operand laid out along the row.
    #[inline]
    pub fn width(&self) -> usize {
        self.row_units.len()
    }

    /// Number of rows computed so far, excluding the seed row.
    #[inline]
    pub fn rows_computed(&self) -> usize {
        self.rows
    }

    /// Compute the next row against `unit` and return it.
    ///
    /// `unit` is the next element of the outer operand. It is passed by value
    /// so the inner loop compares against a local rather than re-indexing the
    /// outer sequence on every cell.
    #[inline]
    pub fn advance(&mut self, unit: T) -> &[usize] {
        self.rows += 1;
        self.current[0] = self.rows;

        for i in 1..=self.row_units.len() {
            let cost = if self.row_units[i - 1] == unit { 0 } else { 1 };

            self.current[i] = (self.current[i - 1] + 1) // deletion
                .min(self.previous[i] + 1) // insertion
                .min(self.previous[i - 1] + cost); // substitution
        }

        std::mem::swap(&mut self.previous, &mut self.current);
        &self.previous
    }

    /// The last fully computed row.
    #[inline]
    pub fn last_row(&self) -> &[usize] {
        &self.previous
    }

    /// Distance between the row operand and every outer unit consumed so far.
    #[inline]
    pub fn distance(&self) -> usize {
        self.previous[self.row_units.len()]
    }
}
