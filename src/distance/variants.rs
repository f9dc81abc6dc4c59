//! Unbounded reference implementations.
//!
//! These are the earlier rungs of the optimization ladder that ends in
//! [`distance`](super::distance): a full matrix and a fixed-orientation pair
//! of rolling rows. They trim their inputs the same way the engine does and
//! must agree with it on every input. [`matrix_distance`] is the oracle the
//! other implementations are checked against.

use smallvec::SmallVec;

use super::normalize::trim_pair;

/// Full-matrix Levenshtein distance.
///
/// Allocates the whole `(m+1) x (n+1)` table.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::variants::matrix_distance;
///
/// assert_eq!(matrix_distance("kitten", "sitting"), 3);
/// assert_eq!(matrix_distance(" test", "test "), 0);
/// ```
pub fn matrix_distance(source: &str, target: &str) -> usize {
    let (source, target) = trim_pair(source, target);
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();
    let stride = n + 1;

    let mut matrix = vec![0; (m + 1) * stride];

    // First column and first row
    for i in 0..=m {
        matrix[i * stride] = i;
    }
    for (j, cell) in matrix.iter_mut().enumerate().take(stride) {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i * stride + j] = (matrix[(i - 1) * stride + j] + 1) // deletion
                .min(matrix[i * stride + j - 1] + 1) // insertion
                .min(matrix[(i - 1) * stride + j - 1] + cost); // substitution
        }
    }

    matrix[m * stride + n]
}

/// Two-row Levenshtein distance with the rows sized to `source`.
///
/// Unlike the bounded engine this never swaps operands, so the auxiliary
/// memory follows the length of `source` whichever operand is shorter.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::variants::two_row_distance;
///
/// assert_eq!(two_row_distance("saturday", "sunday"), 3);
/// ```
pub fn two_row_distance(source: &str, target: &str) -> usize {
    let (source, target) = trim_pair(source, target);
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();

    let mut prev_row: Vec<usize> = (0..=m).collect();
    let mut curr_row = vec![0; m + 1];

    for (j, &target_char) in target_chars.iter().enumerate() {
        curr_row[0] = j + 1;

        for i in 1..=m {
            let cost = if source_chars[i - 1] == target_char { 0 } else { 1 };

            curr_row[i] = (curr_row[i - 1] + 1)
                .min(prev_row[i] + 1)
                .min(prev_row[i - 1] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[m]
}
