//! Boundary whitespace trimming.
//!
//! Both operands are trimmed before any distance is computed. Trimming only
//! narrows a borrowed view; it never copies the input.

/// An atomic unit of a sequence the engine can compare.
///
/// The engine only ever tests units for equality. The one other property it
/// needs is whether a unit counts as whitespace, which decides what the
/// normalization layer strips from the ends of each operand.
pub trait CodeUnit: Copy + Eq {
    /// Returns `true` if this unit is stripped by trimming.
    fn is_whitespace(self) -> bool;
}

impl CodeUnit for char {
    #[inline(always)]
    fn is_whitespace(self) -> bool {
        char::is_whitespace(self)
    }
}

/// UTF-16 code units. Surrogates are never whitespace.
impl CodeUnit for u16 {
    #[inline(always)]
    fn is_whitespace(self) -> bool {
        char::from_u32(u32::from(self)).is_some_and(char::is_whitespace)
    }
}

/// Raw bytes, trimmed by ASCII whitespace.
impl CodeUnit for u8 {
    #[inline(always)]
    fn is_whitespace(self) -> bool {
        self.is_ascii_whitespace()
    }
}

/// Trim leading and trailing whitespace from a slice of code units.
///
/// A slice made only of whitespace trims to an empty slice.
///
/// # Example
///
/// ```rust
/// use bounded_levenshtein::distance::trim_units;
///
/// let units: Vec<char> = "  ab c ".chars().collect();
/// assert_eq!(trim_units(&units), &['a', 'b', ' ', 'c']);
/// ```
pub fn trim_units<T: CodeUnit>(units: &[T]) -> &[T] {
    let start = units
        .iter()
        .position(|unit| !unit.is_whitespace())
        .unwrap_or(units.len());
    let end = units
        .iter()
        .rposition(|unit| !unit.is_whitespace())
        .map_or(start, |last| last + 1);

    &units[start..end]
}

/// Trim both operands of a string comparison.
#[inline]
pub fn trim_pair<'a, 'b>(a: &'a str, b: &'b str) -> (&'a str, &'b str) {
    (a.trim(), b.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_units_both_ends() {
        let units: Vec<char> = "\t hello \n".chars().collect();
        let trimmed: String = trim_units(&units).iter().collect();
        assert_eq!(trimmed, "hello");
    }

    #[test]
    fn test_trim_units_keeps_interior_whitespace() {
        let units: Vec<char> = " a b ".chars().collect();
        assert_eq!(trim_units(&units), &['a', ' ', 'b']);
    }

    #[test]
    fn test_trim_units_all_whitespace() {
        let units: Vec<char> = " \t\r\n ".chars().collect();
        assert!(trim_units(&units).is_empty());
        assert!(trim_units::<char>(&[]).is_empty());
    }

    #[test]
    fn test_trim_units_borrows_input() {
        let units: Vec<char> = "abc".chars().collect();
        let trimmed = trim_units(&units);
        assert_eq!(trimmed.as_ptr(), units.as_ptr());
        assert_eq!(trimmed.len(), 3);
    }

    #[test]
    fn test_trim_utf16_units() {
        // U+3000 IDEOGRAPHIC SPACE is whitespace, a lone surrogate is not.
        let units: Vec<u16> = vec![0x3000, 0x0041, 0xD800, 0x0020];
        assert_eq!(trim_units(&units), &[0x0041u16, 0xD800]);
    }

    #[test]
    fn test_trim_bytes() {
        assert_eq!(trim_units(b"  xy\t".as_slice()), b"xy");
    }

    #[test]
    fn test_trim_pair_matches_char_trimming() {
        let (a, b) = trim_pair(" Levenshtein", "Mwilwnstein ");
        assert_eq!(a, "Levenshtein");
        assert_eq!(b, "Mwilwnstein");

        let chars: Vec<char> = "\u{2003}x\u{00A0}".chars().collect();
        let trimmed: String = trim_units(&chars).iter().collect();
        assert_eq!(trimmed, "\u{2003}x\u{00A0}".trim());
    }
}
