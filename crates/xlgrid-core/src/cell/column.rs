//! Column name codec
//!
//! Column names are a bijective base-26 numeral: the digits are `A..=Z`
//! standing for 1..=26 and there is no zero digit, which is why `Z` is
//! followed by `AA` rather than `A0`.

use crate::error::{Axis, Error, Result};
use crate::MAX_COLS;

/// Longest column name the worksheet bounds allow (`XFD`)
const MAX_LETTERS: usize = 3;

/// Convert a 0-based column index to its letters (0 = A, 25 = Z, 26 = AA, ...)
///
/// # Examples
/// ```
/// use xlgrid_core::cell::column_to_letters;
///
/// assert_eq!(column_to_letters(0).unwrap(), "A");
/// assert_eq!(column_to_letters(16383).unwrap(), "XFD");
/// assert!(column_to_letters(16384).is_err());
/// ```
pub fn column_to_letters(col: u16) -> Result<String> {
    if col >= MAX_COLS {
        return Err(Error::OutOfBounds {
            axis: Axis::Column,
            value: col as u64,
            max: MAX_COLS as u64 - 1,
        });
    }

    let mut letters = String::with_capacity(MAX_LETTERS);
    push_letters(col, &mut letters);
    Ok(letters)
}

/// Append the letters of an in-bounds column to `out`
pub(crate) fn push_letters(col: u16, out: &mut String) {
    debug_assert!(col < MAX_COLS);
    let mut buf = [0u8; MAX_LETTERS];
    let mut pos = MAX_LETTERS;
    let mut n = col as u32 + 1;

    while n > 0 {
        n -= 1;
        pos -= 1;
        buf[pos] = (n % 26) as u8 + b'A';
        n /= 26;
    }

    out.extend(buf[pos..].iter().map(|&b| b as char));
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26, ...)
///
/// Letters are case-insensitive. Non-letter input is a format error; a name
/// that decodes past `XFD` (including any name longer than three letters) is
/// a range error.
pub fn letters_to_column(letters: &str) -> Result<u16> {
    if letters.is_empty() {
        return Err(Error::format(letters, "empty column letters"));
    }

    if let Some(c) = letters.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Error::format(letters, format!("invalid column letter '{c}'")));
    }

    if letters.len() > MAX_LETTERS {
        return Err(Error::OutOfBounds {
            axis: Axis::Column,
            value: decode_saturating(letters) - 1,
            max: MAX_COLS as u64 - 1,
        });
    }

    let col = decode_saturating(letters) - 1;
    if col >= MAX_COLS as u64 {
        return Err(Error::OutOfBounds {
            axis: Axis::Column,
            value: col,
            max: MAX_COLS as u64 - 1,
        });
    }

    Ok(col as u16)
}

/// 1-based bijective value of an all-letter string
fn decode_saturating(letters: &str) -> u64 {
    letters.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(26)
            .saturating_add((b.to_ascii_uppercase() - b'A') as u64 + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(0).unwrap(), "A");
        assert_eq!(column_to_letters(1).unwrap(), "B");
        assert_eq!(column_to_letters(25).unwrap(), "Z");
        assert_eq!(column_to_letters(26).unwrap(), "AA");
        assert_eq!(column_to_letters(27).unwrap(), "AB");
        assert_eq!(column_to_letters(701).unwrap(), "ZZ");
        assert_eq!(column_to_letters(702).unwrap(), "AAA");
        assert_eq!(column_to_letters(16383).unwrap(), "XFD");
    }

    #[test]
    fn test_column_to_letters_out_of_bounds() {
        let err = column_to_letters(16384).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(column_to_letters(u16::MAX).is_err());
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 0);
        assert_eq!(letters_to_column("Z").unwrap(), 25);
        assert_eq!(letters_to_column("AA").unwrap(), 26);
        assert_eq!(letters_to_column("ZZ").unwrap(), 701);
        assert_eq!(letters_to_column("AAA").unwrap(), 702);
        assert_eq!(letters_to_column("XFD").unwrap(), 16383);

        // Case insensitive
        assert_eq!(letters_to_column("a").unwrap(), 0);
        assert_eq!(letters_to_column("xFd").unwrap(), 16383);
    }

    #[test]
    fn test_letters_to_column_errors() {
        assert_eq!(letters_to_column("").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(letters_to_column("A1").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(letters_to_column("Ä").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(letters_to_column("XFE").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(letters_to_column("ZZZ").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(letters_to_column("AAAA").unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_round_trip_all_columns() {
        for col in 0..MAX_COLS {
            let letters = column_to_letters(col).unwrap();
            assert_eq!(letters_to_column(&letters).unwrap(), col);
        }
    }
}
