//! Cell address type

use std::fmt;
use std::str::FromStr;

use super::column::{letters_to_column, push_letters};
use crate::error::{Axis, Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A cell address (e.g., "A1", "$B$2")
///
/// Addresses use column letters (A-XFD) followed by a 1-based row number
/// (1-1048576). A `$` before the letters anchors the column and a `$` before
/// the digits anchors the row; an anchored part does not shift when the
/// reference is copied.
///
/// Two addresses naming the same cell with different anchoring are not
/// equal: anchoring is part of the reference's text and must survive a
/// load/save round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    row: u32,
    col: u16,
    row_anchored: bool,
    col_anchored: bool,
}

/// Classification of an address by its anchor flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressType {
    /// `A1`
    #[default]
    Default,
    /// `A$1`
    FixedRow,
    /// `$A1`
    FixedColumn,
    /// `$A$1`
    FixedRowAndColumn,
}

impl AddressType {
    /// Build from the row and column anchor flags
    pub const fn from_anchors(row_anchored: bool, col_anchored: bool) -> Self {
        match (row_anchored, col_anchored) {
            (false, false) => AddressType::Default,
            (true, false) => AddressType::FixedRow,
            (false, true) => AddressType::FixedColumn,
            (true, true) => AddressType::FixedRowAndColumn,
        }
    }

    /// Whether the row is anchored
    pub const fn row_anchored(self) -> bool {
        matches!(
            self,
            AddressType::FixedRow | AddressType::FixedRowAndColumn
        )
    }

    /// Whether the column is anchored
    pub const fn col_anchored(self) -> bool {
        matches!(
            self,
            AddressType::FixedColumn | AddressType::FixedRowAndColumn
        )
    }
}

impl CellAddress {
    /// Create a relative address from 0-based indices
    pub fn new(row: u32, col: u16) -> Result<Self> {
        Self::with_anchors(row, col, false, false)
    }

    /// Create an address with explicit anchor flags
    pub fn with_anchors(
        row: u32,
        col: u16,
        row_anchored: bool,
        col_anchored: bool,
    ) -> Result<Self> {
        check_bounds(row, col)?;
        Ok(Self {
            row,
            col,
            row_anchored,
            col_anchored,
        })
    }

    /// Create a fully anchored address ($A$1 style)
    pub fn absolute(row: u32, col: u16) -> Result<Self> {
        Self::with_anchors(row, col, true, true)
    }

    /// Build an address whose indices are already known to be in bounds
    pub(crate) const fn from_parts(
        row: u32,
        col: u16,
        row_anchored: bool,
        col_anchored: bool,
    ) -> Self {
        Self {
            row,
            col,
            row_anchored,
            col_anchored,
        }
    }

    /// Row index (0-based)
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Column index (0-based, A=0, XFD=16383)
    pub const fn col(&self) -> u16 {
        self.col
    }

    /// Whether the row carries a `$` anchor
    pub const fn is_row_anchored(&self) -> bool {
        self.row_anchored
    }

    /// Whether the column carries a `$` anchor
    pub const fn is_col_anchored(&self) -> bool {
        self.col_anchored
    }

    /// Anchor classification of this address
    pub const fn address_type(&self) -> AddressType {
        AddressType::from_anchors(self.row_anchored, self.col_anchored)
    }

    /// The same cell with different anchoring
    pub const fn with_anchor_type(self, address_type: AddressType) -> Self {
        Self {
            row_anchored: address_type.row_anchored(),
            col_anchored: address_type.col_anchored(),
            ..self
        }
    }

    /// Whether both addresses name the same cell, ignoring anchors
    pub const fn same_cell(&self, other: &CellAddress) -> bool {
        self.row == other.row && self.col == other.col
    }

    /// Parse a cell address from A1-style notation
    ///
    /// Letters are case-insensitive; whitespace is not permitted.
    ///
    /// # Examples
    /// ```
    /// use xlgrid_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row(), 0);
    /// assert_eq!(addr.col(), 0);
    ///
    /// let addr = CellAddress::parse("$B$5").unwrap();
    /// assert_eq!(addr.row(), 4);
    /// assert_eq!(addr.col(), 1);
    /// assert!(addr.is_row_anchored());
    /// assert!(addr.is_col_anchored());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::format(s, "empty address"));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_anchored = if bytes.first() == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::format(s, "no column letters"));
        }
        let col_end = pos;

        let row_anchored = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let row_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == row_start {
            return Err(Error::format(s, "no row number"));
        }
        if pos != bytes.len() {
            return Err(Error::format(s, "unexpected characters after row number"));
        }

        let col = letters_to_column(&s[col_start..col_end])?;

        // Rows are 1-based in text; saturate so an overlong digit run is a
        // range error rather than a wrap
        let row = bytes[row_start..].iter().fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as u64)
        });
        if row == 0 || row > MAX_ROWS as u64 {
            return Err(Error::OutOfBounds {
                axis: Axis::Row,
                value: row,
                max: MAX_ROWS as u64,
            });
        }

        Ok(Self {
            row: (row - 1) as u32,
            col,
            row_anchored,
            col_anchored,
        })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = String::with_capacity(12);
        self.write_a1(&mut result);
        result
    }

    pub(crate) fn write_a1(&self, out: &mut String) {
        if self.col_anchored {
            out.push('$');
        }
        push_letters(self.col, out);

        if self.row_anchored {
            out.push('$');
        }
        out.push_str(&(self.row + 1).to_string());
    }
}

fn check_bounds(row: u32, col: u16) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::OutOfBounds {
            axis: Axis::Row,
            value: row as u64 + 1,
            max: MAX_ROWS as u64,
        });
    }
    if col >= MAX_COLS {
        return Err(Error::OutOfBounds {
            axis: Axis::Column,
            value: col as u64,
            max: MAX_COLS as u64 - 1,
        });
    }
    Ok(())
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
