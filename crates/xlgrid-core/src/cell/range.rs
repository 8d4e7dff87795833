//! Cell range type

use std::fmt;
use std::str::FromStr;

use super::CellAddress;
use crate::error::{Error, Result};

/// A rectangular range of cells (e.g., "A1:B10")
///
/// A range is always normalized so that `start` is the top-left corner and
/// `end` the bottom-right. Normalization is done per axis: `"B1:A5"` is the
/// rectangle spanning columns A-B and rows 1-5, i.e. `A1:B5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    start: CellAddress,
    end: CellAddress,
}

impl CellRange {
    /// Create a range spanning two corners
    ///
    /// Each anchor flag travels with the row or column value it belongs to.
    /// When both corners share a row (or column) nothing is swapped on that
    /// axis, so the start keeps the first corner's flag and the end keeps the
    /// second corner's.
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        let ((start_row, start_row_anchored), (end_row, end_row_anchored)) = order(
            (a.row(), a.is_row_anchored()),
            (b.row(), b.is_row_anchored()),
        );
        let ((start_col, start_col_anchored), (end_col, end_col_anchored)) = order(
            (a.col(), a.is_col_anchored()),
            (b.col(), b.is_col_anchored()),
        );

        Self {
            start: CellAddress::from_parts(
                start_row,
                start_col,
                start_row_anchored,
                start_col_anchored,
            ),
            end: CellAddress::from_parts(end_row, end_col, end_row_anchored, end_col_anchored),
        }
    }

    /// Create a relative range from 0-based indices
    pub fn from_indices(
        start_row: u32,
        start_col: u16,
        end_row: u32,
        end_col: u16,
    ) -> Result<Self> {
        Ok(Self::new(
            CellAddress::new(start_row, start_col)?,
            CellAddress::new(end_row, end_col)?,
        ))
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Top-left corner
    pub const fn start(&self) -> CellAddress {
        self.start
    }

    /// Bottom-right corner
    pub const fn end(&self) -> CellAddress {
        self.end
    }

    /// Parse a range from "A1:B10" notation
    ///
    /// Exactly one `:` is required. A corner that fails address parsing is
    /// reported as a format error naming that corner.
    ///
    /// # Examples
    /// ```
    /// use xlgrid_core::CellRange;
    ///
    /// let range = CellRange::parse("B1:A5").unwrap();
    /// assert_eq!(range.to_a1_string(), "A1:B5");
    /// assert!(CellRange::parse("A1:B2:C3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let (first, second) = match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => (first, second),
            (_, None, _) => return Err(Error::format(s, "missing ':' separator")),
            _ => return Err(Error::format(s, "more than one ':' separator")),
        };

        let start = CellAddress::parse(first)
            .map_err(|e| Error::format(s, format!("invalid start cell: {e}")))?;
        let end = CellAddress::parse(second)
            .map_err(|e| Error::format(s, format!("invalid end cell: {e}")))?;

        Ok(Self::new(start, end))
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row() >= self.start.row()
            && addr.row() <= self.end.row()
            && addr.col() >= self.start.col()
            && addr.col() <= self.end.col()
    }

    /// Check if this range overlaps with another
    pub fn intersects(&self, other: &CellRange) -> bool {
        self.start.row() <= other.end.row()
            && self.end.row() >= other.start.row()
            && self.start.col() <= other.end.col()
            && self.end.col() >= other.start.col()
    }

    /// Get the intersection of two ranges, if any
    pub fn intersection(&self, other: &CellRange) -> Option<CellRange> {
        if !self.intersects(other) {
            return None;
        }

        Some(Self::new(
            CellAddress::from_parts(
                self.start.row().max(other.start.row()),
                self.start.col().max(other.start.col()),
                false,
                false,
            ),
            CellAddress::from_parts(
                self.end.row().min(other.end.row()),
                self.end.col().min(other.end.col()),
                false,
                false,
            ),
        ))
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row() - self.start.row() + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col() - self.start.col() + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Whether the range covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.start.same_cell(&self.end)
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row(),
            current_col: self.start.col(),
            remaining: self.cell_count(),
        }
    }

    /// Format as "A1:B10", always with both corners
    pub fn to_a1_string(&self) -> String {
        let mut result = String::with_capacity(24);
        self.start.write_a1(&mut result);
        result.push(':');
        self.end.write_a1(&mut result);
        result
    }
}

/// Order two (value, anchor) pairs, keeping the given order on ties
fn order<T: Ord + Copy>(a: (T, bool), b: (T, bool)) -> ((T, bool), (T, bool)) {
    if b.0 < a.0 {
        (b, a)
    } else {
        (a, b)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
#[derive(Debug, Clone)]
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u16,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::from_parts(self.current_row, self.current_col, false, false);
        self.remaining -= 1;

        if self.current_col == self.range.end.col() {
            self.current_col = self.range.start.col();
            self.current_row += 1;
        } else {
            self.current_col += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.remaining).ok())
    }
}
