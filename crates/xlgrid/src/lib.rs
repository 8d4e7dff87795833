//! # xlgrid
//!
//! A Rust library for the reference and style plumbing of spreadsheet
//! documents.
//!
//! xlgrid sits between an Office Open XML reader/writer and the in-memory
//! workbook. It does not touch zip packaging or XML itself; it owns the parts
//! that must be exact for a document to survive a round trip:
//!
//! - Parse and re-emit A1 cell references and ranges, `$` anchors included
//! - Enforce the format's row and column limits
//! - Collapse per-cell styles into one shared, densely indexed style table
//! - Reject merged regions and protected ranges that overlap
//!
//! ## Example
//!
//! ```rust
//! use xlgrid::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Total").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//! sheet.set_range_style("A1:B1", &Style::new().bold(true)).unwrap();
//! sheet.merge_cells("C1:D1").unwrap();
//!
//! let address = CellAddress::parse("$B$5").unwrap();
//! assert_eq!((address.row(), address.col()), (4, 1));
//! assert_eq!(address.address_type(), AddressType::FixedRowAndColumn);
//! ```

pub mod prelude;

// Re-export core types
pub use xlgrid_core::{
    column_to_letters, letters_to_column, AddressType, Alignment, Axis, BorderEdge,
    BorderLineStyle, BorderStyle, CellAddress, CellData, CellRange, CellSource, CellValue, Color,
    ConflictKind, DocumentSink, Error, ErrorKind, FacetKind, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, ProtectedRange, Protection, Result, SaveSummary,
    SheetSource, Style, StyleErrorKind, StyleFacet, StyleRegistry, StyleSettings, StyleSheet,
    VerticalAlignment, Workbook, WorkbookSource, Worksheet, XfRecord, MAX_COLS, MAX_ROWS,
    MAX_SHEET_NAME_LEN, MAX_STYLED_RANGE_CELLS,
};

// Full module trees for the less common types
pub use xlgrid_core::{cell, style};
