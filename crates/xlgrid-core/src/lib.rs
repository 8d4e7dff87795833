//! # xlgrid-core
//!
//! Core data structures for the xlgrid spreadsheet library.
//!
//! This crate provides the types that sit between a spreadsheet document's
//! XML layer and its in-memory model:
//! - [`CellAddress`] and [`CellRange`] - A1 reference parsing and formatting
//! - [`Style`] and [`StyleRegistry`] - Cell formatting and its deduplication
//! - [`StyleSheet`] - The indexed tables the document's style part stores
//! - [`Workbook`], [`Worksheet`] - The document session driving load and save
//!
//! ## Example
//!
//! ```rust
//! use xlgrid_core::{CellRange, Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Hello").unwrap();
//! sheet.set_cell_value("$B$1", 42.0).unwrap();
//!
//! let header = Style::new().bold(true);
//! let a = sheet.set_cell_style("A1", &header).unwrap();
//! let b = sheet.set_cell_style("B1", &Style::new().bold(true)).unwrap();
//! assert_eq!(a, b);
//!
//! assert_eq!(CellRange::parse("B5:A1").unwrap().to_a1_string(), "A1:B5");
//! ```

pub mod cell;
pub mod error;
pub mod load;
pub mod save;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{
    column_to_letters, letters_to_column, AddressType, CellAddress, CellData, CellRange,
    CellValue,
};
pub use error::{Axis, ConflictKind, Error, ErrorKind, Result, StyleErrorKind};
pub use load::{CellSource, SheetSource, WorkbookSource};
pub use save::{DocumentSink, SaveSummary};
pub use workbook::Workbook;
pub use worksheet::{ProtectedRange, Worksheet, MAX_STYLED_RANGE_CELLS};

// Re-export the commonly used style types
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FacetKind, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, Protection, Style, StyleFacet, StyleRegistry,
    StyleSettings, StyleSheet, VerticalAlignment, XfRecord,
};

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name, in characters
pub const MAX_SHEET_NAME_LEN: usize = 31;
