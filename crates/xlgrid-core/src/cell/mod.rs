//! Cell-related types and utilities
//!
//! This module contains:
//! - [`column_to_letters`] / [`letters_to_column`] - The column name codec
//! - [`CellAddress`] - A cell's location (e.g., "A1", "$B$2")
//! - [`CellRange`] - A rectangular range of cells (e.g., "A1:B10")
//! - [`CellValue`] and [`CellData`] - What the worksheet grid stores per cell

mod address;
mod column;
mod range;
mod storage;
mod value;

pub use address::{AddressType, CellAddress};
pub use column::{column_to_letters, letters_to_column};
pub use range::{CellRange, CellRangeIterator};
pub use storage::{CellData, CellStorage};
pub use value::CellValue;
