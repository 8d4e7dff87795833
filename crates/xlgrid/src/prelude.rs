//! Prelude module - common imports for xlgrid users
//!
//! ```rust
//! use xlgrid::prelude::*;
//! ```

pub use crate::{
    // Cell references
    AddressType,
    CellAddress,
    CellRange,
    CellValue,

    // Style types
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    Color,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    NumberFormat,
    Protection,
    Style,
    StyleFacet,
    StyleRegistry,
    StyleSettings,
    VerticalAlignment,

    // Document types
    DocumentSink,
    SheetSource,
    StyleSheet,
    Workbook,
    WorkbookSource,
    Worksheet,

    // Error types
    Error,
    ErrorKind,
    Result,
};
