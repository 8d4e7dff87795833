//! Error types for xlgrid-core

use thiserror::Error;

use crate::cell::CellRange;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Dimension that a bounds check failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Worksheet row (reported 1-based)
    Row,
    /// Worksheet column (reported 0-based)
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Style error sub-kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleErrorKind {
    /// A style index was dereferenced that the registry never assigned
    MissingReference,
    /// A style feature has no representation in the target schema
    NotSupported,
}

/// Range conflicts detected by the worksheet grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// Two merged regions overlap
    MergedCells,
    /// Two protected ranges overlap
    ProtectedRange,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::MergedCells => f.write_str("merged region"),
            ConflictKind::ProtectedRange => f.write_str("protected range"),
        }
    }
}

/// Coarse classification of an [`Error`], suitable for exhaustive matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed address or range text
    Format,
    /// Syntactically valid but outside the worksheet's dimensional limits
    Range,
    /// Style registry failure
    Style(StyleErrorKind),
    /// Conflicting worksheet declarations
    Worksheet,
    /// Workbook structure (sheet names and lookups) or sink failure
    Workbook,
}

/// Errors that can occur in xlgrid-core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed address, range or column text
    #[error("'{text}': {reason}")]
    Format { text: String, reason: String },

    /// A row or column outside the worksheet bounds
    #[error("{axis} {value} out of bounds (max: {max})")]
    OutOfBounds { axis: Axis, value: u64, max: u64 },

    /// Style registry failure
    #[error("{detail}")]
    Style { kind: StyleErrorKind, detail: String },

    /// Two ranges of the same kind overlap
    #[error("{kind} {requested} overlaps existing {kind} {existing}")]
    WorksheetConflict {
        kind: ConflictKind,
        existing: CellRange,
        requested: CellRange,
    },

    /// A range too large for an operation that stores every cell
    #[error("range {range} covers {cells} cells (max: {max})")]
    RangeTooLarge { range: CellRange, cells: u64, max: u64 },

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// The external document sink rejected a record
    #[error("{0}")]
    Sink(String),
}

impl Error {
    pub(crate) fn format<T: Into<String>, R: Into<String>>(text: T, reason: R) -> Self {
        Error::Format {
            text: text.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_reference(index: u32, table_len: usize) -> Self {
        Error::Style {
            kind: StyleErrorKind::MissingReference,
            detail: format!(
                "style index {index} was never assigned (table has {table_len} entries)"
            ),
        }
    }

    pub(crate) fn not_supported<S: Into<String>>(detail: S) -> Self {
        Error::Style {
            kind: StyleErrorKind::NotSupported,
            detail: detail.into(),
        }
    }

    /// Create a sink error with a message
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        Error::Sink(msg.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } => ErrorKind::Format,
            Error::OutOfBounds { .. } | Error::RangeTooLarge { .. } => ErrorKind::Range,
            Error::Style { kind, .. } => ErrorKind::Style(*kind),
            Error::WorksheetConflict { .. } => ErrorKind::Worksheet,
            Error::SheetNotFound(_)
            | Error::InvalidSheetName(_)
            | Error::DuplicateSheetName(_)
            | Error::Sink(_) => ErrorKind::Workbook,
        }
    }

    /// Human-readable title for this error; [`Display`](std::fmt::Display) gives the detail
    pub fn title(&self) -> &'static str {
        match self {
            Error::Format { .. } => "Invalid reference format",
            Error::OutOfBounds { .. } => "Reference out of range",
            Error::RangeTooLarge { .. } => "Range too large",
            Error::Style {
                kind: StyleErrorKind::MissingReference,
                ..
            } => "Missing style reference",
            Error::Style {
                kind: StyleErrorKind::NotSupported,
                ..
            } => "Style feature not supported",
            Error::WorksheetConflict { .. } => "Conflicting worksheet ranges",
            Error::SheetNotFound(_) => "Sheet not found",
            Error::InvalidSheetName(_) | Error::DuplicateSheetName(_) => "Invalid sheet name",
            Error::Sink(_) => "Document sink failure",
        }
    }
}
