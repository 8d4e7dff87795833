//! Loading decoded document content into a [`Workbook`]
//!
//! The XML layer decodes the style part into positional [`Style`] records
//! and hands over cell references, ranges and style indices exactly as they
//! appear in the document. [`Workbook::load`] resolves all of it: addresses
//! and ranges are parsed, the style table is deduplicated, and every
//! serialized style index is re-attached to a registry index.

use log::debug;

use crate::cell::{CellAddress, CellData, CellValue};
use crate::error::Result;
use crate::style::{Style, StyleRegistry, StyleSettings};
use crate::workbook::Workbook;
use crate::worksheet::Worksheet;

/// A workbook as decoded by the XML layer
#[derive(Debug, Clone, Default)]
pub struct WorkbookSource {
    /// The positional cell format table; cells index into it
    pub styles: Vec<Style>,
    /// Sheets in document order
    pub sheets: Vec<SheetSource>,
}

impl WorkbookSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the style table
    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    /// Append a sheet
    pub fn with_sheet(mut self, sheet: SheetSource) -> Self {
        self.sheets.push(sheet);
        self
    }
}

/// One sheet as decoded by the XML layer
#[derive(Debug, Clone, Default)]
pub struct SheetSource {
    pub name: String,
    pub cells: Vec<CellSource>,
    /// Merged range text, e.g. `"A1:B2"`
    pub merged_ranges: Vec<String>,
    /// Protected ranges as `(name, range text)`
    pub protected_ranges: Vec<(String, String)>,
}

impl SheetSource {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_cell<R, V>(mut self, reference: R, value: V, style_index: u32) -> Self
    where
        R: Into<String>,
        V: Into<CellValue>,
    {
        self.cells.push(CellSource {
            reference: reference.into(),
            value: value.into(),
            style_index,
        });
        self
    }

    pub fn with_merged_range<S: Into<String>>(mut self, range: S) -> Self {
        self.merged_ranges.push(range.into());
        self
    }

    pub fn with_protected_range<N: Into<String>, R: Into<String>>(
        mut self,
        name: N,
        range: R,
    ) -> Self {
        self.protected_ranges.push((name.into(), range.into()));
        self
    }
}

/// One cell as decoded by the XML layer
#[derive(Debug, Clone, PartialEq)]
pub struct CellSource {
    /// Cell reference text, e.g. `"C7"`
    pub reference: String,
    pub value: CellValue,
    /// Index into [`WorkbookSource::styles`]
    pub style_index: u32,
}

impl Workbook {
    /// Build a workbook from decoded document content
    ///
    /// Fails on the first malformed or out-of-range reference, on a style
    /// index past the end of the style table (a missing-reference style
    /// error), on a style the target schema cannot represent, on an invalid
    /// or duplicate sheet name, and on overlapping merged or protected
    /// ranges.
    pub fn load(source: WorkbookSource, settings: StyleSettings) -> Result<Workbook> {
        let table = StyleRegistry::from_table(source.styles, settings)?;
        let mut workbook = Workbook::with_style_settings(settings);

        for sheet in source.sheets {
            let mut worksheet = Worksheet::with_registry(sheet.name, table.registry().clone());

            for cell in sheet.cells {
                let addr = CellAddress::parse(&cell.reference)?;
                let style_index = table.registry_index(cell.style_index)?;
                worksheet.restore_cell(&addr, CellData::with_style(cell.value, style_index));
            }
            for range in &sheet.merged_ranges {
                worksheet.merge_cells(range)?;
            }
            for (name, range) in sheet.protected_ranges {
                worksheet.protect_range(name, &range)?;
            }

            debug!(
                "loaded sheet '{}': {} cells, {} merged regions",
                worksheet.name(),
                worksheet.cell_count(),
                worksheet.merged_regions().len()
            );
            workbook.add_existing_worksheet(worksheet)?;
        }

        debug!(
            "loaded workbook: {} sheets, {} distinct styles",
            workbook.sheet_count(),
            table.registry().len()
        );
        Ok(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind, StyleErrorKind};
    use crate::style::Color;

    fn source() -> WorkbookSource {
        WorkbookSource::new()
            .with_style(Style::new())
            .with_style(Style::new().bold(true))
            .with_style(Style::new().fill_color(Color::RED))
            .with_style(Style::new().bold(true))
            .with_sheet(
                SheetSource::new("Data")
                    .with_cell("A1", "Name", 1)
                    .with_cell("B1", 3.5, 3)
                    .with_cell("C2", true, 2)
                    .with_cell("D4", CellValue::Empty, 0)
                    .with_merged_range("A5:B6")
                    .with_protected_range("Inputs", "$C$1:$C$10"),
            )
    }

    #[test]
    fn test_load_reattaches_styles() {
        let wb = Workbook::load(source(), StyleSettings::default()).unwrap();
        let ws = wb.worksheet_by_name("Data").unwrap();

        // Duplicate table rows 1 and 3 collapse onto one index
        assert_eq!(ws.cell_style_index("A1").unwrap(), 1);
        assert_eq!(ws.cell_style_index("B1").unwrap(), 1);
        assert_eq!(ws.cell_style("C2").unwrap(), &Style::new().fill_color(Color::RED));
        assert_eq!(ws.styles().len(), 2);

        // Empty, unstyled cells are not stored
        assert_eq!(ws.cell_count(), 3);

        assert_eq!(ws.merged_regions()[0].to_a1_string(), "A5:B6");
        assert!(ws.is_protected("C7").unwrap());
    }

    #[test]
    fn test_load_dangling_style_index() {
        let source = WorkbookSource::new()
            .with_style(Style::new())
            .with_sheet(SheetSource::new("Data").with_cell("A1", 1.0, 5));

        let err = Workbook::load(source, StyleSettings::default()).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Style(StyleErrorKind::MissingReference)
        );
    }

    #[test]
    fn test_load_without_style_table() {
        let source = WorkbookSource::new().with_sheet(
            SheetSource::new("Data")
                .with_cell("A1", 1.0, 0)
                .with_cell("B2", "plain", 0),
        );

        let wb = Workbook::load(source, StyleSettings::default()).unwrap();
        let ws = wb.worksheet_by_name("Data").unwrap();
        assert_eq!(ws.cell_style_index("A1").unwrap(), 0);
        assert_eq!(ws.cell_style("B2").unwrap(), &Style::default());
        assert_eq!(ws.get_value("A1").unwrap(), CellValue::Number(1.0));
    }

    #[test]
    fn test_load_rejects_bad_references() {
        let bad_cell = WorkbookSource::new()
            .with_sheet(SheetSource::new("Data").with_cell("A1048577", 1.0, 0));
        assert_eq!(
            Workbook::load(bad_cell, StyleSettings::default())
                .unwrap_err()
                .kind(),
            ErrorKind::Range
        );

        let bad_range = WorkbookSource::new()
            .with_sheet(SheetSource::new("Data").with_merged_range("A1:B2:C3"));
        assert_eq!(
            Workbook::load(bad_range, StyleSettings::default())
                .unwrap_err()
                .kind(),
            ErrorKind::Format
        );

        let overlapping = WorkbookSource::new().with_sheet(
            SheetSource::new("Data")
                .with_merged_range("A1:B2")
                .with_merged_range("B2:C3"),
        );
        assert_eq!(
            Workbook::load(overlapping, StyleSettings::default())
                .unwrap_err()
                .kind(),
            ErrorKind::Worksheet
        );
    }

    #[test]
    fn test_load_duplicate_sheet_names() {
        let source = WorkbookSource::new()
            .with_sheet(SheetSource::new("Data"))
            .with_sheet(SheetSource::new("data"));
        assert_eq!(
            Workbook::load(source, StyleSettings::default()).unwrap_err(),
            Error::DuplicateSheetName("data".into())
        );
    }

    #[test]
    fn test_load_checks_style_settings() {
        let source = WorkbookSource::new()
            .with_style(Style::new())
            .with_style(Style::new().bold(true))
            .with_style(Style::new().italic(true));
        let settings = StyleSettings::new().with_max_styles(Some(2));

        let err = Workbook::load(source, settings).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Style(StyleErrorKind::NotSupported));
    }
}
