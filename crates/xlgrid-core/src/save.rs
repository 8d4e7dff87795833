//! Saving a [`Workbook`] through an external document writer

use ahash::AHashMap;
use log::debug;

use crate::cell::CellValue;
use crate::error::Result;
use crate::style::{StyleRegistry, StyleSheet, DEFAULT_STYLE_INDEX};
use crate::workbook::Workbook;

/// Receiver for resolved document content, implemented by the XML writer
///
/// Calls arrive in document order: the style sheet first, then for each
/// sheet a `begin_sheet`, its cells in row-major order, its merged ranges,
/// its protected ranges and an `end_sheet`. Any error returned aborts the
/// save and is passed through to the caller unchanged.
pub trait DocumentSink {
    /// Receive the style part's component tables
    fn write_style_sheet(&mut self, styles: &StyleSheet) -> Result<()>;

    /// Start a sheet
    fn begin_sheet(&mut self, name: &str) -> Result<()>;

    /// Receive one cell; `style_index` indexes [`StyleSheet::cell_xfs`]
    fn write_cell(&mut self, reference: &str, value: &CellValue, style_index: u32) -> Result<()>;

    /// Receive one merged range in canonical `A1:B2` form
    fn write_merged_range(&mut self, range: &str) -> Result<()>;

    /// Receive one protected range
    fn write_protected_range(&mut self, name: &str, range: &str) -> Result<()>;

    /// Finish the current sheet
    fn end_sheet(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Counts of what a save emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveSummary {
    pub sheets: usize,
    pub cells: usize,
    /// Rows in the emitted cell format table, the default included
    pub styles: usize,
    pub merged_ranges: usize,
    pub protected_ranges: usize,
}

impl Workbook {
    /// Emit the workbook to `sink`
    ///
    /// Styles are collected into a fresh registry from the cells that are
    /// still present, so styles no live cell uses are dropped and the
    /// emitted table is dense.
    pub fn save<S: DocumentSink + ?Sized>(&self, sink: &mut S) -> Result<SaveSummary> {
        let mut registry = StyleRegistry::with_settings(*self.style_settings());
        let mut sheet_maps: Vec<AHashMap<u32, u32>> = Vec::with_capacity(self.sheet_count());

        for sheet in self.worksheets() {
            let mut map = AHashMap::new();
            map.insert(DEFAULT_STYLE_INDEX, DEFAULT_STYLE_INDEX);

            for (_, cell) in sheet.iter_cells() {
                let local = cell.style_index;
                if map.contains_key(&local) {
                    continue;
                }
                let style = sheet.style_by_index(local)?;
                map.insert(local, registry.register(style)?);
            }
            sheet_maps.push(map);
        }

        let style_sheet = StyleSheet::build(&registry);
        sink.write_style_sheet(&style_sheet)?;

        let mut summary = SaveSummary {
            styles: style_sheet.cell_xfs.len(),
            ..Default::default()
        };

        for (sheet, map) in self.worksheets().zip(&sheet_maps) {
            sink.begin_sheet(sheet.name())?;

            for (addr, cell) in sheet.iter_cells() {
                let style_index = map
                    .get(&cell.style_index)
                    .copied()
                    .unwrap_or(DEFAULT_STYLE_INDEX);
                sink.write_cell(&addr.to_a1_string(), &cell.value, style_index)?;
                summary.cells += 1;
            }
            for range in sheet.merged_regions() {
                sink.write_merged_range(&range.to_a1_string())?;
                summary.merged_ranges += 1;
            }
            for protected in sheet.protected_ranges() {
                sink.write_protected_range(protected.name(), &protected.range().to_a1_string())?;
                summary.protected_ranges += 1;
            }

            sink.end_sheet()?;
            summary.sheets += 1;
        }

        debug!(
            "saved workbook: {} sheets, {} cells, {} styles",
            summary.sheets, summary.cells, summary.styles
        );
        Ok(summary)
    }
}
