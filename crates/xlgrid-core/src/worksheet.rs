//! Worksheet type

use log::warn;

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{ConflictKind, Error, Result};
use crate::style::{Style, StyleRegistry, StyleSettings, DEFAULT_STYLE_INDEX};
use crate::MAX_ROWS;

/// Largest range [`Worksheet::set_range_style`] accepts, one full column
pub const MAX_STYLED_RANGE_CELLS: u64 = MAX_ROWS as u64;

/// A named range of cells that is protected from editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRange {
    name: String,
    range: CellRange,
}

impl ProtectedRange {
    /// Name the range is declared under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Protected cells
    pub fn range(&self) -> &CellRange {
        &self.range
    }
}

/// A worksheet (single sheet in a workbook)
///
/// Cells reference their style by index into the worksheet's own
/// [`StyleRegistry`]. The registry lives as long as the worksheet, so every
/// index a cell holds stays resolvable.
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Styles referenced by cells
    styles: StyleRegistry,
    /// Merged regions, pairwise disjoint
    merged_regions: Vec<CellRange>,
    /// Protected ranges, pairwise disjoint
    protected_ranges: Vec<ProtectedRange>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_style_settings(name, StyleSettings::default())
    }

    /// Create a new worksheet whose styles are validated against `settings`
    pub fn with_style_settings<S: Into<String>>(name: S, settings: StyleSettings) -> Self {
        Self::with_registry(name, StyleRegistry::with_settings(settings))
    }

    pub(crate) fn with_registry<S: Into<String>>(name: S, styles: StyleRegistry) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            styles,
            merged_regions: Vec::new(),
            protected_ranges: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(&addr))
    }

    /// Get a cell by parsed address
    pub fn cell_at(&self, addr: &CellAddress) -> Option<&CellData> {
        self.cells.get(addr.row(), addr.col())
    }

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        Ok(self
            .cell(address)?
            .map(|c| c.value.clone())
            .unwrap_or_default())
    }

    /// Get a cell's style index by address string.
    ///
    /// Returns 0 if the cell does not exist or has the default style.
    pub fn cell_style_index(&self, address: &str) -> Result<u32> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_style_index_at(&addr))
    }

    /// Get a cell's style index by parsed address
    pub fn cell_style_index_at(&self, addr: &CellAddress) -> u32 {
        self.cell_at(addr)
            .map(|c| c.style_index)
            .unwrap_or(DEFAULT_STYLE_INDEX)
    }

    /// Get the style applied to a cell; unstyled cells have the empty style
    pub fn cell_style(&self, address: &str) -> Result<&Style> {
        let addr = CellAddress::parse(address)?;
        self.styles.resolve(self.cell_style_index_at(&addr))
    }

    /// Get a style by its index in this worksheet's registry
    pub fn style_by_index(&self, style_index: u32) -> Result<&Style> {
        self.styles.resolve(style_index)
    }

    /// This worksheet's style registry
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(&addr, value);
        Ok(())
    }

    /// Set a cell value by parsed address
    pub fn set_cell_value_at<V: Into<CellValue>>(&mut self, addr: &CellAddress, value: V) {
        self.cells.set_value(addr.row(), addr.col(), value.into());
    }

    /// Set a cell style by address string, returning the style's index
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<u32> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(&addr, style)
    }

    /// Set a cell style by parsed address, returning the style's index
    pub fn set_cell_style_at(&mut self, addr: &CellAddress, style: &Style) -> Result<u32> {
        let style_index = self.styles.register(style)?;
        self.cells.set_style(addr.row(), addr.col(), style_index);
        Ok(style_index)
    }

    /// Apply one style to every cell of a range, returning the style's index
    ///
    /// Every cell of the range is stored, so ranges larger than
    /// [`MAX_STYLED_RANGE_CELLS`] are rejected. The style is registered once;
    /// on failure no cell is touched.
    pub fn set_range_style(&mut self, range: &str, style: &Style) -> Result<u32> {
        let range = CellRange::parse(range)?;
        if range.cell_count() > MAX_STYLED_RANGE_CELLS {
            return Err(Error::RangeTooLarge {
                range,
                cells: range.cell_count(),
                max: MAX_STYLED_RANGE_CELLS,
            });
        }
        let style_index = self.styles.register(style)?;
        for addr in range.cells() {
            self.cells.set_style(addr.row(), addr.col(), style_index);
        }
        Ok(style_index)
    }

    /// Clear a cell, returning what it held
    pub fn clear_cell(&mut self, address: &str) -> Result<Option<CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.remove(addr.row(), addr.col()))
    }

    /// Clear all cells in a range
    pub fn clear_range(&mut self, range: &CellRange) {
        let stored: Vec<CellAddress> = self
            .cells
            .iter()
            .map(|(addr, _)| addr)
            .filter(|addr| range.contains(addr))
            .collect();
        for addr in stored {
            self.cells.remove(addr.row(), addr.col());
        }
    }

    /// Store a cell with an index already assigned by this worksheet's registry
    pub(crate) fn restore_cell(&mut self, addr: &CellAddress, data: CellData) {
        self.cells.set(addr.row(), addr.col(), data);
    }

    // === Range Operations ===

    /// Get the used range (bounds of all non-empty cells)
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::new(
                    CellAddress::from_parts(min_row, min_col, false, false),
                    CellAddress::from_parts(max_row, max_col, false, false),
                )
            })
    }

    // === Merged Cells ===

    /// Get merged regions in declaration order
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge the cells of a range given as text (e.g., "A1:C3")
    pub fn merge_cells(&mut self, range: &str) -> Result<()> {
        let range = CellRange::parse(range)?;
        self.merge_range(range)
    }

    /// Merge the cells of a parsed range
    ///
    /// Fails with a worksheet conflict naming both ranges if the range
    /// overlaps an existing merged region.
    pub fn merge_range(&mut self, range: CellRange) -> Result<()> {
        if let Some(existing) = self.merged_regions.iter().find(|r| r.intersects(&range)) {
            return Err(conflict(ConflictKind::MergedCells, *existing, range));
        }
        self.merged_regions.push(range);
        Ok(())
    }

    /// Unmerge a previously merged region, returning whether it existed
    ///
    /// Regions are matched by the cells they cover; anchors are ignored.
    pub fn unmerge_cells(&mut self, range: &str) -> Result<bool> {
        let range = CellRange::parse(range)?;
        let found = self.merged_regions.iter().position(|r| {
            r.start().same_cell(&range.start()) && r.end().same_cell(&range.end())
        });
        match found {
            Some(i) => {
                self.merged_regions.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The merged region containing an address, if any
    pub fn merged_region_at(&self, addr: &CellAddress) -> Option<&CellRange> {
        self.merged_regions.iter().find(|r| r.contains(addr))
    }

    // === Protected Ranges ===

    /// Declare a protected range
    ///
    /// Fails with a worksheet conflict naming both ranges if the range
    /// overlaps an existing protected range.
    pub fn protect_range<S: Into<String>>(&mut self, name: S, range: &str) -> Result<()> {
        let range = CellRange::parse(range)?;
        if let Some(existing) = self
            .protected_ranges
            .iter()
            .find(|p| p.range.intersects(&range))
        {
            return Err(conflict(ConflictKind::ProtectedRange, existing.range, range));
        }
        self.protected_ranges.push(ProtectedRange {
            name: name.into(),
            range,
        });
        Ok(())
    }

    /// Remove a protected range by name, returning it
    pub fn unprotect_range(&mut self, name: &str) -> Option<ProtectedRange> {
        let i = self.protected_ranges.iter().position(|p| p.name == name)?;
        Some(self.protected_ranges.remove(i))
    }

    /// Protected ranges in declaration order
    pub fn protected_ranges(&self) -> &[ProtectedRange] {
        &self.protected_ranges
    }

    /// Check whether a cell lies in any protected range
    pub fn is_protected(&self, address: &str) -> Result<bool> {
        let addr = CellAddress::parse(address)?;
        Ok(self.protected_ranges.iter().any(|p| p.range.contains(&addr)))
    }

    // === Iteration ===

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all non-empty cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &CellData)> {
        self.cells.iter()
    }
}

fn conflict(kind: ConflictKind, existing: CellRange, requested: CellRange) -> Error {
    warn!("rejected {kind} {requested}: overlaps {existing}");
    Error::WorksheetConflict {
        kind,
        existing,
        requested,
    }
}
