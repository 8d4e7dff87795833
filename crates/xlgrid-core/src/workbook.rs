//! Workbook type - the document session

use crate::error::{Error, Result};
use crate::style::StyleSettings;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook owns its worksheets and the style settings every worksheet
/// registry is created with. It is the unit that is loaded from and saved to
/// a document; see [`Workbook::load`] and [`Workbook::save`].
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Target schema settings for style registration
    style_settings: StyleSettings,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        let mut wb = Self::empty();
        wb.worksheets
            .push(Worksheet::with_style_settings("Sheet1", wb.style_settings));
        wb
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self::with_style_settings(StyleSettings::default())
    }

    /// Create an empty workbook validating styles against `settings`
    pub fn with_style_settings(settings: StyleSettings) -> Self {
        Self {
            worksheets: Vec::new(),
            style_settings: settings,
        }
    }

    /// Settings new worksheets validate styles against
    pub fn style_settings(&self) -> &StyleSettings {
        &self.style_settings
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Result<&Worksheet> {
        self.worksheets
            .iter()
            .find(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.worksheets
            .iter_mut()
            .find(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with default name
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name, None)?;
        let index = self.worksheets.len();
        self.worksheets
            .push(Worksheet::with_style_settings(name, self.style_settings));
        Ok(index)
    }

    /// Add an existing worksheet to the workbook
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.validate_sheet_name(worksheet.name(), None)?;
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }

    /// Remove a worksheet by name
    pub fn remove_worksheet(&mut self, name: &str) -> Result<Worksheet> {
        let index = self
            .sheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        Ok(self.worksheets.remove(index))
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, name: &str, new_name: &str) -> Result<()> {
        let index = self
            .sheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        self.validate_sheet_name(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    /// Validate a sheet name, optionally excluding a sheet from the duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {MAX_SHEET_NAME_LEN} characters)"
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{c}'"
            )));
        }
        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(Error::InvalidSheetName(
                "Sheet name cannot begin or end with an apostrophe".into(),
            ));
        }

        // Case-insensitive
        let name_lower = name.to_lowercase();
        let duplicate = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != exclude_index && ws.name().to_lowercase() == name_lower);
        if duplicate {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("Sheet{n}");
            if self.sheet_index(&name).is_none() && self.validate_sheet_name(&name, None).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::style::Style;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
        assert!(Workbook::empty().is_empty());
    }

    #[test]
    fn test_add_worksheets() {
        let mut wb = Workbook::new();

        let idx = wb.add_worksheet().unwrap();
        assert_eq!(idx, 1);
        assert_eq!(wb.worksheet(1).unwrap().name(), "Sheet2");

        let idx = wb.add_worksheet_with_name("Data").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(wb.sheet_index("Data"), Some(2));
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();

        // Case-insensitive duplicate check
        assert_eq!(
            wb.add_worksheet_with_name("SHEET1").unwrap_err(),
            Error::DuplicateSheetName("SHEET1".into())
        );
        assert!(wb.add_worksheet_with_name("sheet1").is_err());
        assert!(wb
            .add_existing_worksheet(Worksheet::new("Sheet1"))
            .is_err());
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();

        assert!(wb.add_worksheet_with_name("").is_err());
        assert!(wb.add_worksheet_with_name("Sheet/1").is_err());
        assert!(wb.add_worksheet_with_name("Sheet:1").is_err());
        assert!(wb.add_worksheet_with_name("Sheet[1]").is_err());
        assert!(wb.add_worksheet_with_name("'Quoted").is_err());

        let long_name = "A".repeat(MAX_SHEET_NAME_LEN + 1);
        let err = wb.add_worksheet_with_name(&long_name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Workbook);

        // Length is counted in characters
        let max_name = "é".repeat(MAX_SHEET_NAME_LEN);
        assert!(wb.add_worksheet_with_name(&max_name).is_ok());
    }

    #[test]
    fn test_rename_and_remove() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Data").unwrap();

        wb.rename_worksheet("Data", "Inputs").unwrap();
        // Renaming to its own name in another case is allowed
        wb.rename_worksheet("Inputs", "INPUTS").unwrap();
        assert!(wb.rename_worksheet("INPUTS", "sheet1").is_err());
        assert_eq!(
            wb.rename_worksheet("Missing", "X").unwrap_err(),
            Error::SheetNotFound("Missing".into())
        );

        let removed = wb.remove_worksheet("INPUTS").unwrap();
        assert_eq!(removed.name(), "INPUTS");
        assert_eq!(wb.sheet_count(), 1);
        assert!(wb.worksheet_by_name("INPUTS").is_err());
    }

    #[test]
    fn test_sheets_use_workbook_settings() {
        let settings = StyleSettings::new().with_max_styles(Some(2));
        let mut wb = Workbook::with_style_settings(settings);
        wb.add_worksheet_with_name("Data").unwrap();

        let ws = wb.worksheet_by_name_mut("Data").unwrap();
        ws.set_cell_style("A1", &Style::new().bold(true)).unwrap();
        let err = ws
            .set_cell_style("A2", &Style::new().italic(true))
            .unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Style(crate::error::StyleErrorKind::NotSupported)
        );
    }
}
