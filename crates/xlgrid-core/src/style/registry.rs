//! Style registry for deduplication

use ahash::AHashMap;
use log::{debug, trace, warn};

use super::{Style, StyleSettings};
use crate::error::{Error, Result};

/// Index of the implicit default (empty) style
pub const DEFAULT_STYLE_INDEX: u32 = 0;

#[derive(Debug, Clone)]
struct Entry {
    style: Style,
    reference_count: u32,
}

/// Style registry for deduplicating styles
///
/// Documents typically have many cells sharing the same style. The registry
/// stores each distinct style once and hands out dense indices in first-seen
/// order; cells reference styles by index. Index 0 is always the empty
/// default style, and empty styles map to it without creating an entry.
///
/// The registry is append-only: an index stays valid and keeps naming the
/// same style for the registry's lifetime. Dropping unused styles is done by
/// building a new registry.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    /// Entry 0 is the default style
    entries: Vec<Entry>,
    /// Fast lookup for deduplication
    index_map: AHashMap<Style, u32>,
    settings: StyleSettings,
}

impl StyleRegistry {
    /// Create a registry with default settings
    pub fn new() -> Self {
        Self::with_settings(StyleSettings::default())
    }

    /// Create a registry validating styles against `settings`
    pub fn with_settings(settings: StyleSettings) -> Self {
        let mut entries = Vec::with_capacity(64);
        entries.push(Entry {
            style: Style::default(),
            reference_count: 0,
        });

        Self {
            entries,
            index_map: AHashMap::with_capacity(64),
            settings,
        }
    }

    /// Register a style, returning its index
    ///
    /// If an equal style is already registered its reference count is
    /// incremented and its index returned. Otherwise the style is checked
    /// against the target schema and appended at the next index.
    ///
    /// # Examples
    /// ```
    /// use xlgrid_core::{Style, StyleRegistry};
    ///
    /// let mut registry = StyleRegistry::new();
    /// let a = registry.register(&Style::new().bold(true)).unwrap();
    /// let b = registry.register(&Style::new().bold(true)).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.register(&Style::new()).unwrap(), 0);
    /// ```
    pub fn register(&mut self, style: &Style) -> Result<u32> {
        if style.is_empty() {
            self.entries[0].reference_count += 1;
            return Ok(DEFAULT_STYLE_INDEX);
        }

        if let Some(&index) = self.index_map.get(style) {
            self.entries[index as usize].reference_count += 1;
            trace!("style already registered at index {index}");
            return Ok(index);
        }

        if let Some(reason) = self.settings.unsupported_reason(style) {
            return Err(self.mark_unsupported(reason));
        }

        if let Some(max) = self.settings.max_styles {
            if self.entries.len() >= max as usize {
                return Err(self.mark_unsupported(format!("more than {max} distinct styles")));
            }
        }

        let index = u32::try_from(self.entries.len())
            .map_err(|_| self.mark_unsupported("style table index overflow"))?;
        self.entries.push(Entry {
            style: style.clone(),
            reference_count: 1,
        });
        self.index_map.insert(style.clone(), index);
        debug!("registered new style at index {index}");

        Ok(index)
    }

    /// Get the style at an index
    ///
    /// Fails with a missing-reference style error if the index was never
    /// assigned by this registry.
    pub fn resolve(&self, index: u32) -> Result<&Style> {
        self.entries
            .get(index as usize)
            .map(|e| &e.style)
            .ok_or_else(|| Error::missing_reference(index, self.entries.len()))
    }

    /// Build the error for a facet value the target schema cannot represent
    pub fn mark_unsupported<S: Into<String>>(&self, description: S) -> Error {
        let description = description.into();
        warn!("style feature not supported by target schema: {description}");
        Error::not_supported(description)
    }

    /// Iterate over `(index, style)` in assignment order, starting with the
    /// default style at index 0
    ///
    /// This is the order the style table must be emitted in.
    pub fn components(&self) -> Components<'_> {
        Components {
            inner: self.entries.iter().enumerate(),
        }
    }

    /// Number of times `index` has been handed out by [`register`](Self::register)
    pub fn reference_count(&self, index: u32) -> Option<u32> {
        self.entries.get(index as usize).map(|e| e.reference_count)
    }

    /// Number of registered styles, the implicit default excluded
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Check if only the default style is present
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    /// Number of rows the emitted style table has, the default included
    pub fn table_len(&self) -> usize {
        self.entries.len()
    }

    /// Settings this registry validates against
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// Register a document's positional style table, as read on load
    ///
    /// Duplicate rows in the table collapse onto one registry entry; the
    /// returned [`LoadedStyleTable`] maps the document's own indices onto the
    /// registry's.
    pub fn from_table<I>(table: I, settings: StyleSettings) -> Result<LoadedStyleTable>
    where
        I: IntoIterator<Item = Style>,
    {
        let mut registry = Self::with_settings(settings);
        let remap = table
            .into_iter()
            .map(|style| registry.register(&style))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "loaded style table: {} rows, {} distinct styles",
            remap.len(),
            registry.len()
        );

        Ok(LoadedStyleTable { registry, remap })
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a registry's `(index, style)` pairs in assignment order
///
/// Cloning the iterator (or calling [`StyleRegistry::components`] again)
/// restarts the sequence.
#[derive(Debug, Clone)]
pub struct Components<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Entry>>,
}

impl<'a> Iterator for Components<'a> {
    type Item = (u32, &'a Style);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, e)| (i as u32, &e.style))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Components<'_> {}

/// A document's style table registered for re-attaching serialized indices
#[derive(Debug, Clone)]
pub struct LoadedStyleTable {
    registry: StyleRegistry,
    /// Document index -> registry index
    remap: Vec<u32>,
}

impl LoadedStyleTable {
    /// Registry index for an index as serialized in the document
    ///
    /// A document without a style table still has the implicit default at 0.
    pub fn registry_index(&self, serialized: u32) -> Result<u32> {
        if serialized == DEFAULT_STYLE_INDEX && self.remap.is_empty() {
            return Ok(DEFAULT_STYLE_INDEX);
        }
        self.remap
            .get(serialized as usize)
            .copied()
            .ok_or_else(|| Error::missing_reference(serialized, self.remap.len()))
    }

    /// Style for an index as serialized in the document
    pub fn resolve(&self, serialized: u32) -> Result<&Style> {
        self.registry.resolve(self.registry_index(serialized)?)
    }

    /// Number of rows in the document's table
    pub fn len(&self) -> usize {
        self.remap.len()
    }

    /// Check if the document's table had no rows
    pub fn is_empty(&self) -> bool {
        self.remap.is_empty()
    }

    /// The deduplicated registry
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, StyleErrorKind};
    use crate::style::{Color, FillStyle, FontStyle, GradientStop, NumberFormat, StyleFacet};

    #[test]
    fn test_default_style() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.table_len(), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(0).unwrap(), &Style::default());
    }

    #[test]
    fn test_empty_styles_map_to_default() {
        let mut registry = StyleRegistry::new();
        assert_eq!(registry.register(&Style::new()).unwrap(), DEFAULT_STYLE_INDEX);
        assert_eq!(registry.register(&Style::default()).unwrap(), DEFAULT_STYLE_INDEX);
        assert!(registry.is_empty());
        assert_eq!(registry.reference_count(0), Some(2));
    }

    #[test]
    fn test_deduplication() {
        let mut registry = StyleRegistry::new();

        let style1 = Style::new().bold(true);
        let style2 = Style::new().with_facet(StyleFacet::Font(FontStyle::new().with_bold(true)));
        let style3 = Style::new().italic(true);

        let idx1 = registry.register(&style1).unwrap();
        let idx2 = registry.register(&style2).unwrap();
        let idx3 = registry.register(&style3).unwrap();

        assert_eq!(idx1, 1);
        assert_eq!(idx1, idx2);
        assert_eq!(idx3, 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.reference_count(idx1), Some(2));
        assert_eq!(registry.reference_count(idx3), Some(1));
    }

    #[test]
    fn test_builtin_code_spellings_share_index() {
        let mut registry = StyleRegistry::new();
        let by_code = registry.register(&Style::new().number_format("0%")).unwrap();
        let by_id = registry
            .register(&Style::new().with_facet(StyleFacet::NumberFormat(NumberFormat::percent())))
            .unwrap();

        assert_eq!(by_code, by_id);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.reference_count(by_code), Some(2));
    }

    #[test]
    fn test_resolve_missing_reference() {
        let mut registry = StyleRegistry::new();
        registry.register(&Style::new().bold(true)).unwrap();

        assert!(registry.resolve(1).is_ok());
        let err = registry.resolve(2).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Style(StyleErrorKind::MissingReference)
        );
        assert_eq!(registry.reference_count(2), None);
    }

    #[test]
    fn test_components_in_assignment_order() {
        let mut registry = StyleRegistry::new();
        let styles = [
            Style::new().fill_color(Color::RED),
            Style::new().bold(true),
            Style::new().fill_color(Color::RED),
            Style::new().number_format("0.000"),
        ];
        for style in &styles {
            registry.register(style).unwrap();
        }

        let components = registry.components();
        assert_eq!(components.len(), 4);

        let indices: Vec<u32> = components.clone().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        // Restartable
        let again: Vec<u32> = components.map(|(i, _)| i).collect();
        assert_eq!(again, indices);

        let emitted: Vec<&Style> = registry.components().map(|(_, s)| s).collect();
        assert_eq!(emitted[1], &styles[0]);
        assert_eq!(emitted[2], &styles[1]);
        assert_eq!(emitted[3], &styles[3]);
    }

    #[test]
    fn test_unsupported_feature() {
        let mut registry =
            StyleRegistry::with_settings(StyleSettings::new().with_gradient_fills(false));
        let style = Style::new().with_facet(StyleFacet::Fill(FillStyle::linear_gradient(
            0.0,
            vec![
                GradientStop::new(0.0, Color::WHITE),
                GradientStop::new(1.0, Color::BLACK),
            ],
        )));

        let err = registry.register(&style).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Style(StyleErrorKind::NotSupported));
        assert!(registry.is_empty());

        // Dropping the facet explicitly is the caller's decision
        let approximated = style.without_facet(crate::style::FacetKind::Fill).bold(true);
        assert_eq!(registry.register(&approximated).unwrap(), 1);
    }

    #[test]
    fn test_max_styles() {
        let mut registry =
            StyleRegistry::with_settings(StyleSettings::new().with_max_styles(Some(3)));
        registry.register(&Style::new().bold(true)).unwrap();
        registry.register(&Style::new().italic(true)).unwrap();

        let err = registry
            .register(&Style::new().fill_color(Color::RED))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Style(StyleErrorKind::NotSupported));

        // Existing styles still resolve to their index
        assert_eq!(registry.register(&Style::new().bold(true)).unwrap(), 1);
    }

    #[test]
    fn test_from_table_collapses_duplicates() {
        let table = vec![
            Style::new(),
            Style::new().bold(true),
            Style::new().fill_color(Color::RED),
            Style::new().bold(true),
        ];
        let loaded = StyleRegistry::from_table(table, StyleSettings::default()).unwrap();

        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.registry().len(), 2);
        assert_eq!(loaded.registry_index(0).unwrap(), 0);
        assert_eq!(loaded.registry_index(3).unwrap(), 1);
        assert_eq!(loaded.resolve(2).unwrap(), &Style::new().fill_color(Color::RED));

        let err = loaded.resolve(4).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Style(StyleErrorKind::MissingReference)
        );
    }

    #[test]
    fn test_empty_table_keeps_default() {
        let loaded = StyleRegistry::from_table(Vec::new(), StyleSettings::default()).unwrap();

        assert!(loaded.is_empty());
        assert_eq!(loaded.registry_index(0).unwrap(), DEFAULT_STYLE_INDEX);
        assert_eq!(loaded.resolve(0).unwrap(), &Style::default());
        assert!(loaded.registry_index(1).is_err());
    }
}
