//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete cell style, one optional slot per facet
//! - [`StyleFacet`] - A single facet value used to update a style slot
//! - [`NumberFormat`], [`FontStyle`], [`FillStyle`], [`BorderStyle`],
//!   [`Alignment`] and [`Protection`] - The facet records
//! - [`StyleRegistry`] - Document-wide style deduplication
//! - [`StyleSheet`] - The indexed component tables the style part stores

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod registry;
mod settings;
mod sheet;

pub use alignment::{
    Alignment, HorizontalAlignment, ReadingOrder, VerticalAlignment, MAX_INDENT,
    VERTICAL_TEXT_ROTATION,
};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle, DiagonalDirection};
pub use color::{Color, MAX_INDEXED_COLOR, MAX_THEME_INDEX};
pub use fill::{FillStyle, GradientStop, GradientType, PatternType};
pub use font::{FontStyle, FontVerticalAlign, Underline, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use number_format::{NumberFormat, FIRST_CUSTOM_FORMAT_ID};
pub use registry::{Components, LoadedStyleTable, StyleRegistry, DEFAULT_STYLE_INDEX};
pub use settings::StyleSettings;
pub use sheet::{StyleSheet, XfRecord};

/// Which slot of a [`Style`] a facet occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    NumberFormat,
    Font,
    Fill,
    Border,
    Alignment,
    Protection,
}

impl FacetKind {
    /// All slots, in the fixed order styles are compared and iterated in
    pub const ALL: [FacetKind; 6] = [
        FacetKind::NumberFormat,
        FacetKind::Font,
        FacetKind::Fill,
        FacetKind::Border,
        FacetKind::Alignment,
        FacetKind::Protection,
    ];
}

/// A single formatting facet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleFacet {
    NumberFormat(NumberFormat),
    Font(FontStyle),
    Fill(FillStyle),
    Border(BorderStyle),
    Alignment(Alignment),
    Protection(Protection),
}

impl StyleFacet {
    /// The slot this facet occupies
    pub fn kind(&self) -> FacetKind {
        match self {
            StyleFacet::NumberFormat(_) => FacetKind::NumberFormat,
            StyleFacet::Font(_) => FacetKind::Font,
            StyleFacet::Fill(_) => FacetKind::Fill,
            StyleFacet::Border(_) => FacetKind::Border,
            StyleFacet::Alignment(_) => FacetKind::Alignment,
            StyleFacet::Protection(_) => FacetKind::Protection,
        }
    }
}

/// Complete cell style
///
/// A style is a fixed set of optional slots, one per facet. Two styles are
/// equal (and hash the same) exactly when every slot matches, however they
/// were built. Styles are deduplicated document-wide via [`StyleRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Number format
    pub number_format: Option<NumberFormat>,
    /// Font settings
    pub font: Option<FontStyle>,
    /// Fill/background settings
    pub fill: Option<FillStyle>,
    /// Border settings
    pub border: Option<BorderStyle>,
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Cell protection
    pub protection: Option<Protection>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no facet is set and protection is unset
    pub fn is_empty(&self) -> bool {
        self.number_format.is_none()
            && self.font.is_none()
            && self.fill.is_none()
            && self.border.is_none()
            && self.alignment.is_none()
            && self.protection.is_none()
    }

    /// A copy of this style with one slot replaced
    pub fn with_facet(&self, facet: StyleFacet) -> Style {
        let mut style = self.clone();
        style.set_facet(facet);
        style
    }

    /// A copy of this style with one slot cleared
    pub fn without_facet(&self, kind: FacetKind) -> Style {
        let mut style = self.clone();
        match kind {
            FacetKind::NumberFormat => style.number_format = None,
            FacetKind::Font => style.font = None,
            FacetKind::Fill => style.fill = None,
            FacetKind::Border => style.border = None,
            FacetKind::Alignment => style.alignment = None,
            FacetKind::Protection => style.protection = None,
        }
        style
    }

    /// The facet in a slot, if set
    pub fn facet(&self, kind: FacetKind) -> Option<StyleFacet> {
        match kind {
            FacetKind::NumberFormat => self.number_format.clone().map(StyleFacet::NumberFormat),
            FacetKind::Font => self.font.clone().map(StyleFacet::Font),
            FacetKind::Fill => self.fill.clone().map(StyleFacet::Fill),
            FacetKind::Border => self.border.clone().map(StyleFacet::Border),
            FacetKind::Alignment => self.alignment.clone().map(StyleFacet::Alignment),
            FacetKind::Protection => self.protection.map(StyleFacet::Protection),
        }
    }

    /// All set facets in slot order
    pub fn facets(&self) -> impl Iterator<Item = StyleFacet> + '_ {
        FacetKind::ALL.into_iter().filter_map(|kind| self.facet(kind))
    }

    fn set_facet(&mut self, facet: StyleFacet) {
        match facet {
            StyleFacet::NumberFormat(v) => self.number_format = Some(v),
            StyleFacet::Font(v) => self.font = Some(v),
            StyleFacet::Fill(v) => self.fill = Some(v),
            StyleFacet::Border(v) => self.border = Some(v),
            StyleFacet::Alignment(v) => self.alignment = Some(v),
            StyleFacet::Protection(v) => self.protection = Some(v),
        }
    }

    fn map_font(self, f: impl FnOnce(FontStyle) -> FontStyle) -> Self {
        let font = f(self.font.clone().unwrap_or_default());
        self.with_facet(StyleFacet::Font(font))
    }

    fn map_alignment(self, f: impl FnOnce(Alignment) -> Alignment) -> Self {
        let alignment = f(self.alignment.clone().unwrap_or_default());
        self.with_facet(StyleFacet::Alignment(alignment))
    }

    /// Set font to bold
    pub fn bold(self, bold: bool) -> Self {
        self.map_font(|f| f.with_bold(bold))
    }

    /// Set font to italic
    pub fn italic(self, italic: bool) -> Self {
        self.map_font(|f| f.with_italic(italic))
    }

    /// Set font size in points
    pub fn font_size(self, size: f64) -> Self {
        self.map_font(|f| f.with_size(size))
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(self, name: S) -> Self {
        self.map_font(|f| f.with_name(name))
    }

    /// Set font color
    pub fn font_color(self, color: Color) -> Self {
        self.map_font(|f| f.with_color(color))
    }

    /// Set fill color (solid fill)
    pub fn fill_color(self, color: Color) -> Self {
        self.with_facet(StyleFacet::Fill(FillStyle::solid(color)))
    }

    /// Set a custom number format string
    pub fn number_format<S: Into<String>>(self, format: S) -> Self {
        self.with_facet(StyleFacet::NumberFormat(NumberFormat::from_string(format)))
    }

    /// Set borders
    pub fn border(self, border: BorderStyle) -> Self {
        self.with_facet(StyleFacet::Border(border))
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(self, align: HorizontalAlignment) -> Self {
        self.map_alignment(|a| a.with_horizontal(align))
    }

    /// Set vertical alignment
    pub fn vertical_alignment(self, align: VerticalAlignment) -> Self {
        self.map_alignment(|a| a.with_vertical(align))
    }

    /// Enable text wrapping
    pub fn wrap_text(self, wrap: bool) -> Self {
        self.map_alignment(|a| a.with_wrap(wrap))
    }

    /// Set cell protection
    pub fn protection(self, protection: Protection) -> Self {
        self.with_facet(StyleFacet::Protection(protection))
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: bool,
    /// Formula is hidden when sheet is protected
    pub hidden: bool,
}

impl Default for Protection {
    fn default() -> Self {
        Self::new()
    }
}

impl Protection {
    /// Create default protection (locked, not hidden)
    pub fn new() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }

    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            hidden: false,
        }
    }
}
