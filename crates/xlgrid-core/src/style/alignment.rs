//! Text alignment types

/// Largest indent level the format can store
pub const MAX_INDENT: u8 = 250;

/// Rotation value meaning "vertical stacked text"
pub const VERTICAL_TEXT_ROTATION: i16 = 255;

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment
    pub vertical: VerticalAlignment,
    /// Wrap text
    pub wrap_text: bool,
    /// Shrink to fit
    pub shrink_to_fit: bool,
    /// Indent level (0-250)
    pub indent: u8,
    /// Text rotation in degrees (-90 to 90, or 255 for vertical)
    pub rotation: i16,
    /// Reading order
    pub reading_order: ReadingOrder,
}

impl Alignment {
    /// Create a new default alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Set rotation angle
    ///
    /// The value is stored as given; out-of-range angles are reported when the
    /// style is registered rather than clamped here.
    pub fn with_rotation(mut self, degrees: i16) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set vertical text (rotation = 255)
    pub fn vertical_text(mut self) -> Self {
        self.rotation = VERTICAL_TEXT_ROTATION;
        self
    }

    pub(crate) fn unsupported_reason(&self) -> Option<String> {
        if self.indent > MAX_INDENT {
            return Some(format!("indent level {} (max {MAX_INDENT})", self.indent));
        }
        if !(-90..=90).contains(&self.rotation) && self.rotation != VERTICAL_TEXT_ROTATION {
            return Some(format!(
                "text rotation {} (must be within -90..=90 or {VERTICAL_TEXT_ROTATION})",
                self.rotation
            ));
        }
        None
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    /// Justify (stretch to fit width)
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Distributed (like justify, but for East Asian text)
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Center aligned
    Center,
    /// Bottom aligned (default)
    #[default]
    Bottom,
    /// Justify
    Justify,
    /// Distributed
    Distributed,
}

/// Reading order for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingOrder {
    /// Context dependent
    #[default]
    ContextDependent,
    /// Left to right
    LeftToRight,
    /// Right to left
    RightToLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_and_indent_limits() {
        assert!(Alignment::new().with_rotation(-90).unsupported_reason().is_none());
        assert!(Alignment::new().vertical_text().unsupported_reason().is_none());
        assert!(Alignment::new().with_rotation(91).unsupported_reason().is_some());
        assert!(Alignment::new().with_indent(250).unsupported_reason().is_none());
        assert!(Alignment::new().with_indent(251).unsupported_reason().is_some());
    }
}
