//! Target-schema settings for style registration

use super::Style;

/// Cell-format limit of the target format
pub const DEFAULT_MAX_STYLES: u32 = 64_000;

/// What the target schema can represent
///
/// A [`StyleRegistry`](super::StyleRegistry) consults these settings before
/// assigning an index; a style the target cannot store is rejected with a
/// `NotSupported` style error instead of being silently altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleSettings {
    /// Whether gradient fills can be stored
    pub gradient_fills: bool,
    /// Maximum number of style table entries, default style included
    pub max_styles: Option<u32>,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            gradient_fills: true,
            max_styles: Some(DEFAULT_MAX_STYLES),
        }
    }
}

impl StyleSettings {
    /// Create the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow or forbid gradient fills
    pub fn with_gradient_fills(mut self, allowed: bool) -> Self {
        self.gradient_fills = allowed;
        self
    }

    /// Set the style table size limit (`None` for unlimited)
    pub fn with_max_styles(mut self, max_styles: Option<u32>) -> Self {
        self.max_styles = max_styles;
        self
    }

    /// Describe the first facet value of `style` the target cannot store
    pub(crate) fn unsupported_reason(&self, style: &Style) -> Option<String> {
        if let Some(reason) = style
            .number_format
            .as_ref()
            .and_then(|f| f.unsupported_reason())
        {
            return Some(reason);
        }
        if let Some(reason) = style.font.as_ref().and_then(|f| f.unsupported_reason()) {
            return Some(reason);
        }
        if let Some(fill) = &style.fill {
            if fill.is_gradient() && !self.gradient_fills {
                return Some("gradient fill".to_string());
            }
            if let Some(reason) = fill.unsupported_reason() {
                return Some(reason);
            }
        }
        if let Some(reason) = style.border.as_ref().and_then(|b| b.unsupported_reason()) {
            return Some(reason);
        }
        style
            .alignment
            .as_ref()
            .and_then(|a| a.unsupported_reason())
    }
}
