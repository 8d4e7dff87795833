//! Color representation

/// Highest theme color slot the format defines (`dk1` .. `folHlink`)
pub const MAX_THEME_INDEX: u8 = 11;

/// Highest legacy palette index the format defines (64 = system foreground,
/// 65 = system background)
pub const MAX_INDEXED_COLOR: u8 = 65;

/// Color representation
///
/// Supports RGB, ARGB, theme colors, and indexed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with tint
    Theme {
        /// Theme color index (0-11)
        index: u8,
        /// Tint in percent (-100 to 100)
        tint: i8,
    },

    /// Indexed color (legacy palette)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create a theme color
    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Describe why this color cannot be stored, if it cannot
    pub(crate) fn unsupported_reason(&self) -> Option<String> {
        match *self {
            Color::Theme { index, .. } if index > MAX_THEME_INDEX => {
                Some(format!("theme color index {index} (max {MAX_THEME_INDEX})"))
            }
            Color::Theme { tint, .. } if !(-100..=100).contains(&tint) => {
                Some(format!("theme tint {tint}% (must be within -100..=100)"))
            }
            Color::Indexed(i) if i > MAX_INDEXED_COLOR => {
                Some(format!("indexed color {i} (max {MAX_INDEXED_COLOR})"))
            }
            _ => None,
        }
    }

    // Common colors
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
}
