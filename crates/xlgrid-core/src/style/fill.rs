//! Fill/background style types

use ordered_float::OrderedFloat;

use super::Color;

/// Fill style for cell background
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },

    /// Pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },

    /// Gradient fill
    Gradient {
        gradient_type: GradientType,
        angle: OrderedFloat<f64>,
        stops: Vec<GradientStop>,
    },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Create a linear gradient fill
    pub fn linear_gradient(angle: f64, stops: Vec<GradientStop>) -> Self {
        FillStyle::Gradient {
            gradient_type: GradientType::Linear,
            angle: OrderedFloat(angle),
            stops,
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }

    /// Check if this is a gradient fill
    pub fn is_gradient(&self) -> bool {
        matches!(self, FillStyle::Gradient { .. })
    }

    pub(crate) fn unsupported_reason(&self) -> Option<String> {
        match self {
            FillStyle::None => None,
            FillStyle::Solid { color } => color
                .unsupported_reason()
                .map(|r| format!("fill color: {r}")),
            FillStyle::Pattern {
                foreground,
                background,
                ..
            } => foreground
                .unsupported_reason()
                .or_else(|| background.unsupported_reason())
                .map(|r| format!("pattern fill color: {r}")),
            FillStyle::Gradient { stops, .. } => {
                if stops.len() < 2 {
                    return Some(format!(
                        "gradient fill with {} stop(s) (at least 2 required)",
                        stops.len()
                    ));
                }
                stops.iter().find_map(|stop| {
                    let position = stop.position.into_inner();
                    if !(0.0..=1.0).contains(&position) {
                        Some(format!("gradient stop at {position} (must be within 0..=1)"))
                    } else {
                        stop.color
                            .unsupported_reason()
                            .map(|r| format!("gradient stop color: {r}"))
                    }
                })
            }
        }
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// Horizontal stripe
    DarkHorizontal,
    /// Vertical stripe
    DarkVertical,
    /// Diagonal stripe (down)
    DarkDown,
    /// Diagonal stripe (up)
    DarkUp,
    /// Grid
    DarkGrid,
    /// Trellis
    DarkTrellis,
    /// Thin horizontal stripe
    LightHorizontal,
    /// Thin vertical stripe
    LightVertical,
    /// Thin diagonal stripe (down)
    LightDown,
    /// Thin diagonal stripe (up)
    LightUp,
    /// Thin grid
    LightGrid,
    /// Thin trellis
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

/// Gradient types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientType {
    /// Linear gradient
    #[default]
    Linear,
    /// Radial/path gradient
    Path,
}

/// Gradient stop (position and color)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position (0.0 to 1.0)
    pub position: OrderedFloat<f64>,
    /// Color at this position
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(position: f64, color: Color) -> Self {
        Self {
            position: OrderedFloat(position),
            color,
        }
    }
}
