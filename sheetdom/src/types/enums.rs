use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Fill,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    Stretch,
}

/// Border drawn inside the element's bounds. `RoundedTop` rounds only the
/// two top corners, for panels anchored to the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
    RoundedTop,
}

/// Compositing applied to everything already drawn beneath the element.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Backdrop {
    #[default]
    None,
    /// Darken underlying content by the given amount (0.0 - 1.0).
    Dim(f32),
    /// Blend underlying content toward a color by the given opacity.
    Tint { color: Color, opacity: f32 },
}

impl Backdrop {
    /// The strength of the backdrop effect, whatever its flavor.
    pub fn opacity(&self) -> Option<f32> {
        match self {
            Self::None => None,
            Self::Dim(amount) => Some(*amount),
            Self::Tint { opacity, .. } => Some(*opacity),
        }
    }

    /// Same backdrop with a different strength.
    pub fn with_opacity(&self, value: f32) -> Self {
        match self {
            Self::None => Self::None,
            Self::Dim(_) => Self::Dim(value),
            Self::Tint { color, .. } => Self::Tint {
                color: color.clone(),
                opacity: value,
            },
        }
    }
}
