use std::fmt;

/// Pen widths offered by the thin/thick buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thickness {
    Thin,
    Thick,
}

impl Thickness {
    pub fn width(self) -> f32 {
        match self {
            Self::Thin => 1.0,
            Self::Thick => 5.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Thick => "Thick",
        }
    }
}

/// The drawing mode selected in the tools panel. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolState {
    Pen(Thickness),
    Sticker(String),
}

impl Default for ToolState {
    fn default() -> Self {
        Self::Pen(Thickness::Thin)
    }
}

impl ToolState {
    pub fn sticker(glyph: impl Into<String>) -> Self {
        Self::Sticker(glyph.into())
    }

    pub fn is_pen(&self, thickness: Thickness) -> bool {
        matches!(self, Self::Pen(t) if *t == thickness)
    }

    pub fn is_sticker(&self, glyph: &str) -> bool {
        matches!(self, Self::Sticker(g) if g == glyph)
    }
}

impl fmt::Display for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pen(thickness) => write!(f, "{} pen", thickness.name()),
            Self::Sticker(glyph) => write!(f, "Sticker {}", glyph),
        }
    }
}
