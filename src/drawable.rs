use egui::Color32;

use crate::config::SketchpadConfig;
use crate::sticker::StickerMark;
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Fixed visual parameters shared by everything drawn on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub ink: Color32,
    pub background: Color32,
    pub sticker_font_size: f32,
    pub cursor_marker: String,
    pub cursor_font_thin: f32,
    pub cursor_font_thick: f32,
    pub cursor_fill: Color32,
}

impl RenderStyle {
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            ink: Color32::BLACK,
            background: Color32::WHITE,
            sticker_font_size: config.sticker_font_size,
            cursor_marker: config.cursor_marker.clone(),
            cursor_font_thin: config.cursor_font_thin,
            cursor_font_thick: config.cursor_font_thick,
            cursor_fill: Color32::from_black_alpha(config.cursor_alpha),
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

/// Anything that can be committed to the history and drawn
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(StickerMark),
}

impl Drawable {
    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface, style),
            Self::Sticker(sticker) => sticker.render(surface, style),
        }
    }

    /// Short label for history listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "Stroke",
            Self::Sticker(_) => "Sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerMark> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<StickerMark> for Drawable {
    fn from(sticker: StickerMark) -> Self {
        Self::Sticker(sticker)
    }
}
