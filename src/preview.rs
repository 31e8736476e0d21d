use egui::Pos2;

use crate::drawable::RenderStyle;
use crate::surface::Surface;
use crate::tool::{Thickness, ToolState};

/// Transient hint that follows the pointer. Never committed to history.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Pen tool: a translucent disc the size of the pen with a marker on top
    Cursor { position: Pos2, thickness: Thickness },
    /// Sticker tool: the glyph that a click would place
    Sticker { position: Pos2, glyph: String },
}

impl Preview {
    /// The preview matching the selected tool
    pub fn for_tool(tool: &ToolState, position: Pos2) -> Self {
        match tool {
            ToolState::Pen(thickness) => Self::Cursor {
                position,
                thickness: *thickness,
            },
            ToolState::Sticker(glyph) => Self::Sticker {
                position,
                glyph: glyph.clone(),
            },
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            Self::Cursor { position, .. } | Self::Sticker { position, .. } => *position,
        }
    }

    pub fn update_position(&mut self, point: Pos2) {
        match self {
            Self::Cursor { position, .. } | Self::Sticker { position, .. } => *position = point,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        match self {
            Self::Cursor {
                position,
                thickness,
            } => {
                surface.fill_circle(*position, thickness.width() / 2.0, style.cursor_fill);
                let font_size = match thickness {
                    Thickness::Thin => style.cursor_font_thin,
                    Thickness::Thick => style.cursor_font_thick,
                };
                surface.fill_text(*position, &style.cursor_marker, font_size, style.ink);
            }
            Self::Sticker { position, glyph } => {
                surface.fill_text(*position, glyph, style.sticker_font_size, style.ink);
            }
        }
    }
}
