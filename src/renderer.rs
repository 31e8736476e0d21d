use crate::drawable::RenderStyle;
use crate::state::SketchpadState;
use crate::surface::Surface;

/// Repaints the whole canvas from scratch: background, every committed
/// drawable in order, then the pointer preview on top.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn render(&self, surface: &mut dyn Surface, state: &SketchpadState) {
        surface.clear();

        for drawable in state.history().snapshot() {
            drawable.render(surface, &self.style);
        }

        if let Some(preview) = state.preview() {
            preview.render(surface, &self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchpadConfig;
    use crate::surface::{DrawOp, RecordingSurface};
    use egui::Pos2;

    #[test]
    fn test_empty_canvas_only_clears() {
        let state = SketchpadState::new(&SketchpadConfig::default());
        let mut surface = RecordingSurface::new();
        Renderer::default().render(&mut surface, &state);

        assert_eq!(surface.ops(), &[DrawOp::Clear]);
    }

    #[test]
    fn test_preview_drawn_after_content() {
        let mut state = SketchpadState::new(&SketchpadConfig::default());
        state.pointer_down(Pos2::new(1.0, 1.0));
        state.pointer_up(Pos2::new(1.0, 1.0));
        state.pointer_move(Pos2::new(30.0, 30.0));

        let mut surface = RecordingSurface::new();
        Renderer::default().render(&mut surface, &state);

        // clear, the dot, then the cursor disc and marker
        let ops = surface.ops();
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[1], DrawOp::Circle { center, .. } if center == Pos2::new(1.0, 1.0)));
        assert!(matches!(ops[3], DrawOp::Text { center, .. } if center == Pos2::new(30.0, 30.0)));
    }
}
