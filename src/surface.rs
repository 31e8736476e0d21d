use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

/// A 2D drawing target addressed in surface-local pixel coordinates.
///
/// The sketchpad only needs a handful of primitives, so anything that can
/// clear itself, stroke a polyline, fill a disc and place centered text can
/// host the drawing.
pub trait Surface {
    /// Reset the whole surface to its background
    fn clear(&mut self);

    /// Stroke straight segments through `points` in order
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` so that its bounding box is centered on `center`
    fn fill_text(&mut self, center: Pos2, text: &str, font_size: f32, color: Color32);
}

/// Draws onto an egui painter, translating local coordinates into the
/// screen rectangle allocated for the canvas.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(points, EguiStroke::new(width, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn fill_text(&mut self, center: Pos2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}

/// One primitive issued to a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Path {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Text {
        center: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Surface that keeps a log of every primitive instead of drawing.
///
/// Used to inspect what a render pass produced without a GPU context.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Primitives issued since the most recent clear
    pub fn visible_ops(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, center: Pos2, text: &str, font_size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            center,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}
