use egui::Pos2;

use crate::drawable::RenderStyle;
use crate::surface::Surface;

/// A freehand pen path: the points the pointer passed through while held
/// down, drawn with a thickness fixed when the stroke started.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
}

impl Stroke {
    /// Start a stroke at the pointer-down position
    pub fn new(thickness: f32, start: Pos2) -> Self {
        Self {
            points: vec![start],
            thickness,
        }
    }

    /// Build a stroke from already recorded points
    pub fn from_points(thickness: f32, points: Vec<Pos2>) -> Self {
        debug_assert!(!points.is_empty(), "a stroke needs at least one point");
        Self { points, thickness }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Draw the stroke. A lone point becomes a dot so a click without drag
    /// still leaves a mark.
    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        match self.points.as_slice() {
            [] => {}
            [point] => surface.fill_circle(*point, self.thickness / 2.0, style.ink),
            points => surface.stroke_path(points, self.thickness, style.ink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_points_kept_in_order() {
        let mut stroke = Stroke::new(5.0, Pos2::new(1.0, 2.0));
        stroke.add_point(Pos2::new(3.0, 4.0));
        stroke.add_point(Pos2::new(-2.0, 300.0));

        assert_eq!(
            stroke.points(),
            &[Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0), Pos2::new(-2.0, 300.0)]
        );
        assert_eq!(stroke.thickness(), 5.0);
    }

    #[test]
    fn test_single_point_renders_dot() {
        let stroke = Stroke::new(5.0, Pos2::new(8.0, 8.0));
        let mut surface = RecordingSurface::new();
        stroke.render(&mut surface, &RenderStyle::default());

        assert_eq!(
            surface.ops(),
            &[DrawOp::Circle {
                center: Pos2::new(8.0, 8.0),
                radius: 2.5,
                color: egui::Color32::BLACK,
            }]
        );
    }

    #[test]
    fn test_multi_point_renders_path() {
        let stroke = Stroke::from_points(1.0, vec![Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0)]);
        let mut surface = RecordingSurface::new();
        stroke.render(&mut surface, &RenderStyle::default());

        match &surface.ops()[0] {
            DrawOp::Path { points, width, .. } => {
                assert_eq!(points.len(), 2);
                assert_eq!(*width, 1.0);
            }
            other => panic!("expected a path, got {:?}", other),
        }
    }
}
