use egui::Pos2;

use crate::drawable::Drawable;
use crate::stroke::Stroke;

/// Undo/redo engine for everything placed on the canvas.
///
/// `committed` is the draw order: later entries paint over earlier ones.
/// A stroke is committed the moment drawing starts and keeps growing in
/// place while it is the active stroke.
#[derive(Debug, Default)]
pub struct History {
    /// Drawables currently on the canvas
    committed: Vec<Drawable>,
    /// Undone drawables, most recently undone last
    redo_stack: Vec<Drawable>,
    /// Index into `committed` of the stroke still being drawn
    active: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawable produced by a fresh user action
    pub fn commit(&mut self, drawable: impl Into<Drawable>) {
        self.active = None;
        self.committed.push(drawable.into());
        self.redo_stack.clear(); // Redo is only valid directly after undo
    }

    /// Commit a stroke and keep it open for more points
    pub fn begin_stroke(&mut self, stroke: Stroke) {
        self.commit(stroke);
        self.active = Some(self.committed.len() - 1);
    }

    /// Append a point to the active stroke. Returns false if no stroke is open.
    pub fn extend_active(&mut self, point: Pos2) -> bool {
        let stroke = self
            .active
            .and_then(|index| self.committed.get_mut(index));

        match stroke {
            Some(Drawable::Stroke(stroke)) => {
                stroke.add_point(point);
                true
            }
            _ => {
                self.active = None;
                false
            }
        }
    }

    /// Freeze the active stroke
    pub fn end_active(&mut self) {
        self.active = None;
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active
            .and_then(|index| self.committed.get(index))
            .and_then(Drawable::as_stroke)
    }

    /// Move the newest drawable onto the redo stack
    pub fn undo(&mut self) -> bool {
        self.active = None;
        match self.committed.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone drawable
    pub fn redo(&mut self) -> bool {
        self.active = None;
        match self.redo_stack.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.committed.clear();
        self.redo_stack.clear();
    }

    /// Committed drawables in draw order
    pub fn snapshot(&self) -> &[Drawable] {
        &self.committed
    }

    /// Undone drawables, the next one to redo last
    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticker::StickerMark;

    fn stroke_at(x: f32) -> Stroke {
        Stroke::new(1.0, Pos2::new(x, x))
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = History::new();
        history.commit(stroke_at(1.0));
        assert!(history.undo());

        // committed is now empty; the redo stack must not move
        assert!(!history.undo());
        assert_eq!(history.redo_stack().len(), 1);
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn test_redo_on_empty_is_noop() {
        let mut history = History::new();
        history.commit(stroke_at(1.0));
        assert!(!history.redo());
        assert_eq!(history.snapshot().len(), 1);
    }

    #[test]
    fn test_extend_active_stroke() {
        let mut history = History::new();
        history.begin_stroke(stroke_at(0.0));
        assert!(history.extend_active(Pos2::new(5.0, 5.0)));
        assert_eq!(history.active_stroke().map(|s| s.points().len()), Some(2));

        history.end_active();
        assert!(!history.extend_active(Pos2::new(6.0, 6.0)));
        assert_eq!(history.snapshot()[0].as_stroke().unwrap().points().len(), 2);
    }

    #[test]
    fn test_undo_closes_active_stroke() {
        let mut history = History::new();
        history.begin_stroke(stroke_at(0.0));
        history.undo();
        history.redo();

        assert!(history.active_stroke().is_none());
        assert!(!history.extend_active(Pos2::new(1.0, 1.0)));
    }

    #[test]
    fn test_sticker_commit_ends_active_stroke() {
        let mut history = History::new();
        history.begin_stroke(stroke_at(0.0));
        history.commit(StickerMark::new("🌟", Pos2::new(3.0, 3.0)));

        assert!(!history.extend_active(Pos2::new(1.0, 1.0)));
        assert_eq!(history.snapshot().len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.commit(stroke_at(1.0));
        history.commit(stroke_at(2.0));
        history.undo();
        history.clear();

        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
