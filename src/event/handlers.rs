use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, SketchpadEvent};

/// Asks egui for a new frame whenever the canvas content or preview changes
#[derive(Debug)]
pub struct RepaintRequester {
    ctx: egui::Context,
}

impl RepaintRequester {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintRequester {
    fn handle_event(&mut self, event: &SketchpadEvent) {
        if event.needs_repaint() {
            self.ctx.request_repaint();
        }
    }
}

/// Running totals of emitted events
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventCounts {
    pub content_changed: usize,
    pub tool_moved: usize,
    pub tool_changed: usize,
}

/// Tallies events into counts shared with whoever holds a clone
#[derive(Debug, Default, Clone)]
pub struct EventCounter {
    counts: Arc<Mutex<EventCounts>>,
}

impl EventCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> EventCounts {
        *self.counts.lock()
    }

    pub fn reset(&self) {
        *self.counts.lock() = EventCounts::default();
    }
}

impl EventHandler for EventCounter {
    fn handle_event(&mut self, event: &SketchpadEvent) {
        let mut counts = self.counts.lock();
        match event {
            SketchpadEvent::ContentChanged => counts.content_changed += 1,
            SketchpadEvent::ToolMoved => counts.tool_moved += 1,
            SketchpadEvent::ToolChanged { .. } => counts.tool_changed += 1,
        }
    }
}
