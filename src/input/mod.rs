use egui::{Context, Pos2, Response};

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas, or anywhere while the button is held
    PointerMove { position: Pos2 },
    /// Primary button was released after a press that started on the canvas
    PointerUp { position: Pos2 },
    /// Pointer is no longer over the canvas
    PointerLeave,
}

/// Raw pointer state for one frame, already relative to the canvas origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    /// Latest known pointer position. Can lie outside the canvas.
    pub position: Option<Pos2>,
    /// Pointer is over the canvas widget
    pub hovered: bool,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
}

impl PointerFrame {
    /// Read this frame's pointer state for the canvas behind `response`
    pub fn capture(ctx: &Context, response: &Response) -> Self {
        let origin = response.rect.min;
        ctx.input(|input| Self {
            position: input.pointer.latest_pos().map(|pos| (pos - origin).to_pos2()),
            hovered: response.hovered(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer snapshots into discrete [`InputEvent`]s.
///
/// A press only counts when it starts on the canvas, but once pressed the
/// release is reported wherever it happens so strokes always end.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_position: Option<Pos2>,
    hovering: bool,
    button_down: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_button_down(&self) -> bool {
        self.button_down
    }

    pub fn process(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = frame.hovered && frame.position.is_some();

        if let Some(position) = frame.position {
            let moved = self.last_position != Some(position);
            if moved && (inside || self.button_down) {
                events.push(InputEvent::PointerMove { position });
            }

            if frame.pressed && inside && !self.button_down {
                self.button_down = true;
                events.push(InputEvent::PointerDown { position });
            }

            if frame.released && self.button_down {
                self.button_down = false;
                events.push(InputEvent::PointerUp { position });
            }

            self.last_position = Some(position);
        } else if frame.released && self.button_down {
            self.button_down = false;
            events.push(InputEvent::PointerUp {
                position: self.last_position.unwrap_or_default(),
            });
        }

        if self.hovering && !inside && !self.button_down {
            events.push(InputEvent::PointerLeave);
        }
        self.hovering = inside;

        events
    }
}
