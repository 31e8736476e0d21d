use crate::tool::ToolState;

/// Signals emitted by the sketchpad after it changes
#[derive(Debug, Clone, PartialEq)]
pub enum SketchpadEvent {
    /// The committed drawables changed; the canvas must be repainted
    ContentChanged,
    /// Only the pointer preview moved or disappeared
    ToolMoved,
    ToolChanged {
        tool: ToolState,
    },
}

impl SketchpadEvent {
    /// Whether handling this event needs the canvas to be redrawn
    pub fn needs_repaint(&self) -> bool {
        matches!(self, Self::ContentChanged | Self::ToolMoved)
    }
}
