use egui::Pos2;
use log::{debug, info, trace, warn};

use crate::config::SketchpadConfig;
use crate::error::StickerError;
use crate::event::{EventBus, EventHandler, SketchpadEvent};
use crate::history::History;
use crate::input::InputEvent;
use crate::preview::Preview;
use crate::sticker::{StickerMark, StickerPalette};
use crate::stroke::Stroke;
use crate::tool::{Thickness, ToolState};

/// What the pointer is doing on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    /// Pen tool with the button held; points go to the active stroke
    Drawing,
}

/// All sketchpad state: history, selected tool, pointer preview, and the
/// subscribers that are told when any of it changes.
///
/// Every operation runs to completion and delivers its events before
/// returning, so a render after any call sees the latest state.
#[derive(Debug, Default)]
pub struct SketchpadState {
    history: History,
    tool: ToolState,
    palette: StickerPalette,
    mode: EditorState,
    preview: Option<Preview>,
    events: EventBus,
}

impl SketchpadState {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            palette: StickerPalette::new(config.stickers.iter().cloned()),
            ..Self::default()
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn mode(&self) -> EditorState {
        self.mode
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, position: Pos2) {
        match &self.tool {
            ToolState::Pen(thickness) => {
                if self.mode != EditorState::Idle {
                    return;
                }
                debug!("Starting {} stroke at {:?}", thickness.name(), position);
                self.history
                    .begin_stroke(Stroke::new(thickness.width(), position));
                self.mode = EditorState::Drawing;
            }
            ToolState::Sticker(glyph) => {
                debug!("Placing sticker {} at {:?}", glyph, position);
                self.history.commit(StickerMark::new(glyph.clone(), position));
            }
        }

        self.preview = None;
        self.events.emit(SketchpadEvent::ContentChanged);
    }

    pub fn pointer_move(&mut self, position: Pos2) {
        match self.mode {
            EditorState::Drawing => {
                if !self.history.extend_active(position) {
                    // The stroke was closed underneath us (undo or clear mid-drag)
                    self.mode = EditorState::Idle;
                }
                trace!("Stroke point {:?}", position);
                self.events.emit(SketchpadEvent::ContentChanged);
            }
            EditorState::Idle => {
                match &mut self.preview {
                    Some(preview) => preview.update_position(position),
                    None => self.preview = Some(Preview::for_tool(&self.tool, position)),
                }
                self.events.emit(SketchpadEvent::ToolMoved);
            }
        }
    }

    pub fn pointer_up(&mut self, _position: Pos2) {
        if self.mode != EditorState::Drawing {
            return;
        }

        if let Some(stroke) = self.history.active_stroke() {
            debug!("Finished stroke with {} points", stroke.points().len());
        }
        self.history.end_active();
        self.mode = EditorState::Idle;
        self.preview = None;
        self.events.emit(SketchpadEvent::ToolMoved);
    }

    pub fn pointer_leave(&mut self) {
        if self.preview.take().is_some() {
            self.events.emit(SketchpadEvent::ToolMoved);
        }
    }

    /// Switch tools. History is never touched.
    pub fn select_tool(&mut self, tool: ToolState) {
        if self.tool == tool {
            return;
        }
        info!("Tool selected: {}", tool);
        self.tool = tool;

        self.events.emit(SketchpadEvent::ToolChanged {
            tool: self.tool.clone(),
        });

        // Keep showing a preview where the pointer already is, but for the new tool
        if let Some(position) = self.preview.as_ref().map(Preview::position) {
            self.preview = Some(Preview::for_tool(&self.tool, position));
            self.events.emit(SketchpadEvent::ToolMoved);
        }
    }

    pub fn select_pen(&mut self, thickness: Thickness) {
        self.select_tool(ToolState::Pen(thickness));
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.select_tool(ToolState::sticker(glyph));
    }

    /// Add a user-supplied sticker to the palette and select it.
    ///
    /// `None` stands for a cancelled prompt and is rejected like blank text.
    pub fn add_custom_sticker(&mut self, text: Option<&str>) -> Result<String, StickerError> {
        let result = text
            .ok_or(StickerError::Empty)
            .and_then(|text| self.palette.add(text));

        match result {
            Ok(glyph) => {
                info!("Custom sticker added: {}", glyph);
                self.select_sticker(&glyph);
                Ok(glyph)
            }
            Err(err) => {
                warn!("Custom sticker rejected: {}", err);
                Err(err)
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        self.mode = EditorState::Idle;
        let changed = self.history.undo();
        if changed {
            debug!("Undo ({} left)", self.history.snapshot().len());
            self.events.emit(SketchpadEvent::ContentChanged);
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        self.mode = EditorState::Idle;
        let changed = self.history.redo();
        if changed {
            debug!("Redo ({} on canvas)", self.history.snapshot().len());
            self.events.emit(SketchpadEvent::ContentChanged);
        }
        changed
    }

    /// Remove everything from the canvas, including the redo buffer
    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.mode = EditorState::Idle;
        self.history.clear();
        self.events.emit(SketchpadEvent::ContentChanged);
    }
}
