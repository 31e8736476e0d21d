#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod drawable;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tool;

pub use app::SketchpadApp;
pub use config::SketchpadConfig;
pub use drawable::{Drawable, RenderStyle};
pub use error::{ConfigError, StickerError};
pub use event::{EventBus, EventHandler, SketchpadEvent};
pub use history::History;
pub use input::{InputEvent, InputHandler, PointerFrame};
pub use preview::Preview;
pub use renderer::Renderer;
pub use state::{EditorState, SketchpadState};
pub use sticker::{StickerMark, StickerPalette};
pub use stroke::Stroke;
pub use surface::{DrawOp, PainterSurface, RecordingSurface, Surface};
pub use tool::{Thickness, ToolState};
