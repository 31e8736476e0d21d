mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::SketchpadEvent;
pub use handlers::{EventCounter, EventCounts, RepaintRequester};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &SketchpadEvent);
}
