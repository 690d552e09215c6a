mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::ToolBarEvent;
pub use handlers::{EventLog, EventRecorder, LoggingEventHandler};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &ToolBarEvent);
}
