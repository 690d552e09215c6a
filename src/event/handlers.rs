use std::sync::Arc;
use parking_lot::Mutex;
use crate::event::{EventHandler, ToolBarEvent};

/// Shared, append-only list of recorded events
pub type EventLog = Arc<Mutex<Vec<ToolBarEvent>>>;

/// Records every event so it can be inspected later (debug window, tests)
#[derive(Debug, Default)]
pub struct EventRecorder {
    log: EventLog,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the recorded events that outlives the recorder's subscription
    pub fn log(&self) -> EventLog {
        Arc::clone(&self.log)
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &ToolBarEvent) {
        self.log.lock().push(event.clone());
    }
}

/// Forwards events to the `log` facade at debug level
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &ToolBarEvent) {
        log::debug!("toolbar event: {:?}", event);
    }
}
