use crate::event::{EventHandler, ToolBarEvent};
use std::cell::RefCell;

/// Fans toolbar events out to every subscriber, in subscription order.
///
/// Handlers must not emit from inside `handle_event`; the toolbar only emits
/// after it has finished mutating its own state.
pub struct EventBus {
    subscribers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.subscribers.borrow_mut().push(handler);
    }

    /// Delivers `event` to every subscriber and returns how many saw it.
    pub fn emit(&self, event: ToolBarEvent) -> usize {
        let mut subscribers = self.subscribers.borrow_mut();
        log::trace!("emit {:?} to {} subscribers", event, subscribers.len());
        subscribers
            .iter_mut()
            .map(|handler| handler.handle_event(&event))
            .count()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
