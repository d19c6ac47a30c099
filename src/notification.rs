//! Listener registry and event dispatch
//!
//! The [`NotificationContext`] is owned by the caller and passed to the
//! executor by shared reference; there is no process-wide registry.
//! Internally it is a dispatch table keyed by [`EventKind`]: each listener
//! declares the one kind it handles, and `notify` delivers an event to the
//! listeners registered for that kind, synchronously and in registration
//! order. Listener errors propagate to the caller of `notify`.

use crate::error::Result;
use crate::types::{Event, EventKind};
use std::collections::HashMap;

/// A callback handler for one kind of task event
///
/// Listeners must be `Send + Sync` so a populated context can be shared
/// across tasks. Handlers run synchronously on the dispatching task and
/// should be quick; anything slow belongs on a channel.
pub trait EventListener: Send + Sync {
    /// The single event kind this listener receives
    fn kind(&self) -> EventKind;

    /// Handle one event of the declared kind
    ///
    /// # Errors
    ///
    /// An error aborts dispatch for this event and propagates to the caller
    /// of [`NotificationContext::notify`] (i.e. to the executor). This is how
    /// a listener can turn an observed event into a run-terminating error.
    fn on_event(&self, event: &Event) -> Result<()>;
}

/// Registry of event listeners, keyed by event kind
///
/// Populate the context before submitting a task; registration is not
/// synchronized against concurrent dispatch (it takes `&mut self`), which
/// makes the mutation-before-dispatch ordering a compile-time guarantee.
#[derive(Default)]
pub struct NotificationContext {
    listeners: HashMap<EventKind, Vec<Box<dyn EventListener>>>,
}

impl NotificationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener under its declared event kind
    ///
    /// Listeners for the same kind are dispatched in registration order.
    pub fn add_listener(&mut self, listener: Box<dyn EventListener>) {
        self.listeners
            .entry(listener.kind())
            .or_default()
            .push(listener);
    }

    /// Number of listeners registered for `kind`
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Dispatch an event to all listeners of its kind, in registration order
    ///
    /// Events of a kind with no listeners are dropped silently; the task
    /// must be able to run unobserved.
    ///
    /// # Errors
    ///
    /// The first listener error aborts dispatch of this event and is
    /// returned to the caller.
    pub fn notify(&self, event: &Event) -> Result<()> {
        if let Some(listeners) = self.listeners.get(&event.kind()) {
            for listener in listeners {
                listener.on_event(event)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for NotificationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(EventKind, usize)> = self
            .listeners
            .iter()
            .map(|(kind, listeners)| (*kind, listeners.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| format!("{kind:?}"));
        f.debug_struct("NotificationContext")
            .field("listeners", &counts)
            .finish()
    }
}
