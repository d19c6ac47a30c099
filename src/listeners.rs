//! Built-in event listeners
//!
//! Three listeners mirror the classic progress/failure/completion trio, plus
//! a recording listener for callers (and tests) that assert on the event
//! stream. All logging goes through `tracing`.

use crate::error::{Error, Result};
use crate::notification::EventListener;
use crate::types::{Event, EventKind};
use std::sync::{Arc, Mutex};

/// Logs the percentage of work done at info level
pub struct ProgressLogListener;

impl EventListener for ProgressLogListener {
    fn kind(&self) -> EventKind {
        EventKind::Progress
    }

    fn on_event(&self, event: &Event) -> Result<()> {
        if let Event::Progress { percent } = event {
            tracing::info!(percent, "task progress");
        }
        Ok(())
    }
}

/// Logs the elapsed time of a completed task at info level
pub struct CompletionLogListener;

impl EventListener for CompletionLogListener {
    fn kind(&self) -> EventKind {
        EventKind::Completed
    }

    fn on_event(&self, event: &Event) -> Result<()> {
        if let Event::Completed { elapsed_ms } = event {
            tracing::info!(elapsed_ms, "task completed");
        }
        Ok(())
    }
}

/// Logs a task failure and re-raises the cause
///
/// Re-raising aborts dispatch and surfaces the cause to the executor's
/// caller. The executor already returns `Error::TaskFailed` with the same
/// cause on its own, so registering this listener changes what is logged,
/// not what the caller sees.
pub struct FailureListener;

impl EventListener for FailureListener {
    fn kind(&self) -> EventKind {
        EventKind::Failed
    }

    fn on_event(&self, event: &Event) -> Result<()> {
        if let Event::Failed { error } = event {
            tracing::error!(error = %error, "task execution failed");
            return Err(Error::TaskFailed(error.clone()));
        }
        Ok(())
    }
}

/// Captures every event of one kind into a shared buffer
///
/// Clone the listener (or call [`RecordingListener::events`]) to read the
/// captured events after the run.
#[derive(Clone)]
pub struct RecordingListener {
    kind: EventKind,
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingListener {
    /// Create a recorder for events of `kind`
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the events captured so far, in delivery order
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl EventListener for RecordingListener {
    fn kind(&self) -> EventKind {
        self.kind
    }

    fn on_event(&self, event: &Event) -> Result<()> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
        Ok(())
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationContext;

    #[test]
    fn failure_listener_re_raises_the_event_cause() {
        let listener = FailureListener;
        let result = listener.on_event(&Event::Failed {
            error: "page 99 out of range".into(),
        });

        match result {
            Err(Error::TaskFailed(cause)) => {
                assert_eq!(
                    cause, "page 99 out of range",
                    "re-raised cause must match the event's cause"
                );
            }
            other => panic!("expected TaskFailed, got {other:?}"),
        }
    }

    #[test]
    fn progress_and_completion_listeners_are_pure_observers() {
        assert!(
            ProgressLogListener
                .on_event(&Event::Progress { percent: 42.0 })
                .is_ok()
        );
        assert!(
            CompletionLogListener
                .on_event(&Event::Completed { elapsed_ms: 17 })
                .is_ok()
        );
    }

    #[test]
    fn listeners_declare_their_kinds() {
        assert_eq!(ProgressLogListener.kind(), EventKind::Progress);
        assert_eq!(CompletionLogListener.kind(), EventKind::Completed);
        assert_eq!(FailureListener.kind(), EventKind::Failed);
    }

    #[test]
    fn recording_listener_captures_in_delivery_order() {
        let recorder = RecordingListener::new(EventKind::Progress);
        let mut ctx = NotificationContext::new();
        ctx.add_listener(Box::new(recorder.clone()));

        for percent in [10.0, 50.0, 100.0] {
            ctx.notify(&Event::Progress { percent }).unwrap();
        }

        let events = recorder.events();
        assert_eq!(
            events,
            vec![
                Event::Progress { percent: 10.0 },
                Event::Progress { percent: 50.0 },
                Event::Progress { percent: 100.0 },
            ]
        );
    }

    #[test]
    fn recording_listener_ignores_other_kinds() {
        let recorder = RecordingListener::new(EventKind::Completed);
        let mut ctx = NotificationContext::new();
        ctx.add_listener(Box::new(recorder.clone()));

        ctx.notify(&Event::Progress { percent: 10.0 }).unwrap();
        ctx.notify(&Event::Completed { elapsed_ms: 3 }).unwrap();

        assert_eq!(recorder.events(), vec![Event::Completed { elapsed_ms: 3 }]);
    }
}
