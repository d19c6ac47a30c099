//! Core event and outcome types for doctask

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// The kind of an [`Event`], used as the dispatch-table key in
/// [`NotificationContext`](crate::notification::NotificationContext)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Percentage-of-work-done updates
    Progress,
    /// Successful terminal event
    Completed,
    /// Failed terminal event
    Failed,
}

/// Event emitted during a task's lifecycle
///
/// One run emits zero or more `Progress` events followed by exactly one
/// terminal event (`Completed` or `Failed`). All events for a run are
/// delivered before the executor's `execute` call returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Percentage of work done changed
    Progress {
        /// Progress percentage (0.0 to 100.0), non-decreasing within one run
        percent: f32,
    },

    /// Task completed successfully
    Completed {
        /// Wall-clock execution time in milliseconds
        elapsed_ms: u64,
    },

    /// Task failed
    Failed {
        /// Description of the failure cause
        error: String,
    },
}

impl Event {
    /// The kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Progress { .. } => EventKind::Progress,
            Event::Completed { .. } => EventKind::Completed,
            Event::Failed { .. } => EventKind::Failed,
        }
    }

    /// Whether this is a terminal event (`Completed` or `Failed`)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Event::Progress { .. })
    }
}

/// Result of a successful task execution
#[must_use]
#[derive(Clone, Debug)]
pub struct TaskOutcome {
    /// Paths of the output documents the engine reported writing
    pub outputs: Vec<PathBuf>,

    /// Wall-clock execution time, matching the `Completed` event's
    /// `elapsed_ms` at millisecond precision
    pub elapsed: Duration,
}
