//! # doctask
//!
//! Observable document task execution library.
//!
//! ## Design Philosophy
//!
//! doctask is designed to be:
//! - **Engine-agnostic** - The actual document work (parsing, splitting,
//!   writing output files) is delegated to an external engine behind the
//!   [`TaskEngine`] trait
//! - **Event-driven** - Consumers register listeners and observe progress,
//!   completion, and failure as typed events, no polling required
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Explicit** - The notification context is owned and passed by the
//!   caller; there is no process-wide listener registry
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctask::{
//!     Config, ConflictPolicy, NotificationContext, OutputTarget, ProgressLogListener,
//!     SplitOperation, TaskExecutor, TaskParameters,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let params = TaskParameters {
//!         sources: vec!["test.pdf".into()],
//!         operation: SplitOperation::ByPages {
//!             pages: vec![10, 20],
//!         },
//!         output: OutputTarget::Directory("/tmp/output".into()),
//!         conflict_policy: ConflictPolicy::Overwrite,
//!     };
//!
//!     let mut ctx = NotificationContext::new();
//!     ctx.add_listener(Box::new(ProgressLogListener));
//!
//!     let executor = TaskExecutor::from_config(&Config::default());
//!     let outcome = executor.execute(&params, &ctx).await?;
//!     println!("Wrote {} documents", outcome.outputs.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// External document engine implementations
pub mod engine;
/// Error types
pub mod error;
/// Task execution and progress reporting
pub mod executor;
/// Built-in event listeners
pub mod listeners;
/// Listener registry and event dispatch
pub mod notification;
/// Task parameter types and validation
pub mod params;
/// Core event and outcome types
pub mod types;

// Re-export commonly used types
pub use config::{Config, EngineConfig, ExecutionConfig};
pub use engine::{CliTaskEngine, EngineCapabilities, EngineReport, NoOpTaskEngine, TaskEngine};
pub use error::{Error, ParameterError, Result};
pub use executor::{ProgressReporter, TaskExecutor};
pub use listeners::{
    CompletionLogListener, FailureListener, ProgressLogListener, RecordingListener,
};
pub use notification::{EventListener, NotificationContext};
pub use params::{ConflictPolicy, OutputTarget, PageArea, SplitOperation, TaskParameters};
pub use types::{Event, EventKind, TaskOutcome};
