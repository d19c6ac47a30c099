//! External document engine implementations
//!
//! All document-domain work (opening sources, detecting page boundaries,
//! writing output files) lives behind the [`TaskEngine`] trait. Two
//! implementations are provided:
//!
//! - [`CliTaskEngine`]: drives an external `docsplit` binary for full
//!   functionality
//! - [`NoOpTaskEngine`]: stub implementation when no engine is available
//!
//! ## Usage
//!
//! ```no_run
//! use doctask::engine::{CliTaskEngine, TaskEngine};
//!
//! let engine = CliTaskEngine::from_path().expect("docsplit binary not found");
//! assert!(engine.capabilities().split_by_pages);
//! ```

mod cli;
mod noop;
mod parser;
mod traits;

pub use cli::CliTaskEngine;
pub use noop::NoOpTaskEngine;
pub use traits::{EngineCapabilities, EngineReport, TaskEngine};
