//! Error types for doctask
//!
//! Two failure families exist:
//! - **Validation errors** ([`ParameterError`]) are raised synchronously by
//!   [`TaskParameters::validate`](crate::params::TaskParameters::validate)
//!   before execution starts and before any event is emitted.
//! - **Execution failures** surface as a `Failed` event followed by an
//!   [`Error::TaskFailed`] returned from the executor, carrying the same
//!   cause string end-to-end.

use thiserror::Error;

/// Result type alias for doctask operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for doctask
#[derive(Debug, Error)]
pub enum Error {
    /// Task parameters failed validation (raised before any event is emitted)
    #[error("invalid task parameters: {0}")]
    Parameter(#[from] ParameterError),

    /// Task execution failed; the cause matches the `Failed` event delivered
    /// for the same run
    #[error("task execution failed: {0}")]
    TaskFailed(String),

    /// External engine binary failed to execute
    #[error("external tool error: {0}")]
    ExternalTool(String),

    /// Operation not supported (missing engine binary, unsupported split mode)
    #[error("not supported: {0}")]
    NotSupported(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other engine-reported error
    #[error("{0}")]
    Other(String),
}

/// Validation errors for task parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    /// No source documents were provided
    #[error("no source documents provided")]
    NoSources,

    /// A split-by-pages operation has no split points
    #[error("no split pages provided")]
    NoSplitPages,

    /// Split pages must be strictly increasing
    #[error("split pages must be strictly increasing: {previous} is followed by {page}")]
    SplitPagesNotIncreasing {
        /// The earlier split point
        previous: u32,
        /// The offending split point that does not exceed it
        page: u32,
    },

    /// Split pages are 1-based; page 0 is never valid
    #[error("invalid split page: {page} (pages are numbered from 1)")]
    InvalidSplitPage {
        /// The offending split point
        page: u32,
    },

    /// A text-area split region must have non-zero width and height
    #[error("text area has no extent: {width}x{height}")]
    EmptyTextArea {
        /// Region width in points
        width: u32,
        /// Region height in points
        height: u32,
    },
}
