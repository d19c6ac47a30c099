//! Traits and types for external document engines

use crate::executor::ProgressReporter;
use crate::params::TaskParameters;
use async_trait::async_trait;
use std::path::PathBuf;

/// Result of a completed engine run
#[must_use]
#[derive(Debug, Clone)]
pub struct EngineReport {
    /// Paths of the output documents the engine wrote, in creation order
    pub outputs: Vec<PathBuf>,
}

/// Capabilities of an engine implementation
#[derive(Debug, Clone, Copy)]
pub struct EngineCapabilities {
    /// Can split documents at explicit page numbers
    pub split_by_pages: bool,
    /// Can split documents on text-area content changes
    pub split_by_text: bool,
}

/// Trait for external document task engines
///
/// The engine owns everything document-shaped: parsing sources, computing
/// split boundaries, writing outputs, and enforcing the conflict policy.
/// This library only validates parameters, reports progress, and converts
/// the run's result into events.
///
/// Implementations report progress through the provided
/// [`ProgressReporter`] and must stop when a report call fails, since that
/// means a listener has aborted the run.
#[async_trait]
pub trait TaskEngine: Send + Sync {
    /// Run one task to completion
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source documents cannot be read or are out of range for the
    ///   requested split points
    /// - The external binary fails to execute (for CLI implementations)
    /// - The operation is not supported (for stub implementations)
    /// - A progress listener raised while the run was underway
    async fn run(
        &self,
        params: &TaskParameters,
        progress: &ProgressReporter<'_>,
    ) -> crate::Result<EngineReport>;

    /// Query capabilities of this engine
    fn capabilities(&self) -> EngineCapabilities;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
