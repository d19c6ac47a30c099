//! No-op engine for graceful degradation

use super::traits::{EngineCapabilities, EngineReport, TaskEngine};
use crate::executor::ProgressReporter;
use crate::params::TaskParameters;
use async_trait::async_trait;

/// No-op engine used when no document engine is available
///
/// Every run fails with `Error::NotSupported`, which the executor converts
/// into a `Failed` event and a `TaskFailed` error like any other engine
/// failure. This keeps the event contract intact on hosts without the
/// docsplit binary.
///
/// # Examples
///
/// ```
/// use doctask::engine::{NoOpTaskEngine, TaskEngine};
///
/// let engine = NoOpTaskEngine;
/// let caps = engine.capabilities();
/// assert!(!caps.split_by_pages);
/// assert!(!caps.split_by_text);
/// ```
pub struct NoOpTaskEngine;

#[async_trait]
impl TaskEngine for NoOpTaskEngine {
    async fn run(
        &self,
        _params: &TaskParameters,
        _progress: &ProgressReporter<'_>,
    ) -> crate::Result<EngineReport> {
        Err(crate::Error::NotSupported(
            "document splitting requires an external docsplit binary. \
             Configure engine_path in config or ensure docsplit is in PATH."
                .into(),
        ))
    }

    fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities {
            split_by_pages: false,
            split_by_text: false,
        }
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
