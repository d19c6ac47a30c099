//! Task execution and progress reporting
//!
//! [`TaskExecutor`] is the entry point for running one task: it validates the
//! parameters, hands the work to the configured [`TaskEngine`], and drives
//! the notification pipeline. Event delivery is synchronous on the calling
//! task, so every event for a run happens-before `execute` returns.

use crate::config::Config;
use crate::engine::{CliTaskEngine, NoOpTaskEngine, TaskEngine};
use crate::error::{Error, Result};
use crate::notification::NotificationContext;
use crate::params::TaskParameters;
use crate::types::{Event, TaskOutcome};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Hands progress from the engine to the notification context
///
/// The reporter keeps a high-water mark per run: percents are clamped to
/// [0, 100] and values below the mark are dropped, so the observable
/// progress stream is always non-decreasing even when the engine's own
/// reporting jitters.
pub struct ProgressReporter<'a> {
    ctx: &'a NotificationContext,
    high_water: Mutex<f32>,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(ctx: &'a NotificationContext) -> Self {
        Self {
            ctx,
            high_water: Mutex::new(0.0),
        }
    }

    /// Report the percentage of work done so far
    ///
    /// Non-finite values are ignored. Values are clamped to [0, 100], and a
    /// value below an earlier report is dropped without dispatch.
    ///
    /// # Errors
    ///
    /// Propagates the first listener error raised during dispatch; engines
    /// should abort the run when this fails.
    pub fn report(&self, percent: f32) -> Result<()> {
        if !percent.is_finite() {
            tracing::debug!(percent, "ignoring non-finite progress value");
            return Ok(());
        }
        let percent = percent.clamp(0.0, 100.0);

        {
            let mut high_water = self
                .high_water
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if percent < *high_water {
                tracing::debug!(
                    percent,
                    high_water = *high_water,
                    "dropping regressing progress value"
                );
                return Ok(());
            }
            *high_water = percent;
        }

        self.ctx.notify(&Event::Progress { percent })
    }

    /// The highest percentage reported so far in this run
    pub fn high_water(&self) -> f32 {
        *self
            .high_water
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Executes tasks against a pluggable document engine
pub struct TaskExecutor {
    engine: Arc<dyn TaskEngine>,
}

impl TaskExecutor {
    /// Create an executor backed by the given engine
    pub fn new(engine: Arc<dyn TaskEngine>) -> Self {
        Self { engine }
    }

    /// Create an executor with the engine selected from configuration
    ///
    /// Selection order: an explicitly configured binary path, then PATH
    /// discovery (if enabled), then the no-op engine for graceful
    /// degradation.
    pub fn from_config(config: &Config) -> Self {
        let engine: Arc<dyn TaskEngine> = if let Some(ref path) = config.engine.engine_path {
            Arc::new(CliTaskEngine::new(path.clone()))
        } else if config.engine.search_path {
            CliTaskEngine::from_path()
                .map(|e| Arc::new(e) as Arc<dyn TaskEngine>)
                .unwrap_or_else(|| Arc::new(NoOpTaskEngine))
        } else {
            Arc::new(NoOpTaskEngine)
        };

        let caps = engine.capabilities();
        tracing::info!(
            engine = engine.name(),
            split_by_pages = caps.split_by_pages,
            split_by_text = caps.split_by_text,
            "task engine initialized"
        );

        Self { engine }
    }

    /// Name of the engine backing this executor
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Execute one task
    ///
    /// Emits zero or more `Progress` events while the engine runs, then
    /// exactly one terminal event: `Completed` on success or `Failed` on
    /// engine failure, with the `Failed` cause matching the returned error.
    /// All events are delivered before this method returns.
    ///
    /// # Errors
    ///
    /// - [`Error::Parameter`] if the parameters are invalid; no event has
    ///   been emitted in that case.
    /// - [`Error::TaskFailed`] if the engine (or a listener reached during
    ///   the run) fails; the `Failed` event carries the same cause.
    /// - Any error a listener raises while handling the terminal event.
    pub async fn execute(
        &self,
        params: &TaskParameters,
        ctx: &NotificationContext,
    ) -> Result<TaskOutcome> {
        params.validate().map_err(Error::Parameter)?;

        tracing::debug!(
            engine = self.engine.name(),
            sources = params.sources.len(),
            "executing task"
        );

        let started = Instant::now();
        let reporter = ProgressReporter::new(ctx);

        match self.engine.run(params, &reporter).await {
            Ok(report) => {
                let elapsed = started.elapsed();
                let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
                ctx.notify(&Event::Completed { elapsed_ms })?;
                Ok(TaskOutcome {
                    outputs: report.outputs,
                    elapsed,
                })
            }
            Err(err) => {
                let cause = err.to_string();
                ctx.notify(&Event::Failed {
                    error: cause.clone(),
                })?;
                Err(Error::TaskFailed(cause))
            }
        }
    }
}
