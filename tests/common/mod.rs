//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use doctask::{
    EngineCapabilities, EngineReport, Error, Event, EventKind, EventListener, ProgressReporter,
    Result, SplitOperation, TaskEngine, TaskParameters,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A scripted mid-task failure for [`SimulatedEngine`]
pub struct SimulatedFailure {
    /// Fail once reported progress reaches this percentage
    pub at_percent: f32,
    /// The failure cause the engine reports
    pub cause: String,
}

/// In-process engine simulating a document splitter
///
/// Knows the page count of every source it is handed, reports progress at
/// segment boundaries, and writes one placeholder output file per segment
/// into the output directory.
pub struct SimulatedEngine {
    pub page_count: u32,
    pub failure: Option<SimulatedFailure>,
}

impl SimulatedEngine {
    pub fn new(page_count: u32) -> Self {
        Self {
            page_count,
            failure: None,
        }
    }

    pub fn failing_at(page_count: u32, at_percent: f32, cause: &str) -> Self {
        Self {
            page_count,
            failure: Some(SimulatedFailure {
                at_percent,
                cause: cause.to_string(),
            }),
        }
    }

    /// Page segments produced by the requested operation
    fn segments(&self, params: &TaskParameters) -> Result<Vec<(u32, u32)>> {
        match &params.operation {
            SplitOperation::ByPages { pages } => {
                let mut segments = Vec::new();
                let mut start = 1;
                for &page in pages {
                    if page > self.page_count {
                        return Err(Error::Other(format!(
                            "split page {} out of range: document has {} pages",
                            page, self.page_count
                        )));
                    }
                    segments.push((start, page));
                    start = page + 1;
                }
                if start <= self.page_count {
                    segments.push((start, self.page_count));
                }
                Ok(segments)
            }
            // Text-driven splitting: pretend the inspected area changes
            // every third of the document.
            SplitOperation::ByTextArea { .. } => {
                let third = (self.page_count / 3).max(1);
                let mut segments = Vec::new();
                let mut start = 1;
                while start <= self.page_count {
                    let end = (start + third - 1).min(self.page_count);
                    segments.push((start, end));
                    start = end + 1;
                }
                Ok(segments)
            }
        }
    }
}

#[async_trait]
impl TaskEngine for SimulatedEngine {
    async fn run(
        &self,
        params: &TaskParameters,
        progress: &ProgressReporter<'_>,
    ) -> Result<EngineReport> {
        let segments = self.segments(params)?;
        let total = segments.len();
        let out_dir = params.output.path().clone();

        let mut outputs = Vec::new();
        for (index, (first, last)) in segments.into_iter().enumerate() {
            let percent = ((index + 1) as f32 / total as f32) * 100.0;
            if let Some(failure) = &self.failure {
                if percent >= failure.at_percent {
                    return Err(Error::Other(failure.cause.clone()));
                }
            }

            let path = out_dir.join(format!("part_{}_{}-{}.pdf", index + 1, first, last));
            std::fs::write(&path, b"%PDF-1.4 simulated")?;
            outputs.push(path);

            progress.report(percent)?;
        }

        Ok(EngineReport { outputs })
    }

    fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities {
            split_by_pages: true,
            split_by_text: true,
        }
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Listener appending `(tag, percent)` to a shared log, for asserting on
/// delivery order across multiple listeners.
pub struct OrderedProgressListener {
    pub tag: &'static str,
    pub log: Arc<Mutex<Vec<(&'static str, f32)>>>,
}

impl EventListener for OrderedProgressListener {
    fn kind(&self) -> EventKind {
        EventKind::Progress
    }

    fn on_event(&self, event: &Event) -> Result<()> {
        if let Event::Progress { percent } = event {
            self.log
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push((self.tag, *percent));
        }
        Ok(())
    }
}

/// Percents carried by the recorded progress events
pub fn percents(events: &[Event]) -> Vec<f32> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Progress { percent } => Some(*percent),
            _ => None,
        })
        .collect()
}

pub fn temp_output_dir() -> (tempfile::TempDir, PathBuf) {
    #[allow(clippy::expect_used)]
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}
