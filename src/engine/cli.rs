//! CLI-based engine using an external docsplit binary

use super::parser::{EngineLine, parse_engine_line};
use super::traits::{EngineCapabilities, EngineReport, TaskEngine};
use crate::executor::ProgressReporter;
use crate::params::{OutputTarget, SplitOperation, TaskParameters};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

/// CLI-based engine driving an external `docsplit` binary
///
/// The binary's stdout is streamed line-by-line while the task runs, so
/// progress surfaces as it happens rather than after the process exits.
/// Conflict-policy enforcement stays in the binary; this engine only passes
/// the policy through.
///
/// # Examples
///
/// ```no_run
/// use doctask::engine::CliTaskEngine;
/// use std::path::PathBuf;
///
/// // Create with explicit path
/// let engine = CliTaskEngine::new(PathBuf::from("/usr/bin/docsplit"));
///
/// // Or auto-discover from PATH
/// let engine = CliTaskEngine::from_path().expect("docsplit not found in PATH");
/// ```
pub struct CliTaskEngine {
    binary_path: PathBuf,
}

impl CliTaskEngine {
    /// Create a new CLI engine with an explicit binary path
    pub fn new(binary_path: PathBuf) -> Self {
        Self { binary_path }
    }

    /// Attempt to find docsplit in PATH
    ///
    /// Uses the `which` crate to search the system PATH.
    ///
    /// # Returns
    ///
    /// `Some(CliTaskEngine)` if the binary is found, `None` otherwise.
    pub fn from_path() -> Option<Self> {
        which::which("docsplit").ok().map(Self::new)
    }

    fn build_command(&self, params: &TaskParameters) -> Command {
        let mut cmd = Command::new(&self.binary_path);

        match &params.operation {
            SplitOperation::ByPages { pages } => {
                cmd.arg("splitbypages");
                cmd.arg("--pages");
                cmd.args(pages.iter().map(u32::to_string));
            }
            SplitOperation::ByTextArea { area } => {
                cmd.arg("splitbytext");
                cmd.arg("--area");
                cmd.arg(format!(
                    "{},{},{},{}",
                    area.x, area.y, area.width, area.height
                ));
            }
        }

        cmd.arg("--files");
        cmd.args(&params.sources);

        match &params.output {
            OutputTarget::File(path) => {
                cmd.arg("--output-file").arg(path);
            }
            OutputTarget::Directory(path) => {
                cmd.arg("--output-dir").arg(path);
            }
        }

        cmd.arg("--existing-output")
            .arg(params.conflict_policy.as_str());

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // Error paths drop the child handle without waiting; the process
        // must not outlive the run.
        cmd.kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl TaskEngine for CliTaskEngine {
    async fn run(
        &self,
        params: &TaskParameters,
        progress: &ProgressReporter<'_>,
    ) -> crate::Result<EngineReport> {
        let mut cmd = self.build_command(params);

        let mut child = cmd.spawn().map_err(|e| {
            crate::Error::ExternalTool(format!(
                "failed to execute {}: {}",
                self.binary_path.display(),
                e
            ))
        })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            crate::Error::ExternalTool("engine stdout was not captured".into())
        })?;
        let mut stderr = child.stderr.take().ok_or_else(|| {
            crate::Error::ExternalTool("engine stderr was not captured".into())
        })?;

        // Drained concurrently with stdout: a chatty engine would otherwise
        // fill the stderr pipe and stall before stdout reaches EOF.
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
            buf
        });

        let mut outputs = Vec::new();
        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            match parse_engine_line(&line) {
                EngineLine::Progress(percent) => progress.report(percent)?,
                EngineLine::Output(path) => outputs.push(path),
                EngineLine::Other => tracing::debug!(line = %line, "engine output"),
            }
        }

        let status = child.wait().await.map_err(|e| {
            crate::Error::ExternalTool(format!("failed to wait for engine: {}", e))
        })?;
        let stderr_buf = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_buf);
            let detail = stderr.trim();
            return Err(crate::Error::ExternalTool(if detail.is_empty() {
                format!("engine exited with {}", status)
            } else {
                format!("engine exited with {}: {}", status, detail)
            }));
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
        "cli-docsplit"
    }
}
