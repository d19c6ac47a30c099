//! Parser for docsplit engine output
//!
//! The engine binary reports on stdout, one record per line:
//!
//! ```text
//! progress 42.5
//! wrote /tmp/output/report_1.pdf
//! ```
//!
//! Unrecognized lines are tolerated so engine versions can add diagnostics
//! without breaking callers.

use std::path::PathBuf;

/// One parsed line of engine output
#[derive(Debug, Clone, PartialEq)]
pub enum EngineLine {
    /// A `progress <percent>` record
    Progress(f32),
    /// A `wrote <path>` record naming a finished output document
    Output(PathBuf),
    /// Anything else (diagnostics, blank lines)
    Other,
}

/// Parse one line of engine stdout
pub fn parse_engine_line(line: &str) -> EngineLine {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("progress ") {
        // Some engine builds append a percent sign
        if let Ok(percent) = rest.trim().trim_end_matches('%').parse::<f32>() {
            return EngineLine::Progress(percent);
        }
        return EngineLine::Other;
    }

    if let Some(rest) = trimmed.strip_prefix("wrote ") {
        let path = rest.trim();
        if !path.is_empty() {
            return EngineLine::Output(PathBuf::from(path));
        }
    }

    EngineLine::Other
}
