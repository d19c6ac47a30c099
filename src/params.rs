//! Task parameter types and validation
//!
//! A [`TaskParameters`] value describes one unit of document-splitting work:
//! which documents to split, where the split points are, where output goes,
//! and what to do when output already exists. Parameters are plain data;
//! [`TaskParameters::validate`] is called by the executor before any work
//! starts, so a malformed value fails synchronously with zero events emitted.

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A top-left-anchored rectangular region on a page
///
/// Used by [`SplitOperation::ByTextArea`] to describe where the engine should
/// look for the text that drives split decisions. Coordinates and extents are
/// in page points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageArea {
    /// Horizontal offset of the region's top-left corner
    pub x: u32,
    /// Vertical offset of the region's top-left corner
    pub y: u32,
    /// Region width (must be non-zero)
    pub width: u32,
    /// Region height (must be non-zero)
    pub height: u32,
}

/// The split operation to perform on the source documents
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SplitOperation {
    /// Split after the given page numbers (1-based, strictly increasing)
    ByPages {
        /// Ordered split points; a point `p` ends an output document at page `p`
        pages: Vec<u32>,
    },

    /// Split wherever the text inside `area` changes between pages
    ByTextArea {
        /// Region the engine inspects for split-driving text
        area: PageArea,
    },
}

/// Where output documents are written
///
/// The original API exposed separate file-or-directory and plain-directory
/// destinations; both collapse into this single model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", content = "path", rename_all = "lowercase")]
pub enum OutputTarget {
    /// A single output file (only meaningful for single-output operations)
    File(PathBuf),
    /// A directory receiving one file per output document
    Directory(PathBuf),
}

impl OutputTarget {
    /// The configured destination path, regardless of target kind
    pub fn path(&self) -> &PathBuf {
        match self {
            OutputTarget::File(path) | OutputTarget::Directory(path) => path,
        }
    }
}

/// Behavior when an output path already exists
///
/// Enforcement is the engine's responsibility; this library only carries the
/// policy through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing output
    Overwrite,
    /// Fail the task
    #[default]
    Fail,
    /// Skip writing the conflicting output and continue
    Skip,
}

impl ConflictPolicy {
    /// Stable string form, used when passing the policy to an engine binary
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::Overwrite => "overwrite",
            ConflictPolicy::Fail => "fail",
            ConflictPolicy::Skip => "skip",
        }
    }
}

/// Parameters for one task execution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskParameters {
    /// Source documents to split (at least one required)
    pub sources: Vec<PathBuf>,

    /// The split operation to perform
    pub operation: SplitOperation,

    /// Output destination
    pub output: OutputTarget,

    /// Behavior when output already exists
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

impl TaskParameters {
    /// Validate the parameters
    ///
    /// Checks the invariants this layer can know without opening the source
    /// documents: a non-empty source set, strictly increasing 1-based split
    /// points, and a non-degenerate text area. The upper bound of a split
    /// point is checked by the engine, which knows the page count.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] encountered.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.sources.is_empty() {
            return Err(ParameterError::NoSources);
        }

        match &self.operation {
            SplitOperation::ByPages { pages } => {
                if pages.is_empty() {
                    return Err(ParameterError::NoSplitPages);
                }
                let mut previous: Option<u32> = None;
                for &page in pages {
                    if page == 0 {
                        return Err(ParameterError::InvalidSplitPage { page });
                    }
                    if let Some(prev) = previous {
                        if page <= prev {
                            return Err(ParameterError::SplitPagesNotIncreasing {
                                previous: prev,
                                page,
                            });
                        }
                    }
                    previous = Some(page);
                }
            }
            SplitOperation::ByTextArea { area } => {
                if area.width == 0 || area.height == 0 {
                    return Err(ParameterError::EmptyTextArea {
                        width: area.width,
                        height: area.height,
                    });
                }
            }
        }

        Ok(())
    }
}
