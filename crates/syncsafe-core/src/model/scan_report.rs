/// The result of one scan — the explicit value passed from `scan` to the
/// fix pass and to report export.
use super::Issue;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// A directory that could not be listed during the walk.
///
/// The rest of the tree is still scanned; the entry is only reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Directory the scan started from.
    #[serde(serialize_with = "super::serialize_path_lossy")]
    pub root: PathBuf,
    /// Entries needing a rename, in walk order.
    pub issues: Vec<Issue>,
    /// Files and directories visited, excluding the root.
    pub entries_scanned: u64,
    /// Deepest level reached below the root (0 for an empty root).
    pub max_depth: usize,
    pub walk_errors: Vec<WalkError>,
    pub duration: Duration,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Number of issues that are directories.
    pub fn dir_issue_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_dir).count()
    }
}
