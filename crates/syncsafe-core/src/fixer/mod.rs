/// Rename executor — applies a scan's issues to the filesystem.
///
/// Renames run deepest first (see [`RenamePlan`]). Each rename is
/// independent: a failure is recorded and the batch carries on, and an
/// entry that has disappeared since the scan is skipped without comment.
/// The existence check right before each rename is last-check-then-act and
/// therefore racy against other processes.
pub mod plan;

pub use plan::{PlannedRename, RenamePlan};

use crate::model::{serialize_path_lossy, Issue};
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A rename that the filesystem refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameFailure {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for RenameFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of one fix pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixOutcome {
    /// Renames that succeeded.
    pub fixed_count: usize,
    /// Entries that no longer existed when their turn came.
    pub skipped_count: usize,
    pub errors: Vec<RenameFailure>,
}

impl FixOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors formatted as `"<path>: <message>"`.
    pub fn error_lines(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Rename every issue, deepest first.
///
/// Never fails as a whole; per-entry problems end up in
/// [`FixOutcome::errors`]. Failed renames are not retried.
pub fn execute(issues: &[Issue]) -> FixOutcome {
    let plan = RenamePlan::from_issues(issues);
    info!("Fixing {} entries", plan.len());

    let mut outcome = FixOutcome::default();
    for step in plan {
        if !exists(&step.from) {
            debug!("Skipping vanished entry {}", step.from.display());
            outcome.skipped_count += 1;
            continue;
        }
        match rename(&step.from, &step.to) {
            Ok(()) => {
                debug!("Renamed {} -> {}", step.from.display(), step.to.display());
                outcome.fixed_count += 1;
            }
            Err(err) => {
                warn!("Failed to rename {}: {}", step.from.display(), err);
                outcome.errors.push(RenameFailure {
                    path: step.from,
                    message: err.to_string(),
                });
            }
        }
    }

    info!(
        "Fix complete: {} renamed, {} skipped, {} errors",
        outcome.fixed_count,
        outcome.skipped_count,
        outcome.errors.len()
    );
    outcome
}

/// `true` if something is at `path`, without following a final symlink.
fn exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Rename in place, refusing to replace an existing target.
///
/// `std::fs::rename` silently overwrites files on Unix; Windows refuses.
/// Checking first makes both report the collision the same way.
fn rename(from: &Path, to: &Path) -> io::Result<()> {
    if exists(to) {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }
    std::fs::rename(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_displays_path_and_message() {
        let failure = RenameFailure {
            path: PathBuf::from("dir").join("a?b"),
            message: "Access is denied.".into(),
        };
        let expected = format!("{}: Access is denied.", Path::new("dir").join("a?b").display());
        assert_eq!(failure.to_string(), expected);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let outcome = execute(&[]);
        assert_eq!(outcome, FixOutcome::default());
        assert!(!outcome.has_errors());
    }
}
