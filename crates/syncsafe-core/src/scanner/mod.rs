/// Tree scanner — walks a directory and collects every entry whose name
/// would change under [`sanitize`](crate::sanitize::sanitize).
///
/// Scanning is read-only and runs to completion on the calling thread.
/// Ordering between a directory and its descendants is left to the
/// [`fixer`](crate::fixer), which sorts by depth before renaming.
pub mod walk;

use crate::model::{Entry, Issue, ScanReport};
use crate::sanitize::{classify, sanitize_os};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// The scan root was unusable. Raised before any traversal begins.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot access {}: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), ScanError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ScanError::NotFound(root.to_path_buf()))
        }
        Err(source) => Err(ScanError::Inaccessible {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Scan the tree below `root` and return every entry needing a rename.
///
/// Both files and directories are checked, at every depth. The root itself
/// is never a candidate.
pub fn scan(root: &Path) -> Result<ScanReport, ScanError> {
    validate_root(root)?;

    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let mut issues = Vec::new();
    let mut walk_errors = Vec::new();
    let mut entries_scanned: u64 = 0;
    let mut max_depth: usize = 0;

    for entry_result in walk::entries(root) {
        match entry_result {
            Ok(entry) => {
                entries_scanned += 1;
                max_depth = max_depth.max(entry.depth);
                if let Some(issue) = inspect(&entry) {
                    debug!(
                        "{} -> {} ({})",
                        issue.original.display(),
                        issue.fixed.display(),
                        issue.label()
                    );
                    issues.push(issue);
                }
            }
            Err(err) => {
                warn!("Skipping {}: {}", err.path, err.message);
                walk_errors.push(err);
            }
        }
    }

    let duration = start.elapsed();
    info!(
        "Scan complete: {} entries, {} issues, {} unreadable in {:?}",
        entries_scanned,
        issues.len(),
        walk_errors.len(),
        duration
    );

    Ok(ScanReport {
        root: root.to_path_buf(),
        issues,
        entries_scanned,
        max_depth,
        walk_errors,
        duration,
    })
}

/// Build the [`Issue`] for a single entry, or `None` if its name is fine.
pub fn inspect(entry: &Entry) -> Option<Issue> {
    let fixed_name = sanitize_os(&entry.os_name);
    if fixed_name == entry.os_name {
        return None;
    }
    Some(Issue {
        original: entry.path.clone(),
        fixed: entry.sibling(&fixed_name),
        kinds: classify(&entry.name),
        is_dir: entry.is_dir,
    })
}
