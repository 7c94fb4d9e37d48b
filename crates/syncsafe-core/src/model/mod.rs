/// Data model for scan results.
///
/// `Entry` is transient walk state; `Issue` and `ScanReport` are the values
/// handed from a scan to the fix pass and to report export.
pub mod entry;
pub mod issue;
pub mod scan_report;

pub use entry::Entry;
pub use issue::{Issue, IssueKind, IssueKinds};
pub use scan_report::{ScanReport, WalkError};

/// Number of components in `path`, used as its depth for rename ordering.
pub fn path_depth(path: &std::path::Path) -> usize {
    path.components().count()
}

/// Serialize a path as a string, replacing undecodable bytes with U+FFFD.
///
/// serde's own `Path` impl errors on non-UTF-8 paths.
pub fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<std::path::Path>,
    S: serde::Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
