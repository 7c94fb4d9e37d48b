/// SyncSafe Core — name sanitizing, scanning, and renaming.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`sanitize`] — Pure name rules: `sanitize` and `classify`.
/// - [`model`] — Entries, issues, and the scan report passed between calls.
/// - [`scanner`] — Read-only directory walk that collects issues.
/// - [`fixer`] — Deepest-first rename plan and its executor.
/// - [`report`] — CSV / JSON export of a scan report.
///
/// A frontend calls [`scanner::scan`], shows the issues, asks the user,
/// then passes the same issues to [`fixer::execute`].
pub mod fixer;
pub mod model;
pub mod report;
pub mod sanitize;
pub mod scanner;

pub use fixer::{execute, FixOutcome, RenameFailure};
pub use model::{Issue, IssueKind, IssueKinds, ScanReport};
pub use sanitize::{classify, sanitize};
pub use scanner::{scan, ScanError};
