/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The last
/// scan result is held as an explicit [`ScanReport`] value: the fix pass
/// consumes exactly the issues the user was shown, and nothing else.
///
/// Scanning and fixing are synchronous; both run to completion inside the
/// frame whose button press triggered them.
use anyhow::Context;
use std::path::{Path, PathBuf};
use syncsafe_core::fixer::{self, FixOutcome};
use syncsafe_core::model::ScanReport;
use syncsafe_core::report::{self, ReportFormat};
use syncsafe_core::scanner::{self, ScanError};
use tracing::{info, warn};

/// Maximum number of rename errors listed in the result dialog.
///
/// The full list stays available in `last_fix`.
pub const MAX_ERRORS_SHOWN: usize = 5;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing scanned yet, or the last scan failed.
    Idle,
    /// A scan report is available.
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body: body.into(),
        }
    }
}

/// All application state.
pub struct AppState {
    // ── Input ──────────────────────────────────────────
    /// Folder path as typed or picked by the user.
    pub root_input: String,

    // ── Scan ───────────────────────────────────────────
    pub phase: AppPhase,
    pub report: Option<ScanReport>,
    /// Row selected in the issue table.
    pub selected_issue: Option<usize>,

    // ── Fix ────────────────────────────────────────────
    /// Outcome of the most recent fix pass.
    pub last_fix: Option<FixOutcome>,
    /// Confirmation dialog before renaming.
    pub show_confirm: bool,

    // ── UI state ───────────────────────────────────────
    pub status: String,
    pub notice: Option<Notice>,
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            root_input: String::new(),
            phase: AppPhase::Idle,
            report: None,
            selected_issue: None,
            last_fix: None,
            show_confirm: false,
            status: "Ready".to_string(),
            notice: None,
            show_about: false,
            dark_mode: true,
        }
    }

    /// Set the folder to scan, e.g. from the folder picker.
    pub fn set_root(&mut self, path: &Path) {
        self.root_input = path.to_string_lossy().into_owned();
    }

    /// Scan the folder in `root_input`, replacing any previous results.
    ///
    /// An empty or invalid folder leaves the old results untouched and
    /// raises an error notice instead.
    pub fn scan(&mut self) {
        let input = self.root_input.trim();
        if input.is_empty() {
            self.notice = Some(Notice::new(
                NoticeKind::Error,
                "Error",
                "Please select a valid directory",
            ));
            return;
        }

        let root = PathBuf::from(input);
        if let Err(err) = self.scan_root(&root) {
            warn!("Scan rejected: {err}");
            self.status = "Ready".to_string();
            self.notice = Some(Notice::new(
                NoticeKind::Error,
                "Error",
                format!("Please select a valid directory\n\n{err}"),
            ));
        }
    }

    /// Scan `root` and make the result the current report.
    fn scan_root(&mut self, root: &Path) -> Result<(), ScanError> {
        let report = scanner::scan(root)?;
        self.status = format!("Found {} issues", report.issue_count());
        self.selected_issue = None;
        self.report = Some(report);
        self.phase = AppPhase::Results;
        Ok(())
    }

    /// Number of issues in the current report.
    pub fn issue_count(&self) -> usize {
        self.report.as_ref().map_or(0, ScanReport::issue_count)
    }

    /// Ask for confirmation before fixing, or explain why there is nothing
    /// to fix.
    pub fn request_fix(&mut self) {
        if self.issue_count() == 0 {
            self.notice = Some(Notice::new(NoticeKind::Info, "Info", "No issues to fix"));
            return;
        }
        self.show_confirm = true;
    }

    pub fn cancel_fix(&mut self) {
        self.show_confirm = false;
    }

    /// Rename every issue in the current report, then rescan.
    pub fn confirm_fix(&mut self) {
        self.show_confirm = false;
        let Some(report) = self.report.as_ref() else {
            return;
        };

        info!("User confirmed fix of {} entries", report.issue_count());
        let root = report.root.clone();
        let outcome = fixer::execute(&report.issues);
        let mut notice = fix_notice(&outcome);
        self.last_fix = Some(outcome);

        // Show what is left under the root that was fixed, not whatever the
        // folder box holds now.
        if let Err(err) = self.scan_root(&root) {
            warn!("Rescan after fix failed: {err}");
            self.report = None;
            self.selected_issue = None;
            self.phase = AppPhase::Idle;
            self.status = "Ready".to_string();
            notice.body.push_str(&format!("\n\nRescan failed: {err}"));
        }
        self.notice = Some(notice);
    }

    /// Export the current report to `path` as CSV or JSON.
    pub fn export_report(&mut self, path: &Path) -> anyhow::Result<ReportFormat> {
        let report = self
            .report
            .as_ref()
            .context("Run a scan before exporting")?;
        let format = report::export(report, path)
            .with_context(|| format!("Failed to export report to {}", path.display()))?;
        self.status = format!("Exported {} issues to {}", report.issue_count(), path.display());
        Ok(format)
    }

    /// Close the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Build the result dialog for a fix pass.
///
/// Lists at most [`MAX_ERRORS_SHOWN`] errors as `"<path>: <message>"`.
pub fn fix_notice(outcome: &FixOutcome) -> Notice {
    if outcome.has_errors() {
        let shown: Vec<String> = outcome
            .error_lines()
            .into_iter()
            .take(MAX_ERRORS_SHOWN)
            .collect();
        Notice::new(
            NoticeKind::Warning,
            "Completed with errors",
            format!(
                "Fixed {} items\nErrors: {}\n\n{}",
                outcome.fixed_count,
                outcome.errors.len(),
                shown.join("\n")
            ),
        )
    } else {
        Notice::new(
            NoticeKind::Info,
            "Success",
            format!("Fixed {} items", outcome.fixed_count),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncsafe_core::fixer::RenameFailure;

    #[test]
    fn clean_fix_reports_success() {
        let outcome = FixOutcome {
            fixed_count: 3,
            ..FixOutcome::default()
        };
        let notice = fix_notice(&outcome);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.body, "Fixed 3 items");
    }

    #[test]
    fn error_list_is_capped() {
        let errors = (0..8)
            .map(|i| RenameFailure {
                path: PathBuf::from(format!("f{i}")),
                message: "denied".into(),
            })
            .collect();
        let outcome = FixOutcome {
            fixed_count: 1,
            skipped_count: 0,
            errors,
        };
        let notice = fix_notice(&outcome);
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(notice.body.starts_with("Fixed 1 items\nErrors: 8\n\n"));
        assert!(notice.body.contains("f4: denied"));
        assert!(!notice.body.contains("f5: denied"));
    }

    #[test]
    fn fix_without_scan_shows_info() {
        let mut state = AppState::new();
        state.request_fix();
        assert!(!state.show_confirm);
        assert_eq!(state.notice.as_ref().unwrap().body, "No issues to fix");
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut state = AppState::new();
        state.root_input = "   ".into();
        state.scan();
        assert_eq!(state.phase, AppPhase::Idle);
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }
}
