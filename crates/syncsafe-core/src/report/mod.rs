/// Scan report export — CSV for spreadsheets, JSON for everything else.
use crate::model::ScanReport;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format, chosen from the target file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    /// `.json` (any case) selects JSON; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Csv,
        }
    }
}

/// One row of the CSV export; mirrors the issue table columns.
#[derive(Serialize)]
struct CsvRow<'a> {
    original: &'a str,
    fixed: &'a str,
    issue: &'a str,
}

/// Write one row per issue with columns `original,fixed,issue`.
pub fn write_csv<W: Write>(report: &ScanReport, writer: W) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for issue in &report.issues {
        let original = issue.original.to_string_lossy();
        let fixed = issue.fixed.to_string_lossy();
        let label = issue.label();
        csv.serialize(CsvRow {
            original: &original,
            fixed: &fixed,
            issue: &label,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the whole report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &ScanReport, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Export `report` to `path`, picking the format from its extension.
pub fn export(report: &ScanReport, path: &Path) -> Result<ReportFormat, ReportError> {
    let format = ReportFormat::from_path(path);
    let mut out = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Csv => write_csv(report, &mut out)?,
        ReportFormat::Json => write_json(report, &mut out)?,
    }
    out.flush()?;
    info!(
        "Exported {} issues to {} ({:?})",
        report.issues.len(),
        path.display(),
        format
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Issue, IssueKind};
    use std::path::PathBuf;
    use std::time::Duration;

    fn sample_report() -> ScanReport {
        let root = PathBuf::from("root");
        ScanReport {
            root: root.clone(),
            issues: vec![Issue {
                original: root.join("notes."),
                fixed: root.join("notes"),
                kinds: [IssueKind::TrailingSpaceOrPeriod].into_iter().collect(),
                is_dir: false,
            }],
            entries_scanned: 3,
            max_depth: 1,
            walk_errors: Vec::new(),
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("r.JSON")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("r.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Csv);
    }

    #[test]
    fn csv_has_header_and_one_row_per_issue() {
        let mut buf = Vec::new();
        write_csv(&sample_report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "original,fixed,issue");
        assert!(lines[1].ends_with(",Trailing space/period"));
    }

    #[test]
    fn json_carries_issue_kinds() {
        let mut buf = Vec::new();
        write_json(&sample_report(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["entries_scanned"], 3);
        assert_eq!(value["issues"][0]["kinds"][0], "trailing-space-or-period");
    }

    #[cfg(unix)]
    #[test]
    fn json_accepts_non_utf8_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut report = sample_report();
        let root = PathBuf::from("root");
        report.issues.push(Issue {
            original: root.join(OsStr::from_bytes(b"bad\xffname?")),
            fixed: root.join(OsStr::from_bytes(b"bad\xffname_")),
            kinds: [IssueKind::InvalidCharacters].into_iter().collect(),
            is_dir: false,
        });

        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["issues"][1]["fixed"], "root/bad\u{fffd}name_");

        let mut csv = Vec::new();
        write_csv(&report, &mut csv).unwrap();
        assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 3);
    }

    #[test]
    fn export_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let format = export(&sample_report(), &path).unwrap();
        assert_eq!(format, ReportFormat::Json);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
