#![cfg(unix)]
/// End-to-end tests for the rename executor.
///
/// Every test scans a real temporary tree with `scanner::scan` and feeds
/// the resulting issues to `fixer::execute`, the same sequence a frontend
/// runs. Invalid names can only be created on Unix, so the whole file is
/// Unix-only.
use std::fs;
use std::path::Path;
use syncsafe_core::fixer::{execute, RenamePlan};
use syncsafe_core::model::{Issue, IssueKinds};
use syncsafe_core::scanner::scan;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn touch(path: &Path) {
    fs::write(path, b"data").unwrap();
}

/// ```text
/// root/
///   draft:v2/          -> draft_v2
///     sub?/            -> sub_
///       notes.         -> notes
///     CON.txt          -> _CON.txt
///   ok.txt
/// ```
fn build_nested_tree(root: &Path) {
    let sub = root.join("draft:v2").join("sub?");
    fs::create_dir_all(&sub).unwrap();
    touch(&sub.join("notes."));
    touch(&root.join("draft:v2").join("CON.txt"));
    touch(&root.join("ok.txt"));
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Nested bad names are all fixed, children before parents.
#[test]
fn nested_tree_is_fully_fixed() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    build_nested_tree(root);

    let report = scan(root).unwrap();
    assert_eq!(report.issue_count(), 4);

    let outcome = execute(&report.issues);
    assert_eq!(outcome.fixed_count, 4, "errors: {:?}", outcome.error_lines());
    assert_eq!(outcome.skipped_count, 0);
    assert!(!outcome.has_errors());

    assert!(root.join("draft_v2").join("sub_").join("notes").is_file());
    assert!(root.join("draft_v2").join("_CON.txt").is_file());
    assert!(root.join("ok.txt").is_file());
    assert!(!root.join("draft:v2").exists());

    // A second scan finds nothing left to do.
    assert!(scan(root).unwrap().is_clean());
}

/// The plan puts every descendant ahead of its ancestors regardless of the
/// order the scan produced them in.
#[test]
fn plan_orders_descendants_first() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_nested_tree(tmp.path());

    let mut issues = scan(tmp.path()).unwrap().issues;
    // Shallowest first is the worst case for a naive executor.
    issues.sort_by_key(|i| i.depth());

    let plan = RenamePlan::from_issues(&issues);
    for (pos, step) in plan.steps().iter().enumerate() {
        for later in &plan.steps()[pos + 1..] {
            assert!(
                !later.from.starts_with(&step.from) || later.from == step.from,
                "{} is renamed before its descendant {}",
                step.from.display(),
                later.from.display()
            );
        }
    }

    let outcome = execute(&issues);
    assert_eq!(outcome.fixed_count, 4);
}

/// An entry removed between scan and fix is skipped, not counted, not an
/// error.
#[test]
fn vanished_entry_is_skipped_silently() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    touch(&root.join("gone?"));
    touch(&root.join("kept?"));

    let report = scan(root).unwrap();
    assert_eq!(report.issue_count(), 2);
    fs::remove_file(root.join("gone?")).unwrap();

    let outcome = execute(&report.issues);
    assert_eq!(outcome.fixed_count, 1);
    assert_eq!(outcome.skipped_count, 1);
    assert!(outcome.errors.is_empty());
    assert!(root.join("kept_").is_file());
}

/// A failing rename is recorded and the rest of the batch still runs.
#[test]
fn failed_rename_does_not_abort_batch() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    touch(&root.join("a|b"));
    touch(&root.join("c|d"));
    // The fixed name for `a|b` is already taken by a non-empty directory.
    fs::create_dir(root.join("a_b")).unwrap();
    touch(&root.join("a_b").join("inside.txt"));

    let report = scan(root).unwrap();
    let collisions = report
        .issues
        .iter()
        .filter(|i| i.original_name() == "a|b")
        .count();
    assert_eq!(collisions, 1);

    let outcome = execute(&report.issues);
    assert_eq!(outcome.fixed_count, 1);
    assert_eq!(outcome.errors.len(), 1);

    let failure = &outcome.errors[0];
    assert_eq!(failure.path, root.join("a|b"));
    let line = &outcome.error_lines()[0];
    assert!(
        line.starts_with(&format!("{}: ", root.join("a|b").display())),
        "unexpected error line {line:?}"
    );

    assert!(root.join("a|b").is_file(), "original must be untouched");
    assert!(root.join("c_d").is_file());
}

/// An existing plain file at the target is never overwritten.
#[test]
fn existing_file_target_is_not_replaced() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    fs::write(root.join("report?.txt"), b"new").unwrap();
    fs::write(root.join("report_.txt"), b"old").unwrap();

    let outcome = execute(&scan(root).unwrap().issues);
    assert_eq!(outcome.fixed_count, 0);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(fs::read(root.join("report_.txt")).unwrap(), b"old");
}

/// Issues built by hand (not from a scan) follow the same rules.
#[test]
fn hand_built_issue_is_renamed() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let original = tmp.path().join("x*y");
    touch(&original);

    let issue = Issue {
        original: original.clone(),
        fixed: tmp.path().join("x_y"),
        kinds: IssueKinds::empty(),
        is_dir: false,
    };
    let outcome = execute(std::slice::from_ref(&issue));
    assert_eq!(outcome.fixed_count, 1);
    assert!(!original.exists());
    assert!(tmp.path().join("x_y").is_file());
}

/// A rename the OS refuses (read-only parent) is recorded with the OS
/// message, and the rest of the batch still runs.
#[test]
fn permission_denied_is_recorded() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    let frozen = root.join("frozen");
    fs::create_dir(&frozen).unwrap();
    touch(&frozen.join("a*b"));
    touch(&root.join("c*d"));

    let report = scan(root).unwrap();
    assert_eq!(report.issue_count(), 2);

    fs::set_permissions(&frozen, fs::Permissions::from_mode(0o555)).unwrap();
    // Root ignores permission bits; nothing to check there.
    if fs::write(frozen.join("write-check"), b"").is_ok() {
        fs::set_permissions(&frozen, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let outcome = execute(&report.issues);
    fs::set_permissions(&frozen, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(outcome.fixed_count, 1);
    assert_eq!(outcome.skipped_count, 0);
    assert_eq!(outcome.errors.len(), 1);
    let failure = &outcome.errors[0];
    assert_eq!(failure.path, frozen.join("a*b"));
    assert!(
        !failure.message.contains("already exists"),
        "expected an OS error, got {:?}",
        failure.message
    );
    assert!(frozen.join("a*b").is_file());
    assert!(root.join("c_d").is_file());
}

/// Renaming a non-UTF-8 name only touches the offending ASCII characters.
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_name_is_renamed_byte_exact() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    touch(&root.join(OsStr::from_bytes(b"bad\xffname?")));

    let outcome = execute(&scan(root).unwrap().issues);
    assert_eq!(outcome.fixed_count, 1);
    assert!(root.join(OsStr::from_bytes(b"bad\xffname_")).is_file());
}

/// A dangling symlink with a bad name still exists as far as the fixer is
/// concerned: the link itself is renamed, its target is never consulted.
#[test]
fn dangling_symlink_is_renamed() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = tmp.path();
    std::os::unix::fs::symlink(root.join("nowhere"), root.join("link?")).unwrap();

    let report = scan(root).unwrap();
    assert_eq!(report.issue_count(), 1);

    let outcome = execute(&report.issues);
    assert_eq!(outcome.fixed_count, 1);
    assert_eq!(outcome.skipped_count, 0);
    let renamed = root.join("link_");
    assert!(fs::symlink_metadata(&renamed).unwrap().file_type().is_symlink());
    assert!(!renamed.exists());
}
