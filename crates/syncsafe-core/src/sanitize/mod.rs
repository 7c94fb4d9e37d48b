/// Name sanitizer — maps a single file or folder name to one that
/// OneDrive and Windows accept.
///
/// `sanitize` produces the corrected name; `classify` independently reports
/// which rules the *raw* name breaks, so the reasons shown to the user
/// match what they see before anything is renamed.
pub mod raw;
pub mod rules;

pub use raw::sanitize_os;

use crate::model::{IssueKind, IssueKinds};
use rules::{is_invalid_char, is_reserved_stem, is_trailing_junk, stem, PLACEHOLDER, REPLACEMENT};

/// Return the sanitized form of `name`.
///
/// Rules run in a fixed order, each feeding the next:
///
/// 1. every invalid character becomes `_`;
/// 2. all trailing spaces and periods are stripped;
/// 3. a reserved device stem gets `_` prepended to the whole name;
/// 4. an empty result becomes `unnamed`.
///
/// The output is a fixed point: `sanitize(&sanitize(n)) == sanitize(n)`.
pub fn sanitize(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if is_invalid_char(c) { REPLACEMENT } else { c })
        .collect();

    let trimmed = replaced.trim_end_matches(is_trailing_junk);

    let mut fixed = if is_reserved_stem(stem(trimmed)) {
        format!("{REPLACEMENT}{trimmed}")
    } else {
        trimmed.to_string()
    };

    if fixed.is_empty() {
        fixed.push_str(PLACEHOLDER);
    }
    fixed
}

/// Report which rules fire on the raw `name`.
///
/// A colon yields both [`IssueKind::InvalidCharacters`] and
/// [`IssueKind::NtfsStream`].
pub fn classify(name: &str) -> IssueKinds {
    let mut kinds = IssueKinds::empty();
    if name.chars().any(is_invalid_char) {
        kinds.insert(IssueKind::InvalidCharacters);
    }
    if name.contains(':') {
        kinds.insert(IssueKind::NtfsStream);
    }
    if name.ends_with(is_trailing_junk) {
        kinds.insert(IssueKind::TrailingSpaceOrPeriod);
    }
    if is_reserved_stem(stem(name)) {
        kinds.insert(IssueKind::ReservedName);
    }
    kinds
}

/// `true` if `name` needs no changes.
#[inline]
pub fn is_valid_name(name: &str) -> bool {
    sanitize(name) == name
}
