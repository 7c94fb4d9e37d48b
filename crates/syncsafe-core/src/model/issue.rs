/// A naming problem detected on one entry, together with its proposed fix.
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// One sanitization rule that a raw name breaks.
///
/// Declaration order is the order used when building a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// Contains one of `< > : " / \ | ? *`.
    InvalidCharacters,
    /// Contains a colon, which NTFS reads as an alternate data stream marker.
    NtfsStream,
    TrailingSpaceOrPeriod,
    /// Stem is a DOS device name such as `CON` or `LPT1`.
    ReservedName,
}

impl IssueKind {
    pub const ALL: [IssueKind; 4] = [
        IssueKind::InvalidCharacters,
        IssueKind::NtfsStream,
        IssueKind::TrailingSpaceOrPeriod,
        IssueKind::ReservedName,
    ];

    /// Short human-readable name for the issue table.
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::InvalidCharacters => "Invalid chars",
            IssueKind::NtfsStream => "NTFS stream",
            IssueKind::TrailingSpaceOrPeriod => "Trailing space/period",
            IssueKind::ReservedName => "Reserved name",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of [`IssueKind`]s, iterated in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IssueKinds(u8);

impl IssueKinds {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, kind: IssueKind) {
        self.0 |= kind.bit();
    }

    pub fn contains(self, kind: IssueKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = IssueKind> {
        IssueKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }

    /// Labels joined with `", "`, e.g. `"Invalid chars, NTFS stream"`.
    pub fn label(self) -> String {
        self.iter()
            .map(IssueKind::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<IssueKind> for IssueKinds {
    fn from_iter<I: IntoIterator<Item = IssueKind>>(iter: I) -> Self {
        let mut kinds = Self::empty();
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}

impl fmt::Display for IssueKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for IssueKinds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// An entry whose name must change, and what it should become.
///
/// `fixed` always lives in the same directory as `original` and always
/// differs from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(serialize_with = "super::serialize_path_lossy")]
    pub original: PathBuf,
    #[serde(serialize_with = "super::serialize_path_lossy")]
    pub fixed: PathBuf,
    pub kinds: IssueKinds,
    pub is_dir: bool,
}

impl Issue {
    /// Human-readable issue type, e.g. `"Invalid chars, NTFS stream"`.
    pub fn label(&self) -> String {
        self.kinds.label()
    }

    /// Component depth of the original path.
    pub fn depth(&self) -> usize {
        super::path_depth(&self.original)
    }

    pub fn original_name(&self) -> String {
        file_name(&self.original)
    }

    pub fn fixed_name(&self) -> String {
        file_name(&self.fixed)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
