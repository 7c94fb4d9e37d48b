/// A filesystem node visited during a scan.
///
/// Entries only live for the duration of one walk; anything that needs to
/// outlive the scan is turned into an [`Issue`](super::Issue).
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path as found on disk.
    pub path: PathBuf,
    /// Name exactly as stored on disk; renames are computed from this.
    pub os_name: OsString,
    /// Name lossily converted to UTF-8, for classifying and display.
    pub name: String,
    /// Depth below the scan root (direct children are 1). The scanner
    /// reports the deepest level it reached.
    pub depth: usize,
    pub is_dir: bool,
}

impl Entry {
    pub fn new(path: PathBuf, depth: usize, is_dir: bool) -> Self {
        let os_name = path.file_name().map(OsString::from).unwrap_or_default();
        let name = os_name.to_string_lossy().into_owned();
        Self {
            path,
            os_name,
            name,
            depth,
            is_dir,
        }
    }

    /// Directory containing this entry.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Path this entry would have after renaming it to `new_name`.
    pub fn sibling(&self, new_name: impl AsRef<Path>) -> PathBuf {
        self.parent().join(new_name)
    }
}
