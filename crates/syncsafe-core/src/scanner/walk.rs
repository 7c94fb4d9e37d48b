/// Serial directory walker built on `jwalk`.
///
/// `jwalk` is run with `Parallelism::Serial` so the whole traversal happens
/// on the calling thread. Hidden entries are included and symlinks are not
/// followed; a link is reported as an entry in its own right.
use crate::model::{Entry, WalkError};
use std::path::Path;

/// Iterate every entry below `root`, excluding `root` itself.
///
/// Directories that cannot be listed are yielded as `Err(WalkError)` right
/// after the directory entry itself; the walk carries on with their
/// siblings.
pub fn entries(root: &Path) -> impl Iterator<Item = Result<Entry, WalkError>> {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .flat_map(|entry_result| match entry_result {
            Ok(mut entry) => {
                let path = entry.path();
                // jwalk reports a failed directory listing on the directory's
                // own entry rather than as an `Err` item.
                let unreadable = entry.read_children_error.take().map(|err| {
                    Err(WalkError {
                        path: path.to_string_lossy().into_owned(),
                        message: err.to_string(),
                    })
                });
                let visited = (entry.depth > 0).then(|| {
                    Ok(Entry::new(
                        path,
                        entry.depth,
                        entry.file_type().is_dir(),
                    ))
                });
                [visited, unreadable]
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let failed = Err(WalkError {
                    path,
                    message: err.to_string(),
                });
                [Some(failed), None]
            }
        })
        .flatten()
}
