/// Rename plan — the scan's issues re-ordered deepest first.
///
/// Renaming a directory changes the path of everything below it, so every
/// descendant must be renamed while its recorded original path is still
/// valid. Sorting by descending component depth guarantees that.
use crate::model::{path_depth, serialize_path_lossy, Issue};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub from: PathBuf,
    #[serde(serialize_with = "serialize_path_lossy")]
    pub to: PathBuf,
    pub depth: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenamePlan {
    steps: Vec<PlannedRename>,
}

impl RenamePlan {
    /// Order `issues` by descending depth of their original path.
    ///
    /// The sort is stable, so entries at equal depth keep their scan order.
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut steps: Vec<PlannedRename> = issues
            .iter()
            .map(|issue| PlannedRename {
                from: issue.original.clone(),
                to: issue.fixed.clone(),
                depth: path_depth(&issue.original),
            })
            .collect();
        steps.sort_by(|a, b| b.depth.cmp(&a.depth));
        Self { steps }
    }

    pub fn steps(&self) -> &[PlannedRename] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl IntoIterator for RenamePlan {
    type Item = PlannedRename;
    type IntoIter = std::vec::IntoIter<PlannedRename>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
