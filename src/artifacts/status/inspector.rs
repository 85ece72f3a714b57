use crate::areas::workspace::WorkingTree;
use crate::artifacts::objects::commit::Snapshot;
use derive_new::new;

/// How a single working tree file compares with HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceChangeType {
    Unchanged,
    Modified,
    Untracked,
}

/// Compares working tree files with the HEAD snapshot
///
/// Files committed at HEAD but missing from the working tree are never
/// reported: there is no deletion tracking.
#[derive(new)]
pub struct Inspector<'r> {
    working_tree: &'r WorkingTree,
    head_snapshot: Option<&'r Snapshot>,
}

impl<'r> Inspector<'r> {
    pub fn check_against_head(&self, name: &str, content: &str) -> WorkspaceChangeType {
        match self.head_snapshot.and_then(|snapshot| snapshot.get(name)) {
            None => WorkspaceChangeType::Untracked,
            Some(committed) if committed != content => WorkspaceChangeType::Modified,
            Some(_) => WorkspaceChangeType::Unchanged,
        }
    }

    /// Working tree files whose content differs from HEAD, in name order
    pub fn modified_files(&self) -> Vec<String> {
        self.files_with(WorkspaceChangeType::Modified)
    }

    pub fn untracked_files(&self) -> Vec<String> {
        self.files_with(WorkspaceChangeType::Untracked)
    }

    fn files_with(&self, change: WorkspaceChangeType) -> Vec<String> {
        self.working_tree
            .files()
            .filter(|(name, content)| self.check_against_head(name, content) == change)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
