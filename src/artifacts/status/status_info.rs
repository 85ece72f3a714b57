use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::BTreeMap;

/// Staged, modified and untracked names, each sorted
///
/// The three lists are disjoint: a staged name is reported only as staged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub staged: Vec<String>,
    pub modified: Vec<String>,
    pub untracked: Vec<String>,
}

impl StatusInfo {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }

    pub fn files(&self, change: FileChangeType) -> &[String] {
        match change {
            FileChangeType::Staged => &self.staged,
            FileChangeType::Modified => &self.modified,
            FileChangeType::Untracked => &self.untracked,
        }
    }

    /// Every reported name with its category
    pub fn changeset(&self) -> BTreeMap<&str, FileChangeType> {
        [
            FileChangeType::Staged,
            FileChangeType::Modified,
            FileChangeType::Untracked,
        ]
        .into_iter()
        .flat_map(|change| {
            self.files(change)
                .iter()
                .map(move |name| (name.as_str(), change))
        })
        .collect()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> StatusInfo {
        let staging = self.repository.staging();
        let head_snapshot = self.repository.head().map(|head| head.snapshot());
        let inspector = Inspector::new(self.repository.working_tree(), head_snapshot);

        let not_staged = |names: Vec<String>| {
            names
                .into_iter()
                .filter(|name| !staging.contains(name))
                .collect::<Vec<_>>()
        };

        StatusInfo {
            staged: staging.entries().map(str::to_string).collect(),
            modified: not_staged(inspector.modified_files()),
            untracked: not_staged(inspector.untracked_files()),
        }
    }
}
