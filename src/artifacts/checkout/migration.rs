use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitRef;
use derive_new::new;

/// Replacement of the working tree by a commit's snapshot
///
/// The snapshot is deep-copied so that later edits never reach history. With
/// no target commit the working tree is emptied. The staging set is always
/// cleared.
#[derive(new)]
pub struct Migration<'r> {
    repository: &'r mut Repository,
    target: Option<&'r CommitRef>,
}

impl Migration<'_> {
    /// Number of files in the working tree afterwards
    pub fn apply_changes(self) -> usize {
        let Migration { repository, target } = self;

        match target {
            Some(commit) => repository.working_tree_mut().restore(commit.snapshot()),
            None => repository.working_tree_mut().clear(),
        }
        repository.staging_mut().clear();

        repository.working_tree().len()
    }
}
