use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitRef, Snapshot};
use crate::errors::{Precondition, RepositoryError, RepositoryResult};
use std::rc::Rc;

impl Repository {
    /// Record the staged files on top of HEAD and advance the current branch
    ///
    /// The new snapshot starts as a copy of HEAD's, then every staged name
    /// takes its working tree content. Names are never dropped from a
    /// snapshot, so a file deleted from the working tree stays in history.
    pub fn commit(&mut self, message: &str) -> RepositoryResult<CommitRef> {
        if self.staging().is_empty() {
            return Err(RepositoryError::PreconditionFailed(
                Precondition::NothingToCommit,
            ));
        }

        let mut snapshot = self
            .head()
            .map(|head| head.snapshot().clone())
            .unwrap_or_else(Snapshot::new);

        for name in self.staging().entries() {
            // a staged file may have been deleted since; it keeps its committed content
            if let Some(content) = self.working_tree().get(name) {
                snapshot.insert(name.to_string(), content.to_string());
            }
        }

        let id = self.allocate_commit_id();
        let parent = self.head().cloned();
        let commit = Rc::new(Commit::new(
            id,
            message.trim().to_string(),
            snapshot,
            parent,
        ));

        let branch = self.current_branch().clone();
        self.branches_mut().update(&branch, commit.clone())?;
        self.set_head(branch, Some(commit.clone()));
        self.staging_mut().clear();

        tracing::info!(
            branch = %self.current_branch(),
            commit = %commit.id(),
            files = commit.snapshot().len(),
            root = commit.is_root(),
            "commit"
        );

        Ok(commit)
    }
}
