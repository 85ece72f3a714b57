use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::CommitRef;
use crate::errors::RepositoryResult;

impl Repository {
    /// Repopulate the working tree from HEAD or one of its ancestors
    ///
    /// Unlike [`Repository::switch_branch`], this never moves HEAD or any
    /// branch: only the working tree and staging set change. Local edits are
    /// discarded without warning.
    pub fn checkout(&mut self, target: &str) -> RepositoryResult<CommitRef> {
        let revision = Revision::parse(target);
        let commit = revision.resolve(self)?.clone();

        let files = Migration::new(self, Some(&commit)).apply_changes();
        tracing::info!(
            target = %revision,
            commit = %commit.id(),
            files,
            "checkout"
        );

        Ok(commit)
    }
}
