use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::commit::CommitRef;
use crate::errors::RepositoryResult;

impl Repository {
    /// The commit named by `target`, searched along HEAD's ancestry
    pub fn show(&self, target: &str) -> RepositoryResult<&CommitRef> {
        let commit = Revision::parse(target).resolve(self)?;
        tracing::debug!(commit = %commit.id(), files = commit.snapshot().len(), "show");

        Ok(commit)
    }
}
