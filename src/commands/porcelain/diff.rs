use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::diff::content_diff::ContentChange;
use crate::artifacts::diff::tree_diff::SnapshotDiff;
use crate::artifacts::objects::commit::CommitRef;
use crate::errors::RepositoryResult;

impl Repository {
    /// Added, removed and modified files going from `a` to `b`
    ///
    /// Both sides are looked up among HEAD's ancestors only.
    pub fn diff(&self, a: &str, b: &str) -> RepositoryResult<SnapshotDiff<'_>> {
        let (a, b) = self.resolve_pair(a, b)?;
        Ok(SnapshotDiff::between(a.snapshot(), b.snapshot()))
    }

    /// Old and new text of every file modified going from `a` to `b`
    pub fn diff_content(&self, a: &str, b: &str) -> RepositoryResult<Vec<ContentChange<'_>>> {
        Ok(ContentChange::collect_from(&self.diff(a, b)?))
    }

    fn resolve_pair(&self, a: &str, b: &str) -> RepositoryResult<(&CommitRef, &CommitRef)> {
        let a = Revision::parse(a).resolve(self)?;
        let b = Revision::parse(b).resolve(self)?;
        tracing::debug!(a = %a.id(), b = %b.id(), "diff");

        Ok((a, b))
    }
}
