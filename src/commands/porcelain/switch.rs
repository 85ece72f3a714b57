use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::conflict::ConflictType;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::CommitRef;
use crate::errors::{EntityKind, RepositoryError, RepositoryResult};

impl Repository {
    /// Make `name` the current branch and load its tip into the working tree
    ///
    /// Refuses while anything is staged or while a file committed at HEAD has
    /// been modified. Untracked files are discarded by the switch.
    pub fn switch_branch(&mut self, name: &str) -> RepositoryResult<Option<CommitRef>> {
        let branch_name = BranchName::try_parse(name)
            .map_err(|_| RepositoryError::not_found(EntityKind::Branch, name))?;
        let tip = self.branches().tip(&branch_name)?.cloned();

        if let Some(conflict) = ConflictType::detect(self) {
            tracing::debug!(branch = %branch_name, ?conflict, "switch refused");
            return Err(conflict.into());
        }

        let previous = self.current_branch().clone();
        self.set_head(branch_name, tip.clone());
        let files = Migration::new(self, tip.as_ref()).apply_changes();

        tracing::info!(
            from = %previous,
            to = %self.current_branch(),
            files,
            "switched branch"
        );

        Ok(tip)
    }
}
