use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::CommitRef;
use crate::errors::{EntityKind, RepositoryError, RepositoryResult};

/// One row of the branch listing
#[derive(Debug, Clone)]
pub struct BranchListing {
    pub name: BranchName,
    pub tip: Option<CommitRef>,
    pub is_current: bool,
}

impl Repository {
    /// Create a branch at HEAD without switching to it
    pub fn branch(&mut self, name: &str) -> RepositoryResult<CommitRef> {
        let branch_name = BranchName::try_parse(name)?;

        if self.branches().contains(&branch_name) {
            return Err(RepositoryError::AlreadyExists {
                kind: EntityKind::Branch,
                name: branch_name.to_string(),
            });
        }

        let head = self
            .head()
            .cloned()
            .ok_or(RepositoryError::InvalidState(
                "no commits yet, cannot create a branch",
            ))?;

        self.branches_mut().create(branch_name.clone(), head.clone())?;
        tracing::info!(branch = %branch_name, commit = %head.id(), "branch created");

        Ok(head)
    }

    /// All branches in name order, with the current one marked
    pub fn list_branches(&self) -> Vec<BranchListing> {
        self.branches()
            .iter()
            .map(|(name, tip)| BranchListing {
                name: name.clone(),
                tip: tip.cloned(),
                is_current: name == self.current_branch(),
            })
            .collect()
    }
}
