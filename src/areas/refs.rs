//! Branch table
//!
//! Maps each branch name to the commit at its tip. A branch created before
//! any commit exists (only the initial branch can be in that state) has no
//! tip. Branches are never deleted.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::CommitRef;
use crate::artifacts::objects::object_id::CommitId;
use crate::errors::{EntityKind, RepositoryError, RepositoryResult};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone)]
pub struct BranchTable {
    branches: BTreeMap<BranchName, Option<CommitRef>>,
}

impl BranchTable {
    /// Table holding a single branch with no history
    pub fn new(initial: BranchName) -> Self {
        BranchTable {
            branches: BTreeMap::from([(initial, None)]),
        }
    }

    pub fn contains(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    /// Tip of the branch, `Ok(None)` if it has no commits yet
    pub fn tip(&self, name: &BranchName) -> RepositoryResult<Option<&CommitRef>> {
        self.branches
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Branch, name.as_ref()))
    }

    /// Add a new branch at `tip`
    pub fn create(&mut self, name: BranchName, tip: CommitRef) -> RepositoryResult<()> {
        if self.contains(&name) {
            return Err(RepositoryError::AlreadyExists {
                kind: EntityKind::Branch,
                name: name.to_string(),
            });
        }

        self.branches.insert(name, Some(tip));
        Ok(())
    }

    /// Move an existing branch to `tip`
    pub fn update(&mut self, name: &BranchName, tip: CommitRef) -> RepositoryResult<()> {
        let slot = self
            .branches
            .get_mut(name)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Branch, name.as_ref()))?;
        *slot = Some(tip);

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BranchName, Option<&CommitRef>)> {
        self.branches.iter().map(|(name, tip)| (name, tip.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Branch names grouped by the commit they point at
    pub fn reverse_refs(&self) -> HashMap<CommitId, Vec<BranchName>> {
        let mut reverse_refs = HashMap::<CommitId, Vec<BranchName>>::new();

        for (name, tip) in self.iter() {
            if let Some(tip) = tip {
                reverse_refs
                    .entry(tip.id().clone())
                    .or_default()
                    .push(name.clone());
            }
        }

        reverse_refs
    }
}
