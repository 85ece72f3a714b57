use crate::areas::index::StagingSet;
use crate::areas::refs::BranchTable;
use crate::areas::workspace::WorkingTree;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::CommitRef;
use crate::artifacts::objects::object_id::CommitId;
use std::collections::HashSet;
use std::rc::Rc;

/// The whole mutable state of a repository
///
/// Operations live in `commands::porcelain` as `impl Repository` blocks. Each
/// checks all of its preconditions before mutating anything, and leaves
/// `head` equal to the current branch's tip when it returns.
#[derive(Debug)]
pub struct Repository {
    working_tree: WorkingTree,
    staging: StagingSet,
    branches: BranchTable,
    current_branch: BranchName,
    head: Option<CommitRef>,
    issued_ids: HashSet<CommitId>,
}

impl Repository {
    /// Empty repository on branch `main`
    pub fn new() -> Self {
        Self::with_default_branch(BranchName::default())
    }

    pub fn with_default_branch(branch: BranchName) -> Self {
        Repository {
            working_tree: WorkingTree::new(),
            staging: StagingSet::new(),
            branches: BranchTable::new(branch.clone()),
            current_branch: branch,
            head: None,
            issued_ids: HashSet::new(),
        }
    }

    pub fn working_tree(&self) -> &WorkingTree {
        &self.working_tree
    }

    pub(crate) fn working_tree_mut(&mut self) -> &mut WorkingTree {
        &mut self.working_tree
    }

    pub fn staging(&self) -> &StagingSet {
        &self.staging
    }

    pub(crate) fn staging_mut(&mut self) -> &mut StagingSet {
        &mut self.staging
    }

    pub fn branches(&self) -> &BranchTable {
        &self.branches
    }

    pub(crate) fn branches_mut(&mut self) -> &mut BranchTable {
        &mut self.branches
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn head(&self) -> Option<&CommitRef> {
        self.head.as_ref()
    }

    /// Point HEAD at `branch` and its tip
    pub(crate) fn set_head(&mut self, branch: BranchName, head: Option<CommitRef>) {
        self.current_branch = branch;
        self.head = head;
    }

    /// Walk the ancestry of HEAD looking for `id`
    ///
    /// Commits only reachable from other branches are not found.
    pub fn find_commit(&self, id: &CommitId) -> Option<&CommitRef> {
        std::iter::successors(self.head.as_ref(), |commit| commit.parent())
            .find(|commit| commit.id() == id)
    }

    /// Draw an identifier never handed out by this repository before
    pub(crate) fn allocate_commit_id(&mut self) -> CommitId {
        loop {
            let id = CommitId::random();
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }

    /// `head` is the very node the current branch points at
    pub fn is_consistent(&self) -> bool {
        let tip = self.branches.tip(&self.current_branch).ok().flatten();

        match (self.head.as_ref(), tip) {
            (None, None) => true,
            (Some(head), Some(tip)) => Rc::ptr_eq(head, tip),
            _ => false,
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
