use crate::areas::repository::Repository;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::{Precondition, RepositoryError};

/// Local state that would be lost by switching branches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictType {
    StagedChanges,
    UnstagedModifications(Vec<String>),
}

impl ConflictType {
    /// First conflict found, checking the staging set before the working tree
    ///
    /// Only files committed at HEAD are compared; untracked files and files
    /// deleted from the working tree do not block a switch.
    pub fn detect(repository: &Repository) -> Option<Self> {
        if !repository.staging().is_empty() {
            return Some(ConflictType::StagedChanges);
        }

        let head_snapshot = repository.head().map(|head| head.snapshot());
        let modified = Inspector::new(repository.working_tree(), head_snapshot).modified_files();

        if modified.is_empty() {
            None
        } else {
            Some(ConflictType::UnstagedModifications(modified))
        }
    }
}

impl From<ConflictType> for RepositoryError {
    fn from(conflict: ConflictType) -> Self {
        match conflict {
            ConflictType::StagedChanges => {
                RepositoryError::PreconditionFailed(Precondition::StagedChanges)
            }
            ConflictType::UnstagedModifications(files) => {
                RepositoryError::PreconditionFailed(Precondition::UnstagedModifications(files))
            }
        }
    }
}
