//! Repository error taxonomy
//!
//! Every core operation either applies its whole transition or fails with one
//! of these errors and leaves the repository untouched. Callers that only care
//! about the broad category can use [`RepositoryError::kind`].

use thiserror::Error;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    File,
    Commit,
    Branch,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::File => "file",
            EntityKind::Commit => "commit",
            EntityKind::Branch => "branch",
        };
        write!(f, "{}", name)
    }
}

/// A precondition that did not hold when an operation was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    NothingToCommit,
    StagedChanges,
    UnstagedModifications(Vec<String>),
}

impl std::fmt::Display for Precondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precondition::NothingToCommit => {
                write!(f, "nothing to commit, staging area is empty")
            }
            Precondition::StagedChanges => write!(
                f,
                "you have staged changes; commit them before switching branches"
            ),
            Precondition::UnstagedModifications(files) => write!(
                f,
                "you have unstaged modifications in {}; commit or discard them before switching branches",
                files.join(", ")
            ),
        }
    }
}

/// Broad failure category shared by all operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PreconditionFailed,
    InvalidState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: EntityKind, name: String },

    #[error("{0}")]
    PreconditionFailed(Precondition),

    #[error("{0}")]
    InvalidState(&'static str),

    #[error("invalid branch name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
}

impl RepositoryError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::NotFound { .. } => ErrorKind::NotFound,
            RepositoryError::AlreadyExists { .. }
            | RepositoryError::PreconditionFailed(_)
            | RepositoryError::InvalidName { .. } => ErrorKind::PreconditionFailed,
            RepositoryError::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
