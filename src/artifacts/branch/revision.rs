//! Revision expressions
//!
//! Commands that take a commit accept either `HEAD` (or its alias `@`) or a
//! commit identifier. Identifiers are resolved only against the ancestry of
//! the current HEAD; commits reachable solely from other branches are not
//! visible.

use crate::areas::repository::Repository;
use crate::artifacts::branch::{HEAD_REF_NAME, REF_ALIASES};
use crate::artifacts::objects::commit::CommitRef;
use crate::artifacts::objects::object_id::CommitId;
use crate::errors::{EntityKind, RepositoryError, RepositoryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    Commit(CommitId),
    /// Input that cannot name any commit; resolves to `NotFound`
    Unknown(String),
}

impl Revision {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = REF_ALIASES.get(input).copied().unwrap_or(input);

        if input == HEAD_REF_NAME {
            return Revision::Head;
        }

        match CommitId::try_parse(input) {
            Ok(id) => Revision::Commit(id),
            Err(_) => Revision::Unknown(input.to_string()),
        }
    }

    pub fn is_head(&self) -> bool {
        matches!(self, Revision::Head)
    }

    pub fn resolve<'r>(&self, repository: &'r Repository) -> RepositoryResult<&'r CommitRef> {
        match self {
            Revision::Head => repository
                .head()
                .ok_or(RepositoryError::InvalidState("no commits yet")),
            Revision::Commit(id) => repository
                .find_commit(id)
                .ok_or_else(|| RepositoryError::not_found(EntityKind::Commit, id.as_ref())),
            Revision::Unknown(input) => {
                Err(RepositoryError::not_found(EntityKind::Commit, input.as_str()))
            }
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Head => write!(f, "{}", HEAD_REF_NAME),
            Revision::Commit(id) => write!(f, "{}", id),
            Revision::Unknown(input) => write!(f, "{}", input),
        }
    }
}
