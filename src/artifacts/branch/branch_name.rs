use crate::artifacts::branch::{FORBIDDEN_CHARACTERS_REGEX, HEAD_REF_NAME};
use crate::errors::{RepositoryError, RepositoryResult};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_BRANCH: &str = "main";

static FORBIDDEN_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FORBIDDEN_CHARACTERS_REGEX).expect("forbidden character pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> RepositoryResult<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name == HEAD_REF_NAME {
            Some("HEAD is reserved")
        } else if name.starts_with('.') || name.contains("/.") {
            Some("components cannot start with '.'")
        } else if name.contains("..") {
            Some("cannot contain '..'")
        } else if name.starts_with('/') || name.ends_with('/') {
            Some("cannot start or end with '/'")
        } else if name.ends_with(".lock") {
            Some("cannot end with '.lock'")
        } else if name.contains("@{") {
            Some("cannot contain '@{'")
        } else if FORBIDDEN_CHARACTERS.is_match(&name) {
            Some("contains whitespace, a control character or one of * : ? [ \\ ~ ^")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RepositoryError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
