//! Commit identifiers
//!
//! Identifiers are short random tokens with no relation to the content they
//! name. They are only unique within a single repository's lifetime, which
//! the repository enforces by drawing again on collision.
//!
//! ## Format
//!
//! [`COMMIT_ID_LENGTH`] lowercase hexadecimal characters (e.g. `3f9a0c1`).

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdef";

/// Opaque commit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Draw a fresh random identifier
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..COMMIT_ID_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect::<String>();

        Self(token)
    }

    /// Parse user input that may name a commit
    ///
    /// Anything of the right length over the identifier alphabet is accepted;
    /// whether it names an existing commit is decided by the repository.
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("invalid commit id length: {}", id.len());
        }
        if !id.bytes().all(|b| ALPHABET.contains(&b.to_ascii_lowercase())) {
            anyhow::bail!("invalid commit id characters: {}", id);
        }

        Ok(Self(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
