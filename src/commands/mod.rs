//! Command implementations
//!
//! `porcelain` holds the user-facing operations on a repository. The
//! interactive verbs that drive them live in [`crate::shell`].

pub mod porcelain;
