//! Core repository components
//!
//! This module contains the state a repository is made of:
//!
//! - `index`: Staging set of names selected for the next commit
//! - `refs`: Branch table mapping branch names to their tip commits
//! - `repository`: The aggregate holding all state, plus HEAD
//! - `workspace`: Working tree of editable files

pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
