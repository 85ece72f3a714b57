//! An in-memory simulator of a version-control workflow.
//!
//! A [`Repository`] holds a working tree of named text files, a staging set,
//! a history of snapshot commits and named branches. Everything lives in
//! memory and disappears with the process. The [`shell`] module drives a
//! repository from line-oriented commands.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod shell;
pub mod telemetry;

pub use areas::repository::Repository;
pub use errors::{ErrorKind, RepositoryError, RepositoryResult};
