//! Commit objects
//!
//! - `commit`: immutable history nodes and their snapshots
//! - `object_id`: random short commit identifiers

pub mod commit;
pub mod object_id;

/// Number of characters in a commit identifier
pub const COMMIT_ID_LENGTH: usize = 7;
