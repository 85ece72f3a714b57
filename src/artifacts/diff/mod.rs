//! Snapshot comparison
//!
//! - `tree_diff`: which files were added, removed or modified
//! - `content_diff`: old and new text of modified files
//!
//! Files are compared by whole-content equality; there is no line diff.

pub mod content_diff;
pub mod tree_diff;
