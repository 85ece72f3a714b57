//! Repository data structures and algorithms
//!
//! - `branch`: Branch names and revision parsing
//! - `checkout`: Branch switch conflicts and working tree migration
//! - `content`: Multi-line content entry
//! - `diff`: Snapshot comparison
//! - `log`: Commit history traversal
//! - `objects`: Commits and their identifiers
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod content;
pub mod diff;
pub mod log;
pub mod objects;
pub mod status;
