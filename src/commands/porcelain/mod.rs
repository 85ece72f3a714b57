//! Repository operations
//!
//! Each file adds one group of operations to [`Repository`] as an inherent
//! `impl` block. Operations validate everything they need before touching
//! state, so a failed call leaves the repository as it was.
//!
//! ## Operations
//!
//! - `files`: write, read, edit, append and delete working files
//! - `add`: stage a file for the next commit
//! - `commit`: snapshot HEAD plus the staged files
//! - `status`: staged, modified and untracked files
//! - `log`: history of the current branch, newest first
//! - `checkout`: reload HEAD or one of its ancestors into the working tree
//! - `branch`: create and list branches
//! - `switch`: change the current branch
//! - `diff`: compare two commits by name or by content
//! - `show`: look up a single commit
//!
//! [`Repository`]: crate::areas::repository::Repository

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod files;
pub mod log;
pub mod show;
pub mod status;
pub mod switch;
