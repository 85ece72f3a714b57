//! Commit history traversal
//!
//! - `rev_list`: walk from a commit to the root along parent links
//!
//! History is a tree (no merge commits), so the walk from any commit is a
//! single path and needs no ordering or deduplication.

pub mod rev_list;
