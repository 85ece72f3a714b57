//! Checkout and branch switch support
//!
//! - `conflict`: local changes that block a branch switch
//! - `migration`: repopulating the working tree from a snapshot
//!
//! All conflicts are detected before the working tree is touched.

pub mod conflict;
pub mod migration;
