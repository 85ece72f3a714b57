//! Working tree status inspection
//!
//! This module compares the working tree with the HEAD snapshot and the
//! staging set.
//!
//! ## Components
//!
//! - `file_change`: Categories of reported changes
//! - `inspector`: Per-file comparison against HEAD
//! - `status_info`: Status aggregation

pub mod file_change;
pub mod inspector;
pub mod status_info;
