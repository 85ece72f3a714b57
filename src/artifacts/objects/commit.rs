//! Commit nodes
//!
//! A commit is an immutable node in the history. It owns a full snapshot of
//! every tracked file (not a delta against its parent) and points at its
//! parent, if any. Nodes are shared through [`Rc`], so two branches at the
//! same tip share one allocation, and so do all lineages with a common
//! ancestor.

use crate::artifacts::objects::object_id::CommitId;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Name → content mapping captured at commit time
pub type Snapshot = BTreeMap<String, String>;

/// Reference to a shared, immutable commit
pub type CommitRef = Rc<Commit>;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    snapshot: Snapshot,
    parent: Option<CommitRef>,
}

impl Commit {
    /// Create a new commit stamped with the current local time
    pub fn new(
        id: CommitId,
        message: String,
        snapshot: Snapshot,
        parent: Option<CommitRef>,
    ) -> Self {
        Self::new_with_timestamp(
            id,
            message,
            snapshot,
            parent,
            chrono::Local::now().fixed_offset(),
        )
    }

    pub fn new_with_timestamp(
        id: CommitId,
        message: String,
        snapshot: Snapshot,
        parent: Option<CommitRef>,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Commit {
            id,
            message,
            timestamp,
            snapshot,
            parent,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Timestamp with second precision, e.g. `2024-01-01 12:34:56`
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn parent(&self) -> Option<&CommitRef> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
