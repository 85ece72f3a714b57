use crate::artifacts::objects::commit::Snapshot;
use bitflags::bitflags;
use std::collections::BTreeMap;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const REMOVED = 0b0010;
        const MODIFIED = 0b0100;
    }
}

impl DiffFilter {
    /// Parse a filter such as `AM`; `D` is accepted as a synonym of `R`
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'A' => filter |= Self::ADDED,
                'R' | 'D' => filter |= Self::REMOVED,
                'M' => filter |= Self::MODIFIED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChangeType<'a> {
    Added(&'a str),
    Removed(&'a str),
    Modified { old: &'a str, new: &'a str },
}

impl<'a> TreeChangeType<'a> {
    pub fn from_entries(old: Option<&'a String>, new: Option<&'a String>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(TreeChangeType::Added(new)),
            (Some(old), None) => Some(TreeChangeType::Removed(old)),
            (Some(old), Some(new)) if old != new => Some(TreeChangeType::Modified { old, new }),
            _ => None, // No change or both are None
        }
    }

    pub fn matches_filter(&self, filter: DiffFilter) -> bool {
        match self {
            TreeChangeType::Added(_) => filter.contains(DiffFilter::ADDED),
            TreeChangeType::Removed(_) => filter.contains(DiffFilter::REMOVED),
            TreeChangeType::Modified { .. } => filter.contains(DiffFilter::MODIFIED),
        }
    }
}

/// Whole-content comparison of two snapshots, keyed by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff<'a> {
    changes: BTreeMap<&'a str, TreeChangeType<'a>>,
}

impl<'a> SnapshotDiff<'a> {
    pub fn between(a: &'a Snapshot, b: &'a Snapshot) -> Self {
        let changes = a
            .keys()
            .chain(b.keys().filter(|name| !a.contains_key(*name)))
            .filter_map(|name| {
                TreeChangeType::from_entries(a.get(name), b.get(name))
                    .map(|change| (name.as_str(), change))
            })
            .collect();

        SnapshotDiff { changes }
    }

    /// Keep only the categories selected by `filter`
    pub fn filtered(self, filter: DiffFilter) -> Self {
        let changes = self
            .changes
            .into_iter()
            .filter(|(_, change)| change.matches_filter(filter))
            .collect();

        SnapshotDiff { changes }
    }

    pub fn changes(&self) -> impl Iterator<Item = (&'a str, &TreeChangeType<'a>)> {
        self.changes.iter().map(|(name, change)| (*name, change))
    }

    pub fn added(&self) -> Vec<&'a str> {
        self.names_matching(DiffFilter::ADDED)
    }

    pub fn removed(&self) -> Vec<&'a str> {
        self.names_matching(DiffFilter::REMOVED)
    }

    pub fn modified(&self) -> Vec<&'a str> {
        self.names_matching(DiffFilter::MODIFIED)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn names_matching(&self, filter: DiffFilter) -> Vec<&'a str> {
        self.changes
            .iter()
            .filter(|(_, change)| change.matches_filter(filter))
            .map(|(name, _)| *name)
            .collect()
    }
}
