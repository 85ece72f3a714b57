use std::collections::BTreeSet;

/// Names selected for the next commit
///
/// Only names that exist in the working tree are ever inserted; the
/// repository checks that before calling [`StagingSet::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagingSet {
    entries: BTreeSet<String>,
}

impl StagingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already staged
    pub fn add(&mut self, name: &str) -> bool {
        self.entries.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
