use crate::artifacts::objects::commit::Snapshot;
use crate::errors::{EntityKind, RepositoryError, RepositoryResult};
use std::collections::BTreeMap;

/// The user's editable files, name → content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTree {
    files: BTreeMap<String, String>,
}

impl WorkingTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn read(&self, name: &str) -> RepositoryResult<&str> {
        self.get(name)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::File, name))
    }

    /// Create or fully replace a file
    pub fn write(&mut self, name: &str, content: String) {
        self.files.insert(name.to_string(), content);
    }

    pub fn remove(&mut self, name: &str) -> RepositoryResult<String> {
        self.files
            .remove(name)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::File, name))
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replace every file with an owned copy of the snapshot
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.files = snapshot.clone();
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
