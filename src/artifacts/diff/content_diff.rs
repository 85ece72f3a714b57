use crate::artifacts::diff::tree_diff::{SnapshotDiff, TreeChangeType};

/// Full old and new content of a file modified between two snapshots
///
/// There is no line-level granularity: the whole text of both sides is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange<'a> {
    pub name: &'a str,
    pub old: &'a str,
    pub new: &'a str,
}

impl<'a> ContentChange<'a> {
    /// Content changes for every modified file, in name order
    pub fn collect_from(diff: &SnapshotDiff<'a>) -> Vec<Self> {
        diff.changes()
            .filter_map(|(name, change)| match *change {
                TreeChangeType::Modified { old, new } => Some(ContentChange { name, old, new }),
                TreeChangeType::Added(_) | TreeChangeType::Removed(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit::Snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_modified_files_carry_content() {
        let a = Snapshot::from([
            ("f".to_string(), "a".to_string()),
            ("gone".to_string(), "x".to_string()),
        ]);
        let b = Snapshot::from([
            ("f".to_string(), "b".to_string()),
            ("fresh".to_string(), "y".to_string()),
        ]);
        let diff = SnapshotDiff::between(&a, &b);

        assert_eq!(
            ContentChange::collect_from(&diff),
            vec![ContentChange {
                name: "f",
                old: "a",
                new: "b"
            }]
        );
    }
}
