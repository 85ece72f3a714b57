use crate::artifacts::objects::commit::CommitRef;
use derive_new::new;

/// Newest-first walk along parent links
#[derive(Debug, Clone, new)]
pub struct RevList {
    current: Option<CommitRef>,
}

impl Iterator for RevList {
    type Item = CommitRef;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.current.take()?;
        // Move to the parent commit for the next iteration
        self.current = commit.parent().cloned();
        Some(commit)
    }
}
