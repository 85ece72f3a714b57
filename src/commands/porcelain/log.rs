use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::CommitRef;

impl Repository {
    /// History from HEAD back to the root, newest first
    ///
    /// Empty when there are no commits yet.
    pub fn log(&self) -> Vec<CommitRef> {
        RevList::new(self.head().cloned()).collect()
    }
}
