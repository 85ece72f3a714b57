use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusInfo};

// Terminology:
// - staged files: files selected for the next commit
// - modified files: files committed at HEAD whose working tree content differs
// - untracked files: files not present in the HEAD snapshot
// A file committed at HEAD but deleted from the working tree is not reported.
impl Repository {
    pub fn status(&self) -> StatusInfo {
        Status::new(self).initialize()
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::repository::Repository;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn committed() -> Repository {
        let mut repository = Repository::new();
        repository.write("a.txt", "a");
        repository.write("b.txt", "b");
        repository.stage("a.txt").unwrap();
        repository.stage("b.txt").unwrap();
        repository.commit("initial").unwrap();
        repository
    }

    #[test]
    fn everything_is_untracked_before_the_first_commit() {
        let mut repository = Repository::new();
        repository.write("b.txt", "b");
        repository.write("a.txt", "a");
        repository.write("c.txt", "c");
        repository.stage("c.txt").unwrap();

        let status = repository.status();

        assert_eq!(status.staged, vec!["c.txt"]);
        assert!(status.modified.is_empty());
        assert_eq!(status.untracked, vec!["a.txt", "b.txt"]);
    }

    #[rstest]
    fn clean_after_commit(committed: Repository) {
        assert!(committed.status().is_clean());
    }

    #[rstest]
    fn reports_modified_and_untracked(mut committed: Repository) {
        committed.write("a.txt", "changed");
        committed.write("new.txt", "new");

        let status = committed.status();

        assert!(status.staged.is_empty());
        assert_eq!(status.modified, vec!["a.txt"]);
        assert_eq!(status.untracked, vec!["new.txt"]);
    }

    #[rstest]
    fn staged_files_are_reported_only_as_staged(mut committed: Repository) {
        committed.write("a.txt", "changed");
        committed.write("new.txt", "new");
        committed.stage("a.txt").unwrap();
        committed.stage("new.txt").unwrap();

        let status = committed.status();

        assert_eq!(status.staged, vec!["a.txt", "new.txt"]);
        assert!(status.modified.is_empty());
        assert!(status.untracked.is_empty());
    }

    #[rstest]
    fn deleted_committed_file_is_not_reported(mut committed: Repository) {
        committed.delete("a.txt").unwrap();

        let status = committed.status();

        assert!(status.is_clean());
        assert!(!status.changeset().contains_key("a.txt"));
    }
}
