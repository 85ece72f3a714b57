use crate::areas::repository::Repository;
use crate::errors::{EntityKind, RepositoryError, RepositoryResult};

impl Repository {
    /// Mark a working tree file for the next commit
    ///
    /// Returns `false` if it was already staged.
    pub fn stage(&mut self, name: &str) -> RepositoryResult<bool> {
        if !self.working_tree().contains(name) {
            return Err(RepositoryError::not_found(EntityKind::File, name));
        }

        let added = self.staging_mut().add(name);
        tracing::debug!(file = name, added, "stage");

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::repository::Repository;
    use crate::errors::ErrorKind;

    #[test]
    fn staging_requires_the_file() {
        let mut repository = Repository::new();
        let error = repository.stage("ghost.txt").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(repository.staging().is_empty());
    }

    #[test]
    fn staging_twice_keeps_one_entry() {
        let mut repository = Repository::new();
        repository.write("a.txt", "a");

        assert!(repository.stage("a.txt").unwrap());
        assert!(!repository.stage("a.txt").unwrap());
        assert_eq!(repository.staging().len(), 1);
    }
}
