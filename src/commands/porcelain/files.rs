use crate::areas::repository::Repository;
use crate::artifacts::content::collect_content;
use crate::errors::RepositoryResult;

// Working tree edits never touch the staging set or history.
impl Repository {
    pub fn write(&mut self, name: &str, content: impl Into<String>) {
        let content = content.into();
        tracing::debug!(file = name, bytes = content.len(), "write");

        self.working_tree_mut().write(name, content);
    }

    pub fn read(&self, name: &str) -> RepositoryResult<&str> {
        self.working_tree().read(name)
    }

    /// Replace the content of an existing file with lines from `lines`
    ///
    /// Nothing is consumed from `lines` when the file does not exist.
    pub fn edit<I, S>(&mut self, name: &str, lines: I) -> RepositoryResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.working_tree().read(name)?;

        let content = collect_content(lines);
        tracing::debug!(file = name, bytes = content.len(), "edit");
        self.working_tree_mut().write(name, content);

        Ok(())
    }

    /// Append lines from `lines` to an existing file, after a newline
    pub fn append<I, S>(&mut self, name: &str, lines: I) -> RepositoryResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let old_content = self.working_tree().read(name)?.to_string();

        let addition = collect_content(lines);
        tracing::debug!(file = name, bytes = addition.len(), "append");
        self.working_tree_mut()
            .write(name, format!("{}\n{}", old_content, addition));

        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> RepositoryResult<()> {
        self.working_tree_mut().remove(name)?;
        tracing::debug!(file = name, "delete");

        Ok(())
    }
}
