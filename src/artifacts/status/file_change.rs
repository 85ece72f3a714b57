use colored::Colorize;

const LABEL_WIDTH: usize = 4;

/// How a working tree file relates to HEAD and the staging set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChangeType {
    Staged,
    Modified,
    Untracked,
}

impl FileChangeType {
    pub fn heading(&self) -> &'static str {
        match self {
            FileChangeType::Staged => "=== Staged Files ===",
            FileChangeType::Modified => "=== Modified Files ===",
            FileChangeType::Untracked => "=== Untracked Files ===",
        }
    }
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Staged => "A",
            FileChangeType::Modified => "M",
            FileChangeType::Untracked => "??",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = match self {
            FileChangeType::Staged => label.green(),
            FileChangeType::Modified | FileChangeType::Untracked => label.red(),
        };
        write!(
            f,
            "{:>width$}{}",
            "",
            colored_label,
            width = LABEL_WIDTH.saturating_sub(label.len())
        )
    }
}
