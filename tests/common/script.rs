/// Builder for shell input, one command per line
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// `write` followed by the content lines and the end marker
    pub fn write(self, name: &str, content: &str) -> Self {
        self.with_content(format!("write {}", name), content)
    }

    pub fn edit(self, name: &str, content: &str) -> Self {
        self.with_content(format!("edit {}", name), content)
    }

    pub fn append(self, name: &str, content: &str) -> Self {
        self.with_content(format!("append {}", name), content)
    }

    pub fn add(self, name: &str) -> Self {
        self.line(format!("add {}", name))
    }

    pub fn commit(self, message: &str) -> Self {
        self.line(format!("commit {}", message))
    }

    /// `write`, `add` and `commit` in one go
    pub fn commit_file(self, name: &str, content: &str, message: &str) -> Self {
        self.write(name, content).add(name).commit(message)
    }

    fn with_content(mut self, command: String, content: &str) -> Self {
        self.lines.push(command);
        self.lines.extend(content.lines().map(str::to_string));
        self.lines.push("END".to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut script = self.lines.join("\n");
        script.push('\n');
        script
    }
}
