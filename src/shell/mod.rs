//! Line-oriented command loop
//!
//! The shell reads one command per line, applies it to its [`Repository`]
//! and writes the response. Commands that take file content keep reading
//! from the same input until the end marker. Repository errors and lines that
//! are not valid UTF-8 are reported and the loop carries on; only I/O failures
//! end it early.

pub mod command;
pub mod render;

use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::content::{END_MARKER, collect_content, is_end_marker};
use crate::errors::RepositoryError;
use crate::shell::command::{ParseFailure, ShellCommand};
use anyhow::Context;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::string::FromUtf8Error;

const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellOptions {
    /// Print the prompt before each command
    pub prompt: bool,
    /// Print the greeting before the first command
    pub banner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One read from the input, without its line terminator
#[derive(Debug)]
enum Input {
    Line(String),
    Undecodable(FromUtf8Error),
    Eof,
}

pub struct Shell<R: BufRead, W: Write> {
    repository: Repository,
    input: R,
    out: W,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(repository: Repository, input: R, out: W, options: ShellOptions) -> Self {
        Shell {
            repository,
            input,
            out,
            options,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn into_repository(self) -> Repository {
        self.repository
    }

    /// Run until `exit` or the end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.options.banner {
            render::banner(&mut self.out, self.repository.current_branch())?;
        }

        loop {
            if self.options.prompt {
                write!(self.out, "{}", PROMPT)?;
                self.out.flush()?;
            }

            let line = match self.next_input()? {
                Input::Line(line) => line,
                Input::Undecodable(error) => {
                    self.report_undecodable(error)?;
                    continue;
                }
                Input::Eof => break,
            };

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn next_input(&mut self) -> anyhow::Result<Input> {
        let mut buffer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buffer)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(Input::Eof);
        }

        if buffer.ends_with(b"\n") {
            buffer.pop();
            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }

        Ok(match String::from_utf8(buffer) {
            Ok(line) => Input::Line(line),
            Err(error) => Input::Undecodable(error),
        })
    }

    /// Lines of file content up to the end marker
    ///
    /// An undecodable line is reported and left out; entry still runs until
    /// the marker so none of the content is taken for commands.
    fn read_content(&mut self) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::new();

        loop {
            match self.next_input()? {
                Input::Line(line) if is_end_marker(&line) => break,
                Input::Line(line) => lines.push(line),
                Input::Undecodable(error) => self.report_undecodable(error)?,
                Input::Eof => break,
            }
        }

        Ok(lines)
    }

    fn report_undecodable(&mut self, error: FromUtf8Error) -> anyhow::Result<()> {
        tracing::warn!(error = %error.utf8_error(), "skipped input line");
        writeln!(
            self.out,
            "{} skipped a line that is not valid UTF-8",
            "error:".red().bold()
        )?;

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellCommand::parse(line) {
            Ok(command) => command,
            Err(failure) => {
                self.report_parse_failure(failure)?;
                return Ok(Flow::Continue);
            }
        };
        tracing::trace!(?command, "parsed");

        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(error) => match error.downcast::<RepositoryError>() {
                Ok(error) => {
                    tracing::warn!(kind = ?error.kind(), %error, "command rejected");
                    writeln!(self.out, "{} {}", "error:".red().bold(), error)?;
                    Ok(Flow::Continue)
                }
                Err(error) => Err(error),
            },
        }
    }

    fn report_parse_failure(&mut self, failure: ParseFailure) -> anyhow::Result<()> {
        match failure {
            ParseFailure::Unknown => writeln!(
                self.out,
                "Unknown command. Type 'help' to see list of commands."
            )?,
            ParseFailure::Usage(usage) => writeln!(self.out, "Usage: {}", usage)?,
            ParseFailure::Invalid(message) => {
                writeln!(self.out, "{} {}", "error:".red().bold(), message)?
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: ShellCommand) -> anyhow::Result<Flow> {
        match command {
            ShellCommand::Write { name } => {
                writeln!(
                    self.out,
                    "Enter content for {} (type {} on a new line to finish):",
                    name, END_MARKER
                )?;
                let content = collect_content(self.read_content()?);
                self.repository.write(&name, content);
                writeln!(self.out, "Written to {}", name)?;
            }
            ShellCommand::Read { name } => {
                let content = self.repository.read(&name)?;
                render::file(&mut self.out, &name, content)?;
            }
            ShellCommand::Edit { name } => {
                self.show_existing(&name)?;
                writeln!(
                    self.out,
                    "Enter new content (type {} on a new line to finish):",
                    END_MARKER
                )?;
                let lines = self.read_content()?;
                self.repository.edit(&name, lines)?;
                writeln!(self.out, "Updated content in {}", name)?;
            }
            ShellCommand::Append { name } => {
                self.show_existing(&name)?;
                writeln!(
                    self.out,
                    "Enter content to append (type {} on a new line to finish):",
                    END_MARKER
                )?;
                let lines = self.read_content()?;
                self.repository.append(&name, lines)?;
                writeln!(self.out, "Appended content to {}", name)?;
            }
            ShellCommand::Delete { name } => {
                self.repository.delete(&name)?;
                writeln!(self.out, "Deleted file: {}", name)?;
            }
            ShellCommand::Add { name } => {
                self.repository.stage(&name)?;
                writeln!(self.out, "Staged: {}", name)?;
            }
            ShellCommand::Commit { message } => {
                let commit = self.repository.commit(&message)?;
                render::commit_created(&mut self.out, self.repository.current_branch(), &commit)?;
            }
            ShellCommand::Log => {
                let commits = self.repository.log();
                render::log(
                    &mut self.out,
                    commits.iter().map(|commit| commit.as_ref()),
                    &self.repository.branches().reverse_refs(),
                )?;
            }
            ShellCommand::Status { short } => {
                render::status(&mut self.out, &self.repository.status(), short)?;
            }
            ShellCommand::Checkout { target } => {
                let commit = self.repository.checkout(&target)?;
                if Revision::parse(&target).is_head() {
                    writeln!(self.out, "Checked out to HEAD (latest commit).")?;
                } else {
                    writeln!(self.out, "Checked out to commit {}", commit.id())?;
                }
            }
            ShellCommand::Branch { name } => {
                let tip = self.repository.branch(&name)?;
                writeln!(
                    self.out,
                    "Branch '{}' created at commit {}",
                    name,
                    tip.id().to_string().yellow()
                )?;
            }
            ShellCommand::Switch { name } => {
                self.repository.switch_branch(&name)?;
                writeln!(
                    self.out,
                    "Switched to branch '{}'.",
                    self.repository.current_branch()
                )?;
            }
            ShellCommand::ListBranches => {
                render::branches(&mut self.out, &self.repository.list_branches())?;
            }
            ShellCommand::Diff { a, b, filter } => {
                let diff = self
                    .repository
                    .diff(&a, &b)?
                    .filtered(filter.unwrap_or_default());
                render::tree_diff(&mut self.out, &diff)?;
            }
            ShellCommand::DiffContent { a, b } => {
                let changes = self.repository.diff_content(&a, &b)?;
                render::content_diff(&mut self.out, &changes)?;
            }
            ShellCommand::Show { target } => {
                let commit = self.repository.show(&target)?;
                render::commit_snapshot(&mut self.out, commit)?;
            }
            ShellCommand::ShowWorking => {
                render::working_tree(&mut self.out, self.repository.working_tree())?;
            }
            ShellCommand::Help => render::help(&mut self.out)?,
            ShellCommand::Exit => {
                writeln!(self.out, "Exiting MiniGit...")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn show_existing(&mut self, name: &str) -> anyhow::Result<()> {
        let content = self.repository.read(name)?;
        writeln!(self.out, "Existing content:")?;
        writeln!(self.out, "{}", content)?;
        writeln!(self.out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run_script(script: &str) -> (Repository, String) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(input: &[u8]) -> (Repository, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut shell = Shell::new(Repository::new(), input, &mut out, ShellOptions::default());
        shell.run().unwrap();
        let repository = shell.into_repository();

        (repository, String::from_utf8(out).unwrap())
    }

    #[test]
    fn write_reads_content_until_end() {
        let (repository, output) = run_script("write a.txt\nline one\nline two\nEND\nread a.txt\n");

        assert_eq!(repository.read("a.txt").unwrap(), "line one\nline two");
        assert!(output.contains("Written to a.txt\n"));
        assert!(output.contains("=== a.txt ===\nline one\nline two\n"));
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let (repository, output) = run_script("read missing\nwrite b\nx\nend\n");

        assert!(output.contains("error: file 'missing' not found\n"));
        assert_eq!(repository.read("b").unwrap(), "x");
    }

    #[test]
    fn edit_of_missing_file_does_not_swallow_commands() {
        let (repository, output) = run_script("edit nope\nwrite c\nz\nEND\n");

        assert!(output.contains("error: file 'nope' not found\n"));
        assert_eq!(repository.read("c").unwrap(), "z");
    }

    #[test]
    fn commit_uses_the_rest_of_the_line() {
        let (repository, output) = run_script("write f\na\nEND\nadd f\ncommit  first   commit \n");

        let head = repository.head().unwrap();
        assert_eq!(head.message(), "first   commit");
        assert!(output.contains(&format!("[main] Commit {}\n", head.id())));
    }

    #[test]
    fn names_keep_spaces_and_leading_dashes() {
        let (repository, output) =
            run_script("write my notes.txt\nhi\nEND\nwrite -x\ndash\nEND\nadd -x\n");

        assert_eq!(repository.read("my notes.txt").unwrap(), "hi");
        assert_eq!(repository.read("-x").unwrap(), "dash");
        assert!(output.contains("Staged: -x\n"));
    }

    #[test]
    fn undecodable_content_line_stays_inside_the_block() {
        let (repository, output) = run_bytes(b"write f\nabc\n\xff\ndelete f\nEND\n");

        assert_eq!(repository.read("f").unwrap(), "abc\ndelete f");
        assert!(output.contains("error: skipped a line that is not valid UTF-8\n"));
        assert!(!output.contains("Deleted file"));
        assert!(!output.contains("Unknown command"));
    }

    #[test]
    fn undecodable_command_line_is_skipped() {
        let (repository, output) = run_bytes(b"\xff\nwrite f\nx\nEND\n");

        assert!(output.starts_with("error: skipped a line that is not valid UTF-8\n"));
        assert_eq!(repository.read("f").unwrap(), "x");
    }

    #[test]
    fn append_skips_undecodable_lines() {
        let (repository, _) = run_bytes(b"write f\na\nEND\nappend f\nb\xfe\nc\r\nEND\n");
        assert_eq!(repository.read("f").unwrap(), "a\nc");
    }

    #[test]
    fn exit_stops_reading() {
        let (repository, output) = run_script("exit\nwrite never\nEND\n");

        assert!(output.ends_with("Exiting MiniGit...\n"));
        assert!(repository.working_tree().is_empty());
    }

    #[rstest]
    #[case("frobnicate\n", "Unknown command. Type 'help' to see list of commands.\n")]
    #[case("add\n", "Usage: add <filename>\n")]
    #[case("diff one\n", "Usage: diff <c1> <c2> [--filter ARM]\n")]
    fn malformed_lines(#[case] script: &str, #[case] expected: &str) {
        let (_, output) = run_script(script);
        assert_eq!(output, expected);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (_, output) = run_script("\n   \n\t\n");
        assert_eq!(output, "");
    }

    #[test]
    fn prompt_and_banner() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let options = ShellOptions {
            prompt: true,
            banner: true,
        };

        Shell::new(Repository::new(), "exit\n".as_bytes(), &mut out, options)
            .run()
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Initialized empty MiniGit repository on branch 'main'.\n"));
        assert!(output.ends_with("> Exiting MiniGit...\n"));
    }
}
