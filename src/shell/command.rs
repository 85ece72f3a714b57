use crate::artifacts::diff::tree_diff::DiffFilter;
use clap::{Parser, Subcommand};

/// Verb, usage and one-line description of every shell command
pub const VERBS: &[(&str, &str, &str)] = &[
    ("write", "write <filename>", "Create or overwrite file (multi-line input)"),
    ("read", "read <filename>", "Display file content"),
    ("edit", "edit <filename>", "Overwrite entire file content"),
    ("append", "append <filename>", "Add content to end of file"),
    ("delete", "delete <filename>", "Remove file from working directory"),
    ("add", "add <filename>", "Stage file for commit"),
    ("commit", "commit <message>", "Create new commit"),
    ("log", "log", "Show commit history"),
    ("status", "status [--short]", "Show staged, modified, untracked files"),
    ("checkout", "checkout <ID|HEAD>", "Restore old commit or latest commit"),
    ("branch", "branch <name>", "Create new branch"),
    ("switch", "switch <name>", "Switch to another branch"),
    ("list-branches", "list-branches", "Display all branches"),
    ("diff", "diff <c1> <c2> [--filter ARM]", "Show added / removed / modified files"),
    ("diff-content", "diff-content <c1> <c2>", "Show old and new content of modified files"),
    ("show", "show <commitID>", "Show full snapshot of a commit"),
    ("show-working", "show-working", "View working directory files"),
    ("help", "help", "Show all commands"),
    ("exit", "exit", "Quit MiniGit"),
];

/// Verbs whose only argument is the rest of the line, spaces included
const REST_OF_LINE_VERBS: &[&str] = &[
    "write", "read", "edit", "append", "delete", "add", "commit", "checkout", "branch", "switch",
    "show",
];

pub fn usage(verb: &str) -> Option<&'static str> {
    VERBS
        .iter()
        .find(|(name, _, _)| *name == verb)
        .map(|(_, usage, _)| *usage)
}

/// One parsed input line
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Write {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Read {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Edit {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Append {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Delete {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Add {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Commit {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    Log,
    Status {
        #[arg(short, long)]
        short: bool,
    },
    Checkout {
        #[arg(allow_hyphen_values = true)]
        target: String,
    },
    Branch {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    Switch {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    ListBranches,
    Diff {
        a: String,
        b: String,
        #[arg(long, value_parser = parse_filter)]
        filter: Option<DiffFilter>,
    },
    DiffContent {
        a: String,
        b: String,
    },
    Show {
        #[arg(allow_hyphen_values = true)]
        target: String,
    },
    ShowWorking,
    Help,
    Exit,
}

fn parse_filter(s: &str) -> Result<DiffFilter, String> {
    DiffFilter::try_parse(s)
        .ok_or_else(|| format!("invalid diff filter '{}', expected letters from ARM", s))
}

/// Why a line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    Unknown,
    Usage(&'static str),
    Invalid(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ParseFailure> {
        let tokens = tokenize(line);
        let verb = tokens.first().copied().unwrap_or_default();

        match CommandLine::try_parse_from(tokens.iter().copied()) {
            Ok(parsed) => Ok(parsed.command),
            Err(error) => match usage(verb) {
                None => Err(ParseFailure::Unknown),
                Some(_) if error.kind() == clap::error::ErrorKind::ValueValidation => {
                    Err(ParseFailure::Invalid(first_line(&error.to_string())))
                }
                Some(usage) => Err(ParseFailure::Usage(usage)),
            },
        }
    }
}

fn tokenize(line: &str) -> Vec<&str> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Vec::new();
    };

    if !REST_OF_LINE_VERBS.contains(&verb) {
        return std::iter::once(verb).chain(words).collect();
    }

    match rest_of_line(line) {
        "" => vec![verb],
        rest => vec![verb, rest],
    }
}

/// Everything after the verb, with surrounding whitespace removed
fn rest_of_line(line: &str) -> &str {
    line.trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default()
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
