//! Text output of the shell
//!
//! Every function writes one complete response to `out`. Colors come from
//! `colored` and follow its global override, so callers decide once whether
//! output is colored.

use crate::areas::workspace::WorkingTree;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::diff::content_diff::ContentChange;
use crate::artifacts::diff::tree_diff::SnapshotDiff;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::CommitId;
use crate::artifacts::status::file_change::FileChangeType;
use crate::artifacts::status::status_info::StatusInfo;
use crate::commands::porcelain::branch::BranchListing;
use crate::shell::command::VERBS;
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

const LOG_SEPARATOR: &str = "------------------------";
const FILE_SEPARATOR: &str = "--------------------------------";
const USAGE_WIDTH: usize = 32;

pub fn banner(out: &mut impl Write, branch: &BranchName) -> anyhow::Result<()> {
    writeln!(out, "{}", "=== MiniGit Console ===".bold())?;
    writeln!(
        out,
        "Initialized empty MiniGit repository on branch '{}'.",
        branch
    )?;
    writeln!(out, "Type 'help' to see all commands.")?;
    writeln!(out)?;

    Ok(())
}

pub fn help(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", "=== Available Commands ===".bold())?;
    for (_, usage, description) in VERBS {
        writeln!(out, "{:<width$}- {}", usage, description, width = USAGE_WIDTH)?;
    }

    Ok(())
}

pub fn file(out: &mut impl Write, name: &str, content: &str) -> anyhow::Result<()> {
    writeln!(out, "{}", format!("=== {} ===", name).bold())?;
    writeln!(out, "{}", content)?;

    Ok(())
}

pub fn commit_created(
    out: &mut impl Write,
    branch: &BranchName,
    commit: &Commit,
) -> anyhow::Result<()> {
    writeln!(out, "[{}] Commit {}", branch, commit.id().to_string().yellow())?;
    writeln!(out, "Message: {}", commit.message())?;

    Ok(())
}

/// History newest first, each commit decorated with the branches at it
pub fn log<'c>(
    out: &mut impl Write,
    commits: impl IntoIterator<Item = &'c Commit>,
    decorations: &HashMap<CommitId, Vec<BranchName>>,
) -> anyhow::Result<()> {
    let mut commits = commits.into_iter().peekable();
    if commits.peek().is_none() {
        writeln!(out, "No commits yet.")?;
        return Ok(());
    }

    for commit in commits {
        writeln!(
            out,
            "Commit {}{}",
            commit.id().to_string().yellow(),
            decoration(commit.id(), decorations)
        )?;
        writeln!(out, "Message: {}", commit.message())?;
        writeln!(out, "Time: {}", commit.readable_timestamp())?;
        writeln!(out, "{}", LOG_SEPARATOR)?;
    }

    Ok(())
}

fn decoration(id: &CommitId, decorations: &HashMap<CommitId, Vec<BranchName>>) -> String {
    match decorations.get(id) {
        Some(names) if !names.is_empty() => {
            let names = names
                .iter()
                .map(|name| name.to_string().green().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(" ({})", names)
        }
        _ => String::new(),
    }
}

pub fn status(out: &mut impl Write, info: &StatusInfo, short: bool) -> anyhow::Result<()> {
    if short {
        for (name, change) in info.changeset() {
            writeln!(out, "{} {}", change, name)?;
        }
        return Ok(());
    }

    let sections = [
        FileChangeType::Staged,
        FileChangeType::Modified,
        FileChangeType::Untracked,
    ];
    for (position, change) in sections.into_iter().enumerate() {
        if position > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", change.heading().bold())?;

        for name in info.files(change) {
            let name = match change {
                FileChangeType::Staged => name.green(),
                FileChangeType::Modified | FileChangeType::Untracked => name.red(),
            };
            writeln!(out, "{}", name)?;
        }
    }

    Ok(())
}

pub fn branches(out: &mut impl Write, listing: &[BranchListing]) -> anyhow::Result<()> {
    writeln!(out, "{}", "=== Branches ===".bold())?;
    for branch in listing {
        if branch.is_current {
            writeln!(out, "{} *", branch.name.to_string().green())?;
        } else {
            writeln!(out, "{}", branch.name)?;
        }
    }

    Ok(())
}

pub fn tree_diff(out: &mut impl Write, diff: &SnapshotDiff<'_>) -> anyhow::Result<()> {
    let sections = [
        ("=== Added Files ===", diff.added()),
        ("=== Removed Files ===", diff.removed()),
        ("=== Modified Files ===", diff.modified()),
    ];

    for (position, (heading, names)) in sections.into_iter().enumerate() {
        if position > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", heading.bold())?;
        for name in names {
            writeln!(out, "{}", name)?;
        }
    }

    Ok(())
}

pub fn content_diff(out: &mut impl Write, changes: &[ContentChange<'_>]) -> anyhow::Result<()> {
    writeln!(out, "{}", "=== Content Differences ===".bold())?;
    if changes.is_empty() {
        writeln!(out, "No content differences found.")?;
        return Ok(());
    }

    for change in changes {
        writeln!(out)?;
        writeln!(out, "File: {}", change.name.bold())?;
        writeln!(out, "{}", "--- Old Content ---".red())?;
        writeln!(out, "{}", change.old)?;
        writeln!(out, "{}", "--- New Content ---".green())?;
        writeln!(out, "{}", change.new)?;
    }

    Ok(())
}

pub fn commit_snapshot(out: &mut impl Write, commit: &Commit) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}",
        format!("=== Snapshot of commit {} ===", commit.id()).bold()
    )?;
    writeln!(out, "Date: {}", commit.readable_timestamp())?;

    if commit.snapshot().is_empty() {
        writeln!(out, "(Empty snapshot)")?;
        return Ok(());
    }

    for (name, content) in commit.snapshot() {
        writeln!(out)?;
        writeln!(out, "File: {}", name.bold())?;
        writeln!(out, "{}", content)?;
        writeln!(out, "{}", FILE_SEPARATOR)?;
    }

    Ok(())
}

pub fn working_tree(out: &mut impl Write, tree: &WorkingTree) -> anyhow::Result<()> {
    writeln!(out, "{}", "=== Working Directory ===".bold())?;
    if tree.is_empty() {
        writeln!(out, "(empty)")?;
        return Ok(());
    }

    for (name, content) in tree.files() {
        writeln!(out)?;
        writeln!(out, "File: {}", name.bold())?;
        writeln!(out, "{}", content)?;
        writeln!(out, "{}", FILE_SEPARATOR)?;
    }

    Ok(())
}
