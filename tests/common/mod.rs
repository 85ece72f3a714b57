#![allow(dead_code)]

pub mod script;

use assert_cmd::Command;
use minigit::Repository;
use minigit::shell::{Shell, ShellOptions};
use regex::Regex;
use std::sync::LazyLock;

static COMMIT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\] Commit ([0-9a-f]{7})").expect("Invalid commit line pattern"));

/// The `minigit` binary with a plain, prompt-free transcript
pub fn minigit() -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.env_remove("MINIGIT_SCRIPT")
        .env_remove("MINIGIT_DEFAULT_BRANCH")
        .env_remove("MINIGIT_LOG")
        .args(["--quiet", "--color", "never"]);
    cmd
}

/// Feed `script` to the binary on stdin and return its stdout
pub fn run_minigit(script: &str) -> String {
    let assert = minigit().write_stdin(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

/// Identifiers of every commit created in `output`, oldest first
pub fn commit_ids(output: &str) -> Vec<String> {
    COMMIT_LINE
        .captures_iter(output)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// An in-process shell whose repository survives between scripts
///
/// Commit identifiers are random, so a test that needs to name a commit runs
/// one script, reads the identifier from its output and uses it in the next.
pub struct Session {
    repository: Option<Repository>,
}

impl Session {
    pub fn new() -> Self {
        colored::control::set_override(false);
        Session {
            repository: Some(Repository::new()),
        }
    }

    pub fn run(&mut self, script: &str) -> String {
        let repository = self.repository.take().expect("Session lost its repository");
        let mut out = Vec::new();

        let mut shell = Shell::new(
            repository,
            script.as_bytes(),
            &mut out,
            ShellOptions::default(),
        );
        shell.run().expect("Shell failed");
        self.repository = Some(shell.into_repository());

        String::from_utf8(out).expect("Output is not UTF-8")
    }

    pub fn repository(&self) -> &Repository {
        self.repository.as_ref().expect("Session lost its repository")
    }
}
