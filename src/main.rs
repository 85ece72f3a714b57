use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use minigit::Repository;
use minigit::artifacts::branch::branch_name::{BranchName, DEFAULT_BRANCH};
use minigit::shell::{Shell, ShellOptions};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn apply(self) {
        let enabled = match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        colored::control::set_override(enabled);
    }
}

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "An in-memory version-control simulator",
    long_about = "MiniGit keeps a working tree, a staging area, commits and branches in memory \
    and drives them from a line-oriented shell. Nothing is written to disk; \
    all state is lost when the program exits.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        env = "MINIGIT_SCRIPT",
        help = "Read commands from this file instead of standard input"
    )]
    script: Option<PathBuf>,
    #[arg(
        long,
        env = "MINIGIT_COLOR",
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to color the output"
    )]
    color: ColorChoice,
    #[arg(
        long,
        env = "MINIGIT_DEFAULT_BRANCH",
        default_value = DEFAULT_BRANCH,
        help = "Name of the branch the repository starts on"
    )]
    default_branch: String,
    #[arg(short, long, help = "Do not print the greeting or the prompt")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    minigit::telemetry::init();
    cli.color.apply();

    let branch = BranchName::try_parse(cli.default_branch.as_str())
        .context("invalid --default-branch")?;
    let repository = Repository::with_default_branch(branch);

    let (input, interactive): (Box<dyn BufRead>, bool) = match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            (Box::new(BufReader::new(file)), false)
        }
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            (Box::new(stdin.lock()), interactive)
        }
    };

    let options = ShellOptions {
        prompt: interactive && !cli.quiet,
        banner: !cli.quiet,
    };
    tracing::debug!(?options, script = ?cli.script, "starting shell");

    Shell::new(repository, input, std::io::stdout().lock(), options).run()
}
