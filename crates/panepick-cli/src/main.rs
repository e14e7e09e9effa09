//! panepick CLI entry point.

mod args;
mod clipboard;
mod tmux;
mod ui;

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, warn};

use panepick_core::{
    ansi, group,
    hints::{self, HintAssignments},
    matcher::{self, Match},
    patterns::PatternSet,
};

use crate::args::Cli;

fn main() {
    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Resolved matches plus their hint assignments, for `--json` consumers.
#[derive(Debug, Serialize)]
struct Report<'a> {
    matches: &'a [Match],
    hints: &'a HintAssignments,
}

fn run(cli: Cli) -> Result<()> {
    if !tmux::inside_tmux() {
        bail!("panepick must run inside a tmux session");
    }

    let styled = tmux::capture_pane(cli.target.as_deref())?;
    let plain: Vec<String> = styled
        .iter()
        .map(|line| ansi::strip(line).into_owned())
        .collect();

    let matches = matcher::find_matches(&plain, PatternSet::builtin());
    debug!(matches = matches.len(), "overlap resolution finished");
    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    let groups = group::group_by_content(&matches);
    let assignments = hints::assign_hints(&groups, hints::alphabet_chars(&cli.alphabet));

    if cli.json {
        let report = Report {
            matches: &matches,
            hints: &assignments,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match ui::pick(&plain, &matches, &assignments)? {
        Some(text) => {
            if let Err(e) = clipboard::copy(&text) {
                warn!("{}", e);
                println!("{}", text);
            } else {
                println!("Copied '{}' to clipboard.", text);
            }
        }
        None => println!("Operation cancelled."),
    }
    Ok(())
}
