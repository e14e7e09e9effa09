//! Pane capture via `tmux capture-pane`.

use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Whether this process is running inside a tmux client.
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some()
}

/// Capture the visible content of a pane, one styled line per entry.
///
/// Uses `-e` to keep SGR sequences (stripped later for matching) and `-J` so
/// wrapped lines are joined back into their logical line.
pub fn capture_pane(target: Option<&str>) -> Result<Vec<String>> {
    let mut cmd = Command::new("tmux");
    cmd.args(["capture-pane", "-p", "-e", "-J"]);
    if let Some(target) = target {
        cmd.args(["-t", target]);
    }

    let output = cmd
        .output()
        .context("failed to run 'tmux capture-pane' (is tmux installed?)")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("tmux capture-pane failed: {}", stderr.trim());
    }

    let lines = split_capture(&String::from_utf8_lossy(&output.stdout));
    debug!(lines = lines.len(), "captured pane content");
    Ok(lines)
}

/// Split captured output into lines, dropping the single trailing newline
/// tmux appends.
fn split_capture(stdout: &str) -> Vec<String> {
    stdout
        .strip_suffix('\n')
        .unwrap_or(stdout)
        .split('\n')
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_capture;

    #[test]
    fn splits_lines_and_trims_trailing_newline() {
        assert_eq!(split_capture("line1\nline2\nline3\n"), ["line1", "line2", "line3"]);
    }

    #[test]
    fn keeps_interior_blank_lines() {
        assert_eq!(split_capture("a\n\nb\n"), ["a", "", "b"]);
    }

    #[test]
    fn empty_capture_is_a_single_blank_line() {
        assert_eq!(split_capture(""), [""]);
    }

    #[test]
    fn missing_trailing_newline_is_tolerated() {
        assert_eq!(split_capture("only"), ["only"]);
    }
}
