//! CLI argument parsing with clap derive macros.

use clap::Parser;

use panepick_core::hints::DEFAULT_ALPHABET;

/// Copy recognized text out of a tmux pane with keyboard hints.
///
/// Captures the current (or targeted) pane, highlights URLs, file paths,
/// hashes, addresses and similar strings, and labels each distinct string
/// with a short hint. Typing a hint copies that string to the clipboard.
#[derive(Debug, Parser)]
#[command(name = "panepick", version, after_help = "\
Examples:
  panepick                          # Pick from the current pane
  panepick -t %3                    # Pick from a specific pane
  panepick -a qwerty-homerow        # Use home-row hint keys
  panepick --json | jq '.hints'     # Inspect matches without the picker

Alphabet presets:
  numeric, abcd, qwerty, qwerty-homerow, qwerty-left-hand,
  qwerty-right-hand, dvorak, dvorak-homerow, colemak, colemak-homerow,
  vim-movement (default), vim-homerow")]
pub struct Cli {
    /// Target pane (tmux target specifier, e.g. %3 or mysession:1.2)
    /// [default: current pane]
    #[arg(short, long, value_name = "PANE")]
    pub target: Option<String>,

    /// Hint alphabet preset; unknown names fall back to the default
    #[arg(short, long, value_name = "PRESET", default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Print resolved matches and hint assignments as JSON instead of
    /// opening the interactive picker
    #[arg(long)]
    pub json: bool,
}
