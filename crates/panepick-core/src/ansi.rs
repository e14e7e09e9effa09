//! SGR sequence stripping and plain/styled offset translation.
//!
//! `tmux capture-pane -e` emits lines with SGR color sequences embedded.
//! Matching runs on the plain-text view; consumers that still hold the styled
//! line can translate plain offsets back with [`plain_offsets`].
//!
//! Only well-formed SGR sequences (`ESC [ ... m`) are recognized. A truncated
//! sequence is left in place and treated as literal characters.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static SGR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR regex compiles"));

/// Remove SGR sequences, yielding the plain-text view of a line.
pub fn strip(line: &str) -> Cow<'_, str> {
    SGR.replace_all(line, "")
}

/// Byte offset in the styled line for each character of the plain view.
///
/// `plain_offsets(styled)[i]` is where the `i`-th plain character starts in
/// `styled`. The vec's length equals the plain view's character count.
pub fn plain_offsets(styled: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut cursor = 0;
    for m in SGR.find_iter(styled) {
        for (idx, _) in styled[cursor..m.start()].char_indices() {
            offsets.push(cursor + idx);
        }
        cursor = m.end();
    }
    for (idx, _) in styled[cursor..].char_indices() {
        offsets.push(cursor + idx);
    }
    offsets
}
