//! Clipboard copy via platform commands.
//!
//! macOS pipes through `pbcopy`; elsewhere `xclip` is tried first and `xsel`
//! second. A failed copy is reported to the caller, who decides whether that
//! is fatal (it is not: the selection is still printed).

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command succeeded (tried: {tried})")]
    NoBackend { tried: String },
}

/// Copy `text` to the system clipboard through the first working backend.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let backends = backend_commands();
    for argv in backends {
        if pipe_to(argv, text).is_ok() {
            return Ok(());
        }
    }
    Err(ClipboardError::NoBackend {
        tried: backends
            .iter()
            .map(|argv| argv[0])
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(target_os = "macos")]
fn backend_commands() -> &'static [&'static [&'static str]] {
    &[&["pbcopy"]]
}

#[cfg(not(target_os = "macos"))]
fn backend_commands() -> &'static [&'static [&'static str]] {
    &[
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
    ]
}

fn pipe_to(argv: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(argv[0])
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }
    drop(child.stdin.take());
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("clipboard command exited with failure"))
    }
}
