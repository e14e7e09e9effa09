//! Interactive hint picker rendered over the captured pane content.
//!
//! The picker takes over the terminal (alternate screen, raw mode), shows the
//! pane's plain text dimmed with matches highlighted and hints overlaid on
//! their first columns, and tracks typed hint characters until a hint is
//! completed or the user cancels.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use panepick_core::{
    hints::HintAssignments,
    matcher::Match,
    select::{resolve_typed, Resolution},
};

const HINT_COLOR: Color = Color::Yellow;
const TYPED_COLOR: Color = Color::Red;
const MATCH_COLOR: Color = Color::Green;

/// Run the picker and return the selected text, or `None` on cancel.
pub fn pick(
    lines: &[String],
    matches: &[Match],
    assignments: &HintAssignments,
) -> Result<Option<String>> {
    terminal::enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide).context("switching to alternate screen")?;

    let outcome = event_loop(&mut stdout, lines, matches, assignments);

    execute!(stdout, Show, LeaveAlternateScreen).ok();
    terminal::disable_raw_mode().context("disabling raw mode")?;
    outcome
}

fn event_loop(
    stdout: &mut Stdout,
    lines: &[String],
    matches: &[Match],
    assignments: &HintAssignments,
) -> Result<Option<String>> {
    let mut typed = String::new();
    loop {
        draw(stdout, lines, matches, assignments, &typed)?;

        match event::read().context("reading terminal event")? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None)
                    }
                    KeyCode::Backspace => {
                        typed.pop();
                    }
                    KeyCode::Char(c) => {
                        typed.push(c.to_ascii_lowercase());
                        match resolve_typed(&typed, assignments) {
                            Resolution::Selected(text) => return Ok(Some(text.to_string())),
                            Resolution::Pending { .. } => {}
                            Resolution::NoMatch => typed.clear(),
                        }
                    }
                    _ => {}
                }
            }
            Event::Resize(_, _) => {
                // next draw adapts to the new size
            }
            _ => {}
        }
    }
}

fn draw(
    stdout: &mut Stdout,
    lines: &[String],
    matches: &[Match],
    assignments: &HintAssignments,
    typed: &str,
) -> Result<()> {
    let (cols, rows) = terminal::size().context("querying terminal size")?;
    queue!(stdout, Clear(ClearType::All)).context("clearing screen")?;

    for (row, line) in lines.iter().enumerate().take(rows as usize) {
        queue!(stdout, MoveTo(0, row as u16)).context("positioning cursor")?;
        draw_line(stdout, row, line, matches, assignments, typed, cols as usize)?;
    }

    stdout.flush().context("flushing frame")
}

fn draw_line(
    stdout: &mut Stdout,
    row: usize,
    line: &str,
    matches: &[Match],
    assignments: &HintAssignments,
    typed: &str,
    width: usize,
) -> Result<()> {
    let mut row_matches: Vec<&Match> = matches.iter().filter(|m| m.line == row).collect();
    row_matches.sort_by_key(|m| m.start);

    let chars: Vec<char> = line.chars().collect();
    let mut budget = Budget::new(width);
    let mut cursor = 0;

    for m in row_matches {
        if budget.exhausted() {
            break;
        }
        if m.start > cursor {
            let gap = clip(&chars[cursor..m.start.min(chars.len())], &mut budget);
            queue!(
                stdout,
                SetAttribute(Attribute::Dim),
                Print(gap),
                SetAttribute(Attribute::Reset),
            )
            .context("printing text")?;
        }
        if let Some(hint) = assignments.get(&m.text) {
            draw_match(stdout, m, hint, typed, &mut budget)?;
        }
        cursor = m.end;
    }

    if cursor < chars.len() {
        let tail = clip(&chars[cursor..], &mut budget);
        queue!(
            stdout,
            SetAttribute(Attribute::Dim),
            Print(tail),
            SetAttribute(Attribute::Reset),
        )
        .context("printing text")?;
    }
    Ok(())
}

/// Print one match: its hint overlaid on the leading columns, then whatever
/// of the matched text the hint does not cover.
fn draw_match(
    stdout: &mut Stdout,
    m: &Match,
    hint: &str,
    typed: &str,
    budget: &mut Budget,
) -> Result<()> {
    let reachable = typed.is_empty() || hint.starts_with(typed);
    let (typed_part, pending_part) = if reachable {
        hint.split_at(typed.len().min(hint.len()))
    } else {
        ("", hint)
    };

    let typed_vis = clip(&typed_part.chars().collect::<Vec<_>>(), budget);
    let pending_vis = clip(&pending_part.chars().collect::<Vec<_>>(), budget);
    let rest = hint_remainder(&m.text, hint.width());
    let rest_vis = clip(&rest.chars().collect::<Vec<_>>(), budget);

    if reachable {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(TYPED_COLOR),
            Print(typed_vis),
            SetForegroundColor(HINT_COLOR),
            Print(pending_vis),
            SetForegroundColor(MATCH_COLOR),
            SetAttribute(Attribute::NormalIntensity),
            Print(rest_vis),
            SetAttribute(Attribute::Reset),
        )
        .context("printing match")?;
    } else {
        // not reachable from the typed prefix: render the whole span inert
        queue!(
            stdout,
            SetAttribute(Attribute::Dim),
            Print(typed_vis),
            Print(pending_vis),
            Print(rest_vis),
            SetAttribute(Attribute::Reset),
        )
        .context("printing match")?;
    }
    Ok(())
}

/// The part of the matched text not covered by the hint overlay.
///
/// Skips leading characters until at least `cover` display columns are
/// consumed, so wide characters under the hint are dropped whole.
fn hint_remainder(text: &str, cover: usize) -> &str {
    let mut covered = 0;
    for (idx, c) in text.char_indices() {
        if covered >= cover {
            return &text[idx..];
        }
        covered += c.width().unwrap_or(0);
    }
    ""
}

/// Remaining display-column budget for one screen row.
struct Budget {
    left: usize,
}

impl Budget {
    fn new(width: usize) -> Self {
        Self { left: width }
    }

    fn exhausted(&self) -> bool {
        self.left == 0
    }
}

/// Take characters from `chars` while they fit in the budget, whole
/// characters only.
fn clip(chars: &[char], budget: &mut Budget) -> String {
    let mut out = String::new();
    for &c in chars {
        let w = c.width().unwrap_or(0);
        if w > budget.left {
            budget.left = 0;
            break;
        }
        budget.left -= w;
        out.push(c);
    }
    out
}
