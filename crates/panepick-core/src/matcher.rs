//! Match extraction and overlap resolution.
//!
//! Extraction runs every pattern over every line and records one candidate
//! per occurrence, regardless of cross-pattern overlap. Resolution then keeps
//! a single winner per overlapping region:
//!
//! 1. longer match wins;
//! 2. at equal length, the numerically lower pattern priority wins;
//! 3. at equal length and priority, the already-inserted entry is kept.
//!
//! Offsets are character offsets into the plain-text view of the line,
//! half-open. Touching ranges (`end == other.start`) do not overlap.

use serde::{Deserialize, Serialize};

use crate::patterns::PatternSet;

/// A pattern occurrence on one line.
///
/// Before [`resolve_overlaps`] this is a candidate; afterwards, matches on
/// the same line are guaranteed non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The matched text exactly as it appears in the line.
    pub text: String,
    /// 0-based line index in input order.
    pub line: usize,
    /// Start offset in characters, inclusive.
    pub start: usize,
    /// End offset in characters, exclusive.
    pub end: usize,
    /// Name of the pattern that produced this match.
    pub pattern: String,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn overlaps(&self, other: &Match) -> bool {
        self.line == other.line && self.start.max(other.start) < self.end.min(other.end)
    }
}

/// Run every pattern over every line and collect all candidates.
///
/// Within one pattern the regex engine already yields non-overlapping
/// occurrences left to right; candidates from different patterns may overlap
/// freely here. A pattern with one capture group contributes the captured
/// range instead of the whole match.
pub fn extract<S: AsRef<str>>(lines: &[S], set: &PatternSet) -> Vec<Match> {
    let mut candidates = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        for spec in set.iter() {
            let captured = spec.regex().captures_len() > 1;
            for caps in spec.regex().captures_iter(line) {
                let group = if captured { caps.get(1) } else { caps.get(0) };
                let Some(group) = group else { continue };
                candidates.push(Match {
                    text: group.as_str().to_string(),
                    line: line_idx,
                    start: char_offset(line, group.start()),
                    end: char_offset(line, group.end()),
                    pattern: spec.name().to_string(),
                });
            }
        }
    }
    candidates
}

/// Translate a byte offset into a character offset.
fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

/// Collapse overlapping candidates into a non-overlapping set per line.
///
/// Candidates are visited in (line, start) order. Each one is checked against
/// the entries accepted so far; only the first overlapping entry is
/// considered, and the loser of that comparison is dropped (or replaced in
/// place). Matches on different lines never interact.
pub fn resolve_overlaps(candidates: Vec<Match>, set: &PatternSet) -> Vec<Match> {
    let mut sorted = candidates;
    sorted.sort_by_key(|m| (m.line, m.start));

    let mut resolved: Vec<Match> = Vec::new();
    'candidates: for candidate in sorted {
        for slot in resolved.iter_mut() {
            if slot.overlaps(&candidate) {
                if beats(&candidate, slot, set) {
                    *slot = candidate;
                }
                continue 'candidates;
            }
        }
        resolved.push(candidate);
    }
    resolved
}

/// Whether `challenger` displaces `incumbent`. Ties keep the incumbent.
fn beats(challenger: &Match, incumbent: &Match, set: &PatternSet) -> bool {
    if challenger.len() != incumbent.len() {
        return challenger.len() > incumbent.len();
    }
    set.priority(&challenger.pattern) < set.priority(&incumbent.pattern)
}

/// Extract candidates from `lines` and resolve overlaps in one step.
pub fn find_matches<S: AsRef<str>>(lines: &[S], set: &PatternSet) -> Vec<Match> {
    resolve_overlaps(extract(lines, set), set)
}
