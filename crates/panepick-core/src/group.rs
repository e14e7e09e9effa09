//! Grouping of resolved matches by identical text.
//!
//! Two matches with the same literal text (case-sensitive) share one group
//! and therefore one hint. Keys keep first-encounter order so hint assignment
//! is deterministic for a given match list.

use indexmap::IndexMap;

use crate::matcher::Match;

/// Distinct matched text mapped to every match carrying that text.
pub type ContentGroups = IndexMap<String, Vec<Match>>;

/// Group matches by their exact text, preserving input order within groups.
pub fn group_by_content(matches: &[Match]) -> ContentGroups {
    let mut groups = ContentGroups::new();
    for m in matches {
        groups.entry(m.text.clone()).or_default().push(m.clone());
    }
    groups
}
