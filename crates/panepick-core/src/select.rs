//! Resolution of typed input against assigned hints.
//!
//! The picker feeds every keystroke through [`resolve_typed`]. Because the
//! hint set is prefix-free, an exact match can be selected immediately: no
//! longer hint can still be reached by typing more characters.

use crate::hints::HintAssignments;

/// Outcome of matching the typed string against the live hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The typed string equals a hint; this is the selected text.
    Selected(&'a str),
    /// The typed string is a proper prefix of `live` hints.
    Pending { live: usize },
    /// No hint starts with the typed string.
    NoMatch,
}

/// Classify `typed` against the hint assignments.
///
/// An empty `typed` string is a prefix of everything, so it reports all
/// hints as live (or `NoMatch` when there are none).
pub fn resolve_typed<'a>(typed: &str, assignments: &'a HintAssignments) -> Resolution<'a> {
    let mut live = 0;
    for (text, hint) in assignments {
        if hint.as_str() == typed {
            return Resolution::Selected(text.as_str());
        }
        if hint.starts_with(typed) {
            live += 1;
        }
    }
    if live > 0 {
        Resolution::Pending { live }
    } else {
        Resolution::NoMatch
    }
}
