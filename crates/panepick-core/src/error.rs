//! Configuration error types.

use thiserror::Error;

/// Errors raised while building a [`crate::patterns::PatternSet`].
///
/// These surface at setup time, before any text is matched. A pattern table
/// that compiles never fails later: extraction and overlap resolution are
/// total functions over well-formed input.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regex source for a pattern failed to compile.
    #[error("pattern '{name}' has an invalid regex: {source}")]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// Two patterns in the same table share a name.
    #[error("pattern '{0}' is declared more than once")]
    DuplicateName(String),
}
