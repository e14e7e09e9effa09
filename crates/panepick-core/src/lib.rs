//! Core types and logic for panepick.
//!
//! This crate holds the pure, synchronous pieces of the tool: everything that
//! turns captured pane text into a hint-to-text mapping. It does no I/O; the
//! CLI crate owns tmux invocation, the interactive picker, and the clipboard.
//!
//! # Modules
//!
//! - [`ansi`]: SGR sequence stripping and plain/styled offset translation
//! - [`error`]: configuration error types
//! - [`patterns`]: the named pattern table with overlap priorities
//! - [`matcher`]: match extraction and overlap resolution
//! - [`group`]: grouping of matches by identical text
//! - [`hints`]: alphabet presets, prefix-free hint generation and assignment
//! - [`select`]: resolution of typed input against assigned hints
//!
//! # Pipeline
//!
//! ```ignore
//! let plain: Vec<String> = styled.iter().map(|l| ansi::strip(l).into_owned()).collect();
//! let matches = matcher::find_matches(&plain, PatternSet::builtin());
//! let groups = group::group_by_content(&matches);
//! let assignments = hints::assign_hints(&groups, hints::alphabet_chars("vim-movement"));
//! ```
//!
//! Matches on the same line never overlap after resolution, identical text
//! always shares one hint, and no hint is a prefix of another.

pub mod ansi;
pub mod error;
pub mod group;
pub mod hints;
pub mod matcher;
pub mod patterns;
pub mod select;

pub use error::PatternError;
pub use group::{group_by_content, ContentGroups};
pub use hints::{assign_hints, generate_hints, HintAssignments};
pub use matcher::{find_matches, Match};
pub use patterns::{PatternSet, PatternSpec};
