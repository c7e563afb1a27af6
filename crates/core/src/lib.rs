//! Line classification for C/C++ and Ruby sources.
//!
//! The crate is pure: it never touches the file system. Callers pick a
//! [`registry::Language`] for a file, build a fresh
//! [`language::LineClassifier`] for it and feed its lines through
//! [`counter::tally_lines`].
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod counter;
pub mod language;
pub mod registry;
pub mod tally;

pub use config::{BlockCommentPolicy, ClassifierConfig};
pub use counter::{tally_lines, tally_str, try_tally_lines};
pub use language::{ClassifierKind, LineClassifier, LineKind, LineProcessor};
pub use registry::{Language, LanguageRegistry};
pub use tally::LineTally;
