// crates/core/src/language/classifiers/c_style.rs
//! # C-Family Line Classifier
//!
//! Line classifier for C and C++ sources with `//` and `/* */` comments.
//!
//! ## Rules
//!
//! - A line whose first comment marker is preceded only by whitespace is a
//!   comment line; a marker preceded by real text leaves the line as code.
//! - When both `//` and `/*` appear, the earlier one governs. A `/*` that sits
//!   behind a `//` is commentary and never opens a block.
//! - Block comments do not nest. Markers inside `"..."` or `'...'` are
//!   ignored (see [`quote_scan`](crate::language::quote_scan)).
//! - Inside a block comment every non-blank line is a comment line. Whether
//!   text after the closing `*/` turns the line into code is decided by
//!   [`BlockCommentPolicy`].
//!
//! ## Usage Example
//!
//! ```rust
//! use linetally_core::config::ClassifierConfig;
//! use linetally_core::language::classifiers::CFamilyClassifier;
//! use linetally_core::language::{LineKind, LineProcessor};
//!
//! let mut c = CFamilyClassifier::new(ClassifierConfig::default());
//!
//! assert_eq!(c.classify_line("int x = 1; // inline"), LineKind::Code);
//! assert_eq!(c.classify_line("// just a comment"), LineKind::Comment);
//! assert_eq!(c.classify_line("/* start"), LineKind::Comment);
//! assert_eq!(c.classify_line("end */ code_after"), LineKind::Comment);
//! ```

use crate::config::{BlockCommentPolicy, ClassifierConfig};
use crate::language::processor_trait::{LineKind, LineProcessor};
use crate::language::quote_scan::find_unquoted;

const LINE_COMMENT: &str = "//";
const BLOCK_START: &str = "/*";
const BLOCK_END: &str = "*/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum CState {
    #[default]
    Normal,
    InBlockComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Line,
    BlockStart,
}

/// C系言語の行分類器 (//, /* */) - ネスト非対応
#[derive(Debug, Clone, Default)]
pub struct CFamilyClassifier {
    policy: BlockCommentPolicy,
    state: CState,
}

impl LineProcessor for CFamilyClassifier {
    fn classify_line(&mut self, line: &str) -> LineKind {
        self.classify(line)
    }

    fn reset(&mut self) {
        self.state = CState::Normal;
    }

    fn is_in_multiline_context(&self) -> bool {
        self.state == CState::InBlockComment
    }
}

impl CFamilyClassifier {
    #[must_use]
    pub const fn new(config: ClassifierConfig) -> Self {
        Self {
            policy: config.block_comment_policy,
            state: CState::Normal,
        }
    }

    pub fn classify(&mut self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        match self.state {
            CState::InBlockComment => self.classify_in_block(line),
            CState::Normal => self.classify_normal(line),
        }
    }

    fn classify_in_block(&mut self, line: &str) -> LineKind {
        match self.policy {
            BlockCommentPolicy::LineStart => {
                if find_unquoted(line, BLOCK_END, 0).is_some() {
                    self.state = CState::Normal;
                }
                LineKind::Comment
            }
            BlockCommentPolicy::TrailingCode => {
                if self.scan_block(line, 0) {
                    LineKind::Code
                } else {
                    LineKind::Comment
                }
            }
        }
    }

    fn classify_normal(&mut self, line: &str) -> LineKind {
        let Some((pos, marker)) = first_marker(line, 0) else {
            return LineKind::Code;
        };

        let code_before = !line[..pos].trim().is_empty();
        let code_after = match marker {
            Marker::Line => false,
            Marker::BlockStart => self.scan_block(line, pos + BLOCK_START.len()),
        };

        if code_before || (code_after && self.policy == BlockCommentPolicy::TrailingCode) {
            LineKind::Code
        } else {
            LineKind::Comment
        }
    }

    /// `from` から先をブロックコメント内として走査する
    ///
    /// Leaves the classifier in `InBlockComment` when the last block on the
    /// line stays open. Returns `true` when non-comment text follows a closing
    /// terminator somewhere on the line.
    fn scan_block(&mut self, line: &str, mut from: usize) -> bool {
        let mut code_after = false;

        loop {
            let Some(end) = find_unquoted(line, BLOCK_END, from) else {
                self.state = CState::InBlockComment;
                return code_after;
            };
            self.state = CState::Normal;

            let rest = end + BLOCK_END.len();
            match first_marker(line, rest) {
                None => return code_after || !line[rest..].trim().is_empty(),
                Some((next, marker)) => {
                    code_after |= !line[rest..next].trim().is_empty();
                    match marker {
                        Marker::Line => return code_after,
                        Marker::BlockStart => from = next + BLOCK_START.len(),
                    }
                }
            }
        }
    }
}

/// 引用符外で最初に現れるコメントマーカー
fn first_marker(line: &str, from: usize) -> Option<(usize, Marker)> {
    let line_pos = find_unquoted(line, LINE_COMMENT, from);
    let block_pos = find_unquoted(line, BLOCK_START, from);

    match (line_pos, block_pos) {
        (Some(l), Some(b)) if b < l => Some((b, Marker::BlockStart)),
        (Some(l), _) => Some((l, Marker::Line)),
        (None, Some(b)) => Some((b, Marker::BlockStart)),
        (None, None) => None,
    }
}
