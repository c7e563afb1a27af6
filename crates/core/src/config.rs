// crates/core/src/config.rs
use serde::{Deserialize, Serialize};

/// ブロックコメント終端行の扱い
///
/// Decides what happens to a line on which a block comment closes and real
/// text follows the terminator, e.g. `end */ x = 1;`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCommentPolicy {
    /// The line is classified by where it starts (comment).
    #[default]
    LineStart,
    /// Text after the terminator turns the line into code.
    TrailingCode,
}

/// Options shared by every classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub block_comment_policy: BlockCommentPolicy,
}

impl ClassifierConfig {
    #[must_use]
    pub const fn new(block_comment_policy: BlockCommentPolicy) -> Self {
        Self {
            block_comment_policy,
        }
    }
}
