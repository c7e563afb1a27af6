// crates/core/src/language/classifiers/ruby_style.rs
//! Ruby言語の行分類
//!
//! Ruby固有の対応:
//! - `#` 行コメント（引用符内の `#` は無視）
//! - 埋め込みドキュメント: `=begin` ～ `=end`
//! - ヒアドキュメント: `<<EOF`, `<<-EOF`, `<<~EOF`, `<<~'EOF'`
//! - シバン行 (`#!`) はコードとして扱う
//!
//! ヒアドキュメント本文はすべてコード行です。1行で複数のヒアドキュメントが
//! 開始された場合は、出現順に本文を読み進めます。

use crate::language::heredoc_utils::{HeredocContext, find_heredoc_openers};
use crate::language::processor_trait::{LineKind, LineProcessor};
use crate::language::quote_scan::find_unquoted;

const COMMENT: &str = "#";
const SHEBANG: &str = "#!";
const DOC_BEGIN: &str = "=begin";
const DOC_END: &str = "=end";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum RubyState {
    #[default]
    Normal,
    InBlockComment,
    InHeredoc { pending: HeredocContext },
}

/// Rubyの行分類器
#[derive(Debug, Clone, Default)]
pub struct RubyClassifier {
    state: RubyState,
}

impl LineProcessor for RubyClassifier {
    fn classify_line(&mut self, line: &str) -> LineKind {
        self.classify(line)
    }

    fn reset(&mut self) {
        self.state = RubyState::Normal;
    }

    fn is_in_multiline_context(&self) -> bool {
        self.state != RubyState::Normal
    }
}

impl RubyClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RubyState::Normal,
        }
    }

    pub fn classify(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        match &mut self.state {
            RubyState::InBlockComment => {
                if trimmed == DOC_END {
                    self.state = RubyState::Normal;
                }
                LineKind::Comment
            }
            RubyState::InHeredoc { pending } => {
                pending.check_end(line);
                if !pending.is_in_heredoc() {
                    self.state = RubyState::Normal;
                }
                LineKind::Code
            }
            RubyState::Normal => self.classify_normal(line, trimmed),
        }
    }

    fn classify_normal(&mut self, line: &str, trimmed: &str) -> LineKind {
        if trimmed == DOC_BEGIN {
            self.state = RubyState::InBlockComment;
            return LineKind::Comment;
        }
        if trimmed.starts_with(SHEBANG) {
            return LineKind::Code;
        }
        if trimmed.starts_with(COMMENT) {
            return LineKind::Comment;
        }

        let hash = find_unquoted(line, COMMENT, 0);

        let openers = find_heredoc_openers(line, hash);
        if !openers.is_empty() {
            let mut pending = HeredocContext::new();
            openers.into_iter().for_each(|id| pending.push(id));
            self.state = RubyState::InHeredoc { pending };
            return LineKind::Code;
        }

        match hash {
            Some(pos) if line[..pos].trim().is_empty() => LineKind::Comment,
            _ => LineKind::Code,
        }
    }
}
