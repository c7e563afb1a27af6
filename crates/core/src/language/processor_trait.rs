// crates/core/src/language/processor_trait.rs
//! 行分類トレイト
//!
//! 各言語の分類器に共通のインターフェースを提供します。
//!
//! # Example
//!
//! ```rust
//! use linetally_core::language::{LineKind, LineProcessor};
//!
//! struct HashOnly;
//!
//! impl LineProcessor for HashOnly {
//!     fn classify_line(&mut self, line: &str) -> LineKind {
//!         let trimmed = line.trim();
//!         if trimmed.is_empty() {
//!             LineKind::Blank
//!         } else if trimmed.starts_with('#') {
//!             LineKind::Comment
//!         } else {
//!             LineKind::Code
//!         }
//!     }
//! }
//!
//! let mut p = HashOnly;
//! assert_eq!(p.classify_line("# note"), LineKind::Comment);
//! ```

use serde::{Deserialize, Serialize};

/// 1行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// 空白のみの行
    Blank,
    /// コメント行
    Comment,
    /// コード行
    Code,
}

/// 行分類トレイト
///
/// 実装はファイル1つ分の状態を保持します。行は先頭から順番に渡す必要があり、
/// 別ファイルを処理する前には `reset` を呼び出します。
pub trait LineProcessor: Send {
    /// Classifies one physical line (without its terminator).
    fn classify_line(&mut self, line: &str) -> LineKind;

    /// Restores the initial state.
    fn reset(&mut self) {}

    /// 複数行にまたがる構文（ブロックコメント、ヒアドキュメント）の途中かどうか
    fn is_in_multiline_context(&self) -> bool {
        false
    }
}

impl<P: LineProcessor + ?Sized> LineProcessor for Box<P> {
    fn classify_line(&mut self, line: &str) -> LineKind {
        (**self).classify_line(line)
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn is_in_multiline_context(&self) -> bool {
        (**self).is_in_multiline_context()
    }
}
