// crates/core/src/language/heredoc_utils.rs
//! ヒアドキュメント処理ユーティリティ
//!
//! 複数行にわたる文字列リテラル（ヒアドキュメント）の状態管理と、
//! 開始記号 (`<<EOF`, `<<-EOF`, `<<~'EOF'`) の検出を提供します。

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use super::quote_scan::is_unquoted;

static HEREDOC_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<<[-~]?(?:([A-Za-z_]\w*)|'([^']+)'|"([^"]+)"|`([^`]+)`)"#)
        .expect("heredoc opener pattern is valid")
});

/// 行内のヒアドキュメント開始記号を検出し、終了識別子を出現順に返す
///
/// Candidates are accepted only when the `<<` is outside quotes and appears
/// before `limit` (the start of a trailing comment, if any).
///
/// A `<<` glued to the end of a value (`arr<<item`, `list[0]<<x`) is a shift
/// and is skipped. The check is lexical: `b <<c` still counts as a heredoc,
/// which is how Ruby reads it when `b` is a method call.
#[must_use]
pub fn find_heredoc_openers(line: &str, limit: Option<usize>) -> Vec<String> {
    HEREDOC_OPENER
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let start = whole.start();
            if limit.is_some_and(|l| start >= l)
                || follows_value(line, start)
                || !is_unquoted(line, start)
            {
                return None;
            }
            (1..=4)
                .find_map(|i| caps.get(i))
                .map(|m| m.as_str().to_owned())
        })
        .collect()
}

/// `<<` の直前が識別子や閉じ括弧ならシフト演算子
fn follows_value(line: &str, pos: usize) -> bool {
    line[..pos]
        .bytes()
        .next_back()
        .is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b')' | b']' | b'}'))
}

/// ヒアドキュメントの状態管理
///
/// `foo(<<A, <<B)` のように1行で複数開始された場合は、出現順に本文が続くため
/// キューで管理します。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeredocContext {
    pending: VecDeque<String>,
}

impl HeredocContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// ヒアドキュメント内かどうか
    #[must_use]
    pub fn is_in_heredoc(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Terminator of the body currently being read.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    pub fn push(&mut self, identifier: String) {
        self.pending.push_back(identifier);
    }

    /// 現在の行がヒアドキュメントの終了かどうかをチェックし、状態を更新する
    ///
    /// 終了した場合は true を返します。
    pub fn check_end(&mut self, line: &str) -> bool {
        if self.current().is_some_and(|id| line.trim() == id) {
            self.pending.pop_front();
            return true;
        }
        false
    }
}
