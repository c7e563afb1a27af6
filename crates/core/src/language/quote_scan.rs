// crates/core/src/language/quote_scan.rs
//! 引用符を考慮したマーカー検索
//!
//! Locates comment markers that sit outside single- or double-quoted text on a
//! single line. Both classifiers share this primitive so that a `//` inside
//! `"http://..."` or a `#` inside `'#{x}'` never opens a comment.
//!
//! Quote tracking is deliberately line-local: every call starts outside any
//! quote, and a backslash always consumes the following byte.
//!
//! ```rust
//! use linetally_core::language::quote_scan::find_unquoted;
//!
//! assert_eq!(find_unquoted(r#"puts("// no") // yes"#, "//", 0), Some(14));
//! assert_eq!(find_unquoted("char c = '/';", "/", 0), None);
//! ```

/// 1行内の引用符状態
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuoteState {
    in_single: bool,
    in_double: bool,
    escaped: bool,
}

impl QuoteState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_single: false,
            in_double: false,
            escaped: false,
        }
    }

    /// Returns `true` while inside a quoted region.
    #[must_use]
    pub const fn is_quoted(self) -> bool {
        self.in_single || self.in_double
    }

    /// Feeds one byte. Returns `true` when the byte was consumed by the quote
    /// machinery (escape, escaped byte, or quote toggle) and therefore cannot
    /// start a marker match.
    pub fn advance(&mut self, b: u8) -> bool {
        if self.escaped {
            self.escaped = false;
            return true;
        }
        match b {
            b'\\' => {
                self.escaped = true;
                true
            }
            b'"' if !self.in_single => {
                self.in_double = !self.in_double;
                true
            }
            b'\'' if !self.in_double => {
                self.in_single = !self.in_single;
                true
            }
            _ => false,
        }
    }
}

/// 引用符の外側で最初に現れる `marker` の位置を返す
///
/// The search (and quote tracking) starts at byte offset `from`. Returns
/// `None` when the marker is empty, when it cannot fit in the remaining text,
/// or when every occurrence is quoted.
#[must_use]
pub fn find_unquoted(line: &str, marker: &str, from: usize) -> Option<usize> {
    let bytes = line.as_bytes();
    let needle = marker.as_bytes();

    if needle.is_empty() || from > bytes.len() || bytes.len() - from < needle.len() {
        return None;
    }

    let last_start = bytes.len() - needle.len();
    let mut state = QuoteState::new();
    let mut i = from;
    while i <= last_start {
        if !state.advance(bytes[i]) && !state.is_quoted() && bytes[i..].starts_with(needle) {
            return Some(i);
        }
        i += 1;
    }

    None
}

/// `pos` の位置が引用符の外側かどうか（行頭から走査）
///
/// A position occupied by an escaped byte or a quote character itself is
/// never reported as unquoted.
#[must_use]
pub fn is_unquoted(line: &str, pos: usize) -> bool {
    let bytes = line.as_bytes();
    if pos >= bytes.len() {
        return false;
    }

    let mut state = QuoteState::new();
    for &b in &bytes[..pos] {
        state.advance(b);
    }

    !state.escaped && !state.is_quoted()
}
