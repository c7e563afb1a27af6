// crates/core/src/counter.rs
//! ファイル1つ分の行集計
//!
//! The counter owns the per-file loop: it resets the classifier, feeds every
//! line in order and only hands back a [`LineTally`] once the input is
//! exhausted, so a partially scanned file can never leak into an aggregate.

use crate::language::LineProcessor;
use crate::tally::LineTally;

/// Bytes inspected by [`is_binary`].
pub const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Tallies an already split sequence of lines (terminators stripped).
pub fn tally_lines<I, S, P>(lines: I, classifier: &mut P) -> LineTally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: LineProcessor + ?Sized,
{
    classifier.reset();
    let mut tally = LineTally {
        files: 1,
        ..LineTally::new()
    };
    for line in lines {
        tally.record(classifier.classify_line(line.as_ref()));
    }
    tally
}

/// Fallible variant of [`tally_lines`] for line sources that can fail
/// mid-stream, such as `BufRead::lines`.
///
/// # Errors
///
/// Returns the first error yielded by `lines`; no tally is produced.
pub fn try_tally_lines<I, S, E, P>(lines: I, classifier: &mut P) -> Result<LineTally, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
    P: LineProcessor + ?Sized,
{
    classifier.reset();
    let mut tally = LineTally {
        files: 1,
        ..LineTally::new()
    };
    for line in lines {
        tally.record(classifier.classify_line(line?.as_ref()));
    }
    Ok(tally)
}

/// 文字列全体を行に分割して集計する (`\n` と `\r\n` を除去)
pub fn tally_str<P>(text: &str, classifier: &mut P) -> LineTally
where
    P: LineProcessor + ?Sized,
{
    tally_lines(text.lines(), classifier)
}

/// 先頭 8KiB に NUL バイトが含まれていればバイナリとみなす
#[must_use]
pub fn is_binary(input: &[u8]) -> bool {
    let len = input.len().min(BINARY_SNIFF_LEN);
    input[..len].contains(&0)
}
