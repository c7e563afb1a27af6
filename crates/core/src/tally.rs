// crates/core/src/tally.rs
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::language::LineKind;

/// 行数の集計結果
///
/// A single file scan produces a tally with `files == 1`; per-language and
/// grand totals are built by merging finished file tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineTally {
    /// Number of code lines.
    pub code: usize,
    /// Number of comment lines.
    pub comment: usize,
    /// Number of blank lines.
    pub blank: usize,
    /// Number of files that contributed.
    pub files: usize,
}

impl LineTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            comment: 0,
            blank: 0,
            files: 0,
        }
    }

    /// Total physical lines (`code + comment + blank`).
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.code + self.comment + self.blank
    }

    /// Records one classified line.
    pub const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
        }
    }

    /// 別の集計結果をフィールドごとに加算する
    pub const fn merge(&mut self, other: &Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
        self.files += other.files;
    }
}

impl Add for LineTally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.merge(&rhs);
        self
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Sum for LineTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for LineTally {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, t| {
            acc.merge(t);
            acc
        })
    }
}
