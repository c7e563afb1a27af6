// crates/core/src/language/mod.rs
//! 言語別の行分類
//!
//! 各言語の分類ロジックと状態を [`LineClassifier`] Enum で保持し、
//! Enum Dispatch で適切な分類器に処理を委譲します。

pub mod classifiers;
pub mod heredoc_utils;
pub mod processor_trait;
pub mod quote_scan;

use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
pub use classifiers::{CFamilyClassifier, RubyClassifier};
pub use processor_trait::{LineKind, LineProcessor};

/// 生成する分類器の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierKind {
    /// `//` と `/* */`
    CFamily,
    /// `#`, `=begin`/`=end`, ヒアドキュメント
    Ruby,
}

/// 行分類器 (Enum Dispatch)
///
/// One value per file scan. Build a fresh one with [`LineClassifier::new`]
/// (or call [`LineProcessor::reset`]) before feeding another file.
#[derive(Debug, Clone)]
pub enum LineClassifier {
    /// C系言語 (//, /* */) - ネストなし
    CFamily(CFamilyClassifier),
    /// Ruby (#, =begin/=end, heredoc)
    Ruby(RubyClassifier),
}

impl LineClassifier {
    #[must_use]
    pub const fn new(kind: ClassifierKind, config: ClassifierConfig) -> Self {
        match kind {
            ClassifierKind::CFamily => Self::CFamily(CFamilyClassifier::new(config)),
            ClassifierKind::Ruby => Self::Ruby(RubyClassifier::new()),
        }
    }
}

impl LineProcessor for LineClassifier {
    fn classify_line(&mut self, line: &str) -> LineKind {
        match self {
            Self::CFamily(p) => p.classify(line),
            Self::Ruby(p) => p.classify(line),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::CFamily(p) => p.reset(),
            Self::Ruby(p) => p.reset(),
        }
    }

    fn is_in_multiline_context(&self) -> bool {
        match self {
            Self::CFamily(p) => p.is_in_multiline_context(),
            Self::Ruby(p) => p.is_in_multiline_context(),
        }
    }
}
