// crates/engine/src/stats.rs
use crate::error::EngineError;
use linetally_core::{Language, LineTally};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Result of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub path: PathBuf,
    pub language: Language,
    #[serde(flatten)]
    pub tally: LineTally,
}

impl FileStats {
    #[must_use]
    pub const fn new(path: PathBuf, language: Language, tally: LineTally) -> Self {
        Self {
            path,
            language,
            tally,
        }
    }
}

/// Everything a run produced: per-file results and per-file failures.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<FileStats>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_files(&self.stats)
    }
}

/// 言語ごとの集計行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub language: Language,
    #[serde(flatten)]
    pub tally: LineTally,
}

/// 言語別集計と総計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub languages: Vec<LanguageSummary>,
    pub total: LineTally,
}

impl Summary {
    /// Single-threaded reduction of finished file results, in language order.
    #[must_use]
    pub fn from_files(files: &[FileStats]) -> Self {
        let mut by_language: BTreeMap<Language, LineTally> = BTreeMap::new();
        for file in files {
            by_language.entry(file.language).or_default().merge(&file.tally);
        }

        let total = by_language.values().sum();
        let languages = by_language
            .into_iter()
            .map(|(language, tally)| LanguageSummary { language, tally })
            .collect();

        Self { languages, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
