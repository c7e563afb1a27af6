// crates/engine/src/config.rs
use crate::options::OutputFormat;
use derive_builder::Builder;
use linetally_core::{ClassifierConfig, Language, LanguageRegistry};
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    /// Glob patterns excluded from the walk (gitignore syntax).
    #[builder(default)]
    pub exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            threads: num_cpus::get(),
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            exclude: vec![],
        }
    }
}

/// 集計対象の絞り込み
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Languages to count. Empty means every supported language.
    #[builder(default)]
    pub languages: Vec<Language>,
}

impl FilterConfig {
    #[must_use]
    pub fn allows(&self, language: Language) -> bool {
        self.languages.is_empty() || self.languages.contains(&language)
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,
    #[builder(default)]
    pub registry: LanguageRegistry,
    #[builder(default)]
    pub classifier: ClassifierConfig,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub by_file: bool,

    #[builder(default)]
    pub strict: bool,
}
