// crates/core/src/registry.rs
//! 言語レジストリ
//!
//! Maps file names to languages and languages to classifiers. The built-in
//! table is static; a [`LanguageRegistry`] value layers user supplied
//! extension overrides and extra file names on top of it.
//!
//! Lookup order for a path:
//!
//! 1. extension overrides (`map_extension`), case-insensitive;
//! 2. exact file name (extra names first, then the built-in special names);
//! 3. built-in extensions, case-insensitive.
//!
//! ```rust
//! use std::path::Path;
//! use linetally_core::registry::{Language, LanguageRegistry};
//!
//! let mut registry = LanguageRegistry::builtin();
//! assert_eq!(registry.detect(Path::new("src/main.CPP")), Some(Language::CFamily));
//! assert_eq!(registry.detect(Path::new("Gemfile")), Some(Language::Ruby));
//! assert_eq!(registry.detect(Path::new("notes.txt")), None);
//!
//! registry.map_extension("inl", Language::CFamily);
//! assert_eq!(registry.detect(Path::new("vec.inl")), Some(Language::CFamily));
//! ```

use core::fmt;
use core::str::FromStr;
use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::language::{ClassifierKind, LineClassifier};

/// 対応言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "C/C++")]
    CFamily,
    #[serde(rename = "Ruby")]
    Ruby,
}

impl Language {
    #[must_use]
    pub fn descriptor(self) -> &'static LanguageDescriptor {
        match self {
            Self::CFamily => &BUILTIN[0],
            Self::Ruby => &BUILTIN[1],
        }
    }

    /// Display name used in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Builds a fresh classifier for one file scan.
    #[must_use]
    pub fn classifier(self, config: ClassifierConfig) -> LineClassifier {
        LineClassifier::new(self.descriptor().classifier, config)
    }

    /// エイリアスまたは表示名から言語を引く (大文字小文字を区別しない)
    #[must_use]
    pub fn from_alias(value: &str) -> Option<Self> {
        let value = value.trim();
        BUILTIN
            .iter()
            .find(|d| {
                d.name.eq_ignore_ascii_case(value)
                    || d.aliases.iter().any(|a| a.eq_ignore_ascii_case(value))
            })
            .map(|d| d.language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown language name or alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

/// 言語の静的定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub language: Language,
    /// Display name.
    pub name: &'static str,
    /// Names accepted on the command line.
    pub aliases: &'static [&'static str],
    /// Extensions without the leading dot, matched case-insensitively.
    pub extensions: &'static [&'static str],
    /// Extension-less file names, matched exactly.
    pub filenames: &'static [&'static str],
    pub classifier: ClassifierKind,
}

static BUILTIN: [LanguageDescriptor; 2] = [
    LanguageDescriptor {
        language: Language::CFamily,
        name: "C/C++",
        aliases: &["c", "c++", "cpp", "cc", "cxx"],
        extensions: &["c", "h", "cc", "cpp", "cxx", "c++", "hh", "hpp", "hxx", "h++"],
        filenames: &[],
        classifier: ClassifierKind::CFamily,
    },
    LanguageDescriptor {
        language: Language::Ruby,
        name: "Ruby",
        aliases: &["ruby", "rb"],
        extensions: &[
            "rb", "rbw", "rake", "gemspec", "ru", "thor", "podspec", "rbs", "rbx", "rjs", "rabl",
            "rxml",
        ],
        filenames: &[
            "Rakefile",
            "Gemfile",
            "Capfile",
            "Guardfile",
            "Brewfile",
            "Vagrantfile",
            "Thorfile",
            "Berksfile",
            "Deliverfile",
            "Fastfile",
            "Snapfile",
            "Podfile",
            "Dangerfile",
            "Appfile",
            "Matchfile",
            "Pluginfile",
            "Scanfile",
            "Gymfile",
            "Cartfile",
        ],
        classifier: ClassifierKind::Ruby,
    },
];

/// ファイル名から言語を判定するレジストリ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    ext_overrides: HashMap<String, Language>,
    extra_filenames: HashMap<String, Language>,
}

impl LanguageRegistry {
    /// Registry with only the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// 拡張子を指定言語に割り当てる (組み込み定義より優先)
    pub fn map_extension(&mut self, ext: &str, language: Language) {
        self.ext_overrides.insert(normalize_ext(ext), language);
    }

    /// Registers an additional exact file name.
    pub fn add_filename(&mut self, name: impl Into<String>, language: Language) {
        self.extra_filenames.insert(name.into(), language);
    }

    /// パスから言語を判定する。対象外なら `None`
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<Language> {
        let file_name = path.file_name()?.to_str()?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        if let Some(lang) = ext.as_deref().and_then(|e| self.ext_overrides.get(e)) {
            return Some(*lang);
        }
        if let Some(lang) = self.extra_filenames.get(file_name) {
            return Some(*lang);
        }
        if let Some(d) = BUILTIN.iter().find(|d| d.filenames.iter().any(|n| *n == file_name)) {
            return Some(d.language);
        }

        let ext = ext?;
        BUILTIN
            .iter()
            .find(|d| d.extensions.iter().any(|e| *e == ext))
            .map(|d| d.language)
    }
}

fn normalize_ext(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
