// src/settings.rs
//! YAML 設定ファイル
//!
//! ```yaml
//! block_comment_policy: trailing-code
//! map_ext:
//!   inl: c++
//!   rbi: ruby
//! filenames:
//!   ruby: [Steepfile]
//! exclude:
//!   - vendor/
//! hidden: false
//! git_ignore: true
//! ```
//!
//! Every key is optional. Command-line options win over the file.

use crate::error::{AppError, Result};
use linetally_core::BlockCommentPolicy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub block_comment_policy: Option<BlockCommentPolicy>,
    /// extension -> language alias
    pub map_ext: BTreeMap<String, String>,
    /// language alias -> exact file names
    pub filenames: BTreeMap<String, Vec<String>>,
    pub exclude: Vec<String>,
    pub hidden: Option<bool>,
    pub git_ignore: Option<bool>,
}

impl Settings {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    /// Returns [`AppError::Settings`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let settings_err = |message: String| AppError::Settings {
            path: path.to_path_buf(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| settings_err(e.to_string()))?;
        let settings = Self::from_yaml_str(&text).map_err(|e| settings_err(e.to_string()))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// # Errors
    /// Returns the YAML error for malformed input or unknown keys.
    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            log::warn!("settings file is empty; using defaults");
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_settings() {
        let yaml = "block_comment_policy: trailing-code\n\
                    map_ext:\n  inl: c++\n\
                    filenames:\n  ruby: [Steepfile, Buildfile]\n\
                    exclude: [vendor/]\n\
                    hidden: true\n\
                    git_ignore: false\n";
        let s = Settings::from_yaml_str(yaml).unwrap();
        assert_eq!(s.block_comment_policy, Some(BlockCommentPolicy::TrailingCode));
        assert_eq!(s.map_ext.get("inl").map(String::as_str), Some("c++"));
        assert_eq!(s.filenames["ruby"], vec!["Steepfile", "Buildfile"]);
        assert_eq!(s.exclude, vec!["vendor/"]);
        assert_eq!(s.hidden, Some(true));
        assert_eq!(s.git_ignore, Some(false));
    }

    #[test]
    fn test_empty_and_partial_settings() {
        assert_eq!(Settings::from_yaml_str("").unwrap(), Settings::default());
        let s = Settings::from_yaml_str("hidden: true\n").unwrap();
        assert_eq!(s.hidden, Some(true));
        assert!(s.map_ext.is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Settings::from_yaml_str("colour: blue\n").is_err());
        assert!(Settings::from_yaml_str("block_comment_policy: sideways\n").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hidden: [not, a, bool]").unwrap();
        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Settings { .. }));
        assert_eq!(err.exit_code(), 5);

        let missing = Settings::load(Path::new("/no/such/linetally.yml")).unwrap_err();
        assert!(matches!(missing, AppError::Settings { .. }));
    }
}
