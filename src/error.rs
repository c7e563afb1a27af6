// src/error.rs
use linetally_engine::error::EngineError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Unsupported language '{0}' (supported: c++, ruby)")]
    UnsupportedLanguage(String),

    #[error("Invalid settings file '{path}': {message}")]
    Settings { path: PathBuf, message: String },

    #[error("Invalid argument: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    /// プロセス終了コード
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::UnsupportedLanguage(_) => 2,
            Self::Engine(EngineError::PathNotFound(_)) => 3,
            Self::Engine(EngineError::FileRead { .. } | EngineError::Walk(_)) => 4,
            Self::Settings { .. } => 5,
            Self::Engine(EngineError::Config(_)) | Self::Io(_) | Self::Json(_) | Self::Yaml(_) => 99,
        }
    }
}

impl From<&AppError> for ExitCode {
    fn from(err: &AppError) -> Self {
        Self::from(err.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
