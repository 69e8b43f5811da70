//! Error types for the rft-app service layer.

use std::path::PathBuf;

use rft_formulas::FormulaError;
use rft_notation::NotationError;

/// Application error type shared by the CLI and any other host.
///
/// Numeric domain problems (division by zero, VSWR below one, ...) are not errors:
/// they reach the host as sentinel text inside a [`crate::Report`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rft-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<NotationError> for AppError {
    fn from(err: NotationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<FormulaError> for AppError {
    fn from(err: FormulaError) -> Self {
        AppError::UnknownUnit(err.to_string())
    }
}
