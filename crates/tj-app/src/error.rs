//! Error types for the tj-app service layer.

use std::path::PathBuf;

use crate::optimize::OptimizeError;
use crate::sweep::SweepError;

/// Application error type that wraps errors from the backend crates
/// and gives front-ends one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration '{config}' is outside the cycle's physical domain: {reason}")]
    NonPhysical { config: String, reason: String },

    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    #[error("Optimization error: {0}")]
    Optimize(#[from] OptimizeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tj-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tj_project::ProjectError> for AppError {
    fn from(err: tj_project::ProjectError) -> Self {
        match err {
            tj_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Config(other.to_string()),
        }
    }
}

impl From<tj_project::ValidationError> for AppError {
    fn from(err: tj_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tj_results::ResultsError> for AppError {
    fn from(err: tj_results::ResultsError) -> Self {
        match err {
            tj_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
