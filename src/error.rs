use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not load '{path}': {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CipherError {
    pub(crate) fn load(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        CipherError::Load {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

pub type CfResult<T> = Result<T, CipherError>;
