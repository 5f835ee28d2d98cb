use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpendzError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Expense not found: {0}")]
    NotFound(u64),

    #[error("Corrupt data file {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("{0} is out of range")]
    Overflow(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SpendzError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SpendzError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpendzError>;
