//! Toolkit error types

use thiserror::Error;
use shared::SharedError;

/// Result type for toolkit operations
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Toolkit error types
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Draw pool is empty: add participants or reset the winners")]
    EmptyPool,

    #[error("Invalid draw count: {count}")]
    InvalidDrawCount { count: usize },

    #[error("Invalid group size: {size}")]
    InvalidGroupSize { size: usize },

    #[error("Storage {operation} failed for slot {key}: {message}")]
    StorageError { operation: String, key: String, message: String },

    #[error("Configuration error: {field}: {message}")]
    ConfigurationError { field: String, message: String },

    #[error("No async runtime available for background work")]
    RuntimeUnavailable,

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ToolkitError {
    pub fn storage(operation: &str, key: &str, message: impl ToString) -> Self {
        ToolkitError::StorageError {
            operation: operation.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn config(field: &str, message: impl ToString) -> Self {
        ToolkitError::ConfigurationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
