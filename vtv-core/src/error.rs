//! Error types shared across the workspace

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum VtvError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VtvError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        VtvError::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        VtvError::Config(msg.into())
    }
}

/// Result type alias for workspace operations
pub type VtvResult<T> = Result<T, VtvError>;
