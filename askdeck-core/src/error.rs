//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Question not found
    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    /// Data service returned an application-level error
    #[error("API error: {message}")]
    ApiError { message: String },

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Media resolution error
    #[error("Media error: {0}")]
    MediaError(String),
}

/// Core layer result type
pub type CoreResult<T> = Result<T, CoreError>;
