//! Error types for status log configuration.

use docview::DocError;
use thiserror::Error;

/// Result type for status log operations.
pub type StatusLogResult<T> = Result<T, StatusLogError>;

/// Errors that can occur while building a status log or its sources.
#[derive(Debug, Error)]
pub enum StatusLogError {
    /// A configuration document has the wrong shape or content.
    #[error("invalid document: {0}")]
    Document(#[from] DocError),

    /// A field definition could not be deserialized.
    #[error("invalid field definition: {0}")]
    Field(#[from] serde_json::Error),
}
