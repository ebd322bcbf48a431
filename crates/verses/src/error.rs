// ABOUTME: Error types for passage transformation.
// ABOUTME: Provides TransformError with Parse and Serialize variants plus convenience helpers.

use std::fmt;
use thiserror::Error;

/// Errors that can abort a passage transformation.
///
/// Anomalies in the verse markup itself (missing ids, unmatched line-group
/// markers, empty elements) are never errors; they pass through unchanged.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input could not be parsed as an HTML fragment.
    #[error("failed to parse HTML fragment: {0}")]
    Parse(String),

    /// The rebuilt tree could not be rendered back to text.
    #[error("failed to render node")]
    Serialize(#[source] fmt::Error),
}

impl TransformError {
    /// Creates a Parse error with a custom message.
    pub fn parse(msg: impl Into<String>) -> Self {
        TransformError::Parse(msg.into())
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, TransformError::Parse(_))
    }

    /// Returns true if this is a Serialize error.
    pub fn is_serialize(&self) -> bool {
        matches!(self, TransformError::Serialize(_))
    }
}

impl From<fmt::Error> for TransformError {
    fn from(err: fmt::Error) -> Self {
        TransformError::Serialize(err)
    }
}
