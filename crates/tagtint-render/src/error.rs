//! Error types for rendering.
//!
//! [`RenderError`] is returned by every public rendering function. It wraps
//! scanner failures and abstracts over the template engine's errors.

use tagtint_scanner::ParseError;
use thiserror::Error;

/// Error type for rendering operations.
///
/// No partial output is produced when any of these occur.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed tag markup.
    #[error("markup error: {0}")]
    Parse(#[from] ParseError),

    /// Template syntax error or evaluation failure (e.g. an unknown field).
    #[error("template error: {0}")]
    Template(String),

    /// The data context could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Writing the rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
