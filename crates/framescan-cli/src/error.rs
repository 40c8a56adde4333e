//! Error types for framescan CLI operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for framescan CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The trace file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict mode found frame lines that no grammar accepted.
    #[error("{0} frame line(s) were not recognized")]
    UnrecognizedFrames(usize),
}

/// A specialized Result type for framescan CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_failures_are_json_errors() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);

        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
