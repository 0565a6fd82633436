//! Error types for corpus passes.

use thiserror::Error;

/// Failures that stop a whole load or write, as opposed to a single verse.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A file could not be read.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// A marker row could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Dependency-parse JSON did not have the expected shape.
    #[error("invalid dependency parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Ron(#[from] ron::Error),

    #[error("failed to read snapshot: {0}")]
    RonParse(#[from] ron::error::SpannedError),
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
