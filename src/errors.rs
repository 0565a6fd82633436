//! Error types for the core engine.
//!
//! Unclassified markers are never errors. Everything here is either a
//! structurally invalid input for one verse or a misuse of the registry.

use thiserror::Error;

use crate::verse_key::VerseKey;

/// Structural problems in a parent-pointer array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepthError {
    /// A head index points past the end of the token list.
    #[error("token {token} has head {head}, outside 0..{token_count}")]
    HeadOutOfRange {
        token: usize,
        head: i64,
        token_count: usize,
    },

    /// The map form has an entry for a token past `token_count`.
    #[error("token {token} is outside 0..{token_count}")]
    TokenOutOfRange { token: usize, token_count: usize },

    /// The map form left a token without any head entry.
    #[error("token {token} has no head entry")]
    MissingHead { token: usize },

    /// Tokens that never reach the root sentinel by following heads upward.
    #[error("tokens {nodes:?} are not reachable from the root (cycle)")]
    Cycle { nodes: Vec<usize> },
}

/// Misuse of a [`crate::VerseRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("verse {key} was already registered")]
    DuplicateKey { key: VerseKey },
}

/// Invalid classification tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read scheme config {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse scheme config: {message}")]
    Parse { message: String },

    #[error("code {code:?} is listed more than once in the {scheme} scheme")]
    DuplicateCode { scheme: &'static str, code: String },

    #[error("blank code in the {scheme} scheme")]
    BlankCode { scheme: &'static str },
}

/// Malformed verse keys or references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerseKeyError {
    #[error("malformed verse key {input:?}")]
    Malformed { input: String },

    #[error("unknown book {book:?}")]
    UnknownBook { book: String },
}

/// Any failure of the core engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaamimError {
    #[error(transparent)]
    Depth(#[from] DepthError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    VerseKey(#[from] VerseKeyError),
}

/// Result type for core operations.
pub type TaamimResult<T> = Result<T, TaamimError>;

/// A failure tied to the verse it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("verse {key}: {source}")]
pub struct VerseError {
    pub key: VerseKey,
    #[source]
    pub source: TaamimError,
}

impl VerseError {
    pub fn new(key: VerseKey, source: impl Into<TaamimError>) -> Self {
        VerseError {
            key,
            source: source.into(),
        }
    }
}
