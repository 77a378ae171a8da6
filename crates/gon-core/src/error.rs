//! Error types for GON parsing and value access.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Kind;

/// Errors that can be reported while loading, querying or saving a GON tree.
///
/// Structural and type errors are not returned directly by the parser or the
/// accessors: they are handed to the active [`ErrorHook`](crate::hook::ErrorHook),
/// which decides whether the operation aborts (the hook returns the error) or
/// continues best-effort (the hook swallows it).
#[derive(Error, Debug)]
pub enum GonError {
    /// The tokens ran out before a closing `}` or `]` was found.
    #[error("GON structural error: missing a closing {delimiter} ({message})")]
    Structural {
        delimiter: Delimiter,
        message: String,
    },

    /// Objects and arrays were nested deeper than the parser allows.
    #[error("GON structural error: nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    /// An accessor was invoked against a node whose kind does not support it.
    #[error("GON type error: {operation} expects {expected}, found {found}")]
    Type {
        operation: &'static str,
        expected: &'static str,
        found: Kind,
    },

    /// Integer-indexed lookup past the end of an array.
    #[error("GON index error: index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// JSON export failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a document file failed.
    #[error("GON io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The closing delimiter a structural error was waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Brace,
    Bracket,
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Brace => f.write_str("brace '}'"),
            Delimiter::Bracket => f.write_str("bracket ']'"),
        }
    }
}

impl GonError {
    /// True for errors raised while building the tree.
    pub fn is_structural(&self) -> bool {
        matches!(self, GonError::Structural { .. } | GonError::TooDeep { .. })
    }

    /// True for errors raised by an accessor used on the wrong kind of node.
    pub fn is_type_error(&self) -> bool {
        matches!(self, GonError::Type { .. })
    }
}

/// Convenience alias used throughout gon-core.
pub type Result<T> = std::result::Result<T, GonError>;
