//! Error types for parsing schema documents and running a batch.
//!
//! Parse errors are scoped to one schema file; the batch keeps going.
//! Only `BatchError` aborts a run.

use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// Failure to turn one schema document into a `SchemaNode`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text is not JSON
    #[error("invalid JSON at path {path}: {message}")]
    Syntax { path: String, message: String },

    /// A node carries no string `type` discriminator
    #[error("node at '{pointer}' has no 'type'")]
    MissingKind { pointer: String },

    /// A node's `type` is outside the recognized kinds
    #[error("node at '{pointer}' has unknown type '{kind}'")]
    UnknownKind { pointer: String, kind: String },

    /// A known field is present with the wrong JSON type
    #[error("'{pointer}/{field}' must be {expected}")]
    InvalidField {
        pointer: String,
        field: &'static str,
        expected: &'static str,
    },
}

/// Fatal batch errors.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("directory unavailable: {}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid include pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Why a single input produced no output document.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(tag = "stage", content = "message", rename_all = "snake_case")]
pub enum FailureReason {
    #[error("read failed: {0}")]
    Read(String),
    #[error("parse failed: {0}")]
    Parse(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// Per-file failure recorded in the batch report.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub file: PathBuf,
    pub reason: FailureReason,
}

impl From<ParseError> for FailureReason {
    fn from(error: ParseError) -> Self {
        FailureReason::Parse(error.to_string())
    }
}
