use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Field-level failures
// ---------------------------------------------------------------------------

/// Why a single record could not be turned into a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("missing field {index}")]
    MissingField { index: usize },

    #[error("field {index}: '{text}' is not a number")]
    Number { index: usize, text: String },

    #[error("field {index}: '{text}' is not a timestamp (expected {pattern})")]
    Timestamp {
        index: usize,
        text: String,
        pattern: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Ingestion failures
// ---------------------------------------------------------------------------

/// Fatal ingestion errors. Either kind means no dataset was produced.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input could not be opened, or reading it failed part way.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record failed to parse under the strict policy.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: FieldError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
