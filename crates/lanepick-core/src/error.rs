// Error types shared across the picker.

use std::path::PathBuf;

use thiserror::Error;

use crate::source::FetchError;

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed store line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("invalid JSON in [{section}] {key}: {source}")]
    Json {
        section: String,
        key: String,
        source: serde_json::Error,
    },

    #[error("stored pick count for `{key}` is not a number: {value:?}")]
    BadCount { key: String, value: String },
}

// ---------------------------------------------------------------------------
// Index/range selection errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("`{0}` is not a valid range, expected [x-y]")]
    BadRange(String),

    #[error("numbering starts at 1")]
    ZeroIndex,

    #[error("{index} is not on the list (1..={len})")]
    OutOfBounds { index: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors that end a picker session. All of them are fatal.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("too many invalid answers at the {menu} prompt")]
    InputExhausted { menu: &'static str, message: &'static str },

    #[error("no champions left to choose from")]
    NoChampionsLeft,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PickerError {
    /// The short line shown to the player before the process exits.
    pub fn exit_message(&self) -> String {
        match self {
            PickerError::InputExhausted { message, .. } => (*message).to_string(),
            PickerError::NoChampionsLeft => "No more champions left to choose from.".to_string(),
            other => other.to_string(),
        }
    }
}
