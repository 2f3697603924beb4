//! Error types for loading project inputs
//!
//! The calculation core is total over its numeric domain and never returns these;
//! they only come out of the JSON/CSV loaders.

use std::path::PathBuf;

/// Errors raised while reading project or strategy inputs
#[derive(Debug, thiserror::Error)]
pub enum AppraisalError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

impl AppraisalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppraisalError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppraisalError>;
