//! Error types for Kinship operations.
//!
//! The layout computation itself never fails; [`KinshipError`] covers the
//! steps around it: reading datasets, resolving configuration, and exporting
//! the result.

use std::io;

use thiserror::Error;

/// The main error type for Kinship operations.
///
/// # Diagnostic Variants
///
/// The `Dataset` variant keeps the source text next to the JSON error, so
/// front ends can point at the offending line and column.
#[derive(Debug, Error)]
pub enum KinshipError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid dataset: {err}")]
    Dataset { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl KinshipError {
    /// Create a new `Dataset` error with the associated source text.
    pub fn new_dataset_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Dataset {
            err,
            src: src.into(),
        }
    }
}
