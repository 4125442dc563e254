//! Error types for data ingestion.

use std::path::PathBuf;

use tdl_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading and normalizing a source document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Decoding Errors ===
    /// Bytes are not valid in the detected encoding.
    #[error("input is not valid {encoding}")]
    InvalidEncoding { encoding: &'static str },

    // === Normalization Errors ===
    /// No delimiter in the cascade occurs consistently on every line.
    #[error("no consistent delimiter found across {lines} lines")]
    NoConsistentDelimiter { lines: usize },

    // === Model Errors ===
    /// Column or table construction failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
