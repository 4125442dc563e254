//! Reading and decoding source documents into lines.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use sha2::Digest;
use tdl_model::InferenceOptions;

use crate::error::{IngestError, Result};

/// Maximum source file size (500 MB default).
pub const MAX_SOURCE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options for reading a source document and inferring its table.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Files larger than this are rejected before reading.
    pub max_file_size: u64,
    /// Column type inference settings.
    pub inference: InferenceOptions,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_SOURCE_FILE_SIZE,
            inference: InferenceOptions::default(),
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn with_inference(mut self, inference: InferenceOptions) -> Self {
        self.inference = inference;
        self
    }
}

/// A decoded source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Lines without terminators, in file order.
    pub lines: Vec<String>,
    /// SHA-256 of the raw bytes, hex encoded.
    pub fingerprint: String,
    /// Name of the encoding used to decode the bytes.
    pub encoding: &'static str,
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Read and decode a source file.
pub fn read_source(path: &Path, options: &IngestOptions) -> Result<SourceDocument> {
    check_file_size(path, options.max_file_size)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let (encoding, lines) = decode(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = lines.len(),
        encoding,
        "read source document"
    );
    Ok(SourceDocument {
        lines,
        fingerprint: fingerprint(&bytes),
        encoding,
    })
}

/// Read a source file as lines.
pub fn read_lines(path: &Path, options: &IngestOptions) -> Result<Vec<String>> {
    read_source(path, options).map(|document| document.lines)
}

/// Decode raw bytes into lines.
///
/// A UTF-8, UTF-16LE or UTF-16BE byte order mark selects the encoding;
/// otherwise the bytes must be valid UTF-8. Malformed input is an error, never
/// a best-effort guess.
pub fn decode_lines(bytes: &[u8]) -> Result<Vec<String>> {
    decode(bytes).map(|(_, lines)| lines)
}

/// Split text into lines, dropping `\n` and `\r\n` terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// SHA-256 of `bytes`, hex encoded.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

fn decode(bytes: &[u8]) -> Result<(&'static str, Vec<String>)> {
    let (encoding, bom_len): (&'static Encoding, usize) =
        Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .ok_or(IngestError::InvalidEncoding {
            encoding: encoding.name(),
        })?;
    Ok((encoding.name(), split_lines(&text)))
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
