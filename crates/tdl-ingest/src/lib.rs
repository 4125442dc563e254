//! Source ingestion: delimiter detection and CSV normalization.
//!
//! This crate turns line-oriented text with an unknown delimiter into
//! canonical comma-delimited lines and hands them to `tdl-model`.
//!
//! # Features
//!
//! - **Delimiter Detection**: consistency check for a candidate delimiter
//! - **Normalization**: fixed comma -> escape swap -> tab -> triple space cascade
//! - **Source Reading**: size guard, BOM-aware decoding, content fingerprint
//! - **Value Ids**: per-column dictionaries of distinct values
//!
//! # Example
//!
//! ```
//! use tdl_ingest::{Delimiter, normalize_document};
//!
//! let document = normalize_document(&["h1\th2", "1\t2", "3\t4"]).unwrap();
//! assert_eq!(document.delimiter, Delimiter::Tab);
//! assert_eq!(document.lines, vec!["h1,h2", "1,2", "3,4"]);
//! ```

mod delimiter;
mod error;
mod intern;
mod load;
mod normalize;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimiter Detection ===
pub use delimiter::{Delimiter, delimiter_counts, is_consistent};

// === Normalization ===
pub use normalize::{NormalizedDocument, normalize, normalize_document, swap_commas_and_semicolons};

// === Source Reading ===
pub use source::{
    IngestOptions, MAX_SOURCE_FILE_SIZE, SourceDocument, check_file_size, decode_lines,
    fingerprint, read_lines, read_source, split_lines,
};

// === Tables ===
pub use load::{LoadedTable, load_table, table_from_lines};

// === Value Ids ===
pub use intern::ValueDictionary;
