//! Source file to table pipeline.

use std::path::Path;

use tdl_model::{InferenceOptions, Table};
use tracing::{info, info_span};

use crate::delimiter::Delimiter;
use crate::error::Result;
use crate::normalize::{NormalizedDocument, normalize_document};
use crate::source::{IngestOptions, read_source};

/// A table together with the canonical lines it was built from.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// SHA-256 of the source bytes.
    pub fingerprint: String,
    pub document: NormalizedDocument,
    pub table: Table,
}

impl LoadedTable {
    pub fn delimiter(&self) -> Delimiter {
        self.document.delimiter
    }

    pub fn canonical_lines(&self) -> &[String] {
        &self.document.lines
    }
}

/// Normalize raw lines and build a table from the canonical form.
pub fn table_from_lines<S: AsRef<str>>(
    lines: &[S],
    options: &InferenceOptions,
) -> Result<(NormalizedDocument, Table)> {
    let document = normalize_document(lines)?;
    let table = Table::from_canonical_lines(&document.lines, options)?;
    Ok((document, table))
}

/// Read, normalize and type a source file.
pub fn load_table(path: &Path, options: &IngestOptions) -> Result<LoadedTable> {
    let span = info_span!("load_table", path = %path.display());
    let _guard = span.enter();

    let source = read_source(path, options)?;
    let (document, table) = table_from_lines(&source.lines, &options.inference)?;
    info!(
        delimiter = %document.delimiter,
        columns = table.width(),
        rows = table.row_count(),
        numeric = table.numeric_columns().len(),
        "loaded table"
    );
    Ok(LoadedTable {
        fingerprint: source.fingerprint,
        document,
        table,
    })
}
