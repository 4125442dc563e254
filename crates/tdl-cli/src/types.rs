use std::path::PathBuf;

use tdl_cli::report::ColumnSummary;
use tdl_ingest::Delimiter;

#[derive(Debug)]
pub struct ProfileResult {
    pub input: PathBuf,
    pub fingerprint: String,
    pub delimiter: Delimiter,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    pub numeric_columns: Vec<String>,
    pub json: Option<PathBuf>,
    pub canonical_out: Option<PathBuf>,
}
