use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tdl_cli::logging::redact_value;
use tdl_cli::report::{format_cell, summarize};
use tdl_ingest::{IngestOptions, ValueDictionary, load_table, normalize_document, read_source};
use tdl_model::{DEFAULT_NULL_SENTINELS, InferenceOptions};
use tracing::{info, info_span, trace};

use crate::cli::{IdsArgs, NormalizeArgs, ProfileArgs, SourceArgs};
use crate::types::ProfileResult;

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let input = &args.source.input;
    let span = info_span!("normalize", input = %input.display());
    let _guard = span.enter();

    let options = ingest_options(&args.source, InferenceOptions::default());
    let source =
        read_source(input, &options).with_context(|| format!("read {}", input.display()))?;
    let document = normalize_document(&source.lines)
        .with_context(|| format!("normalize {}", input.display()))?;
    info!(delimiter = %document.delimiter, lines = document.lines.len(), "normalized");

    let text = canonical_text(&document.lines);
    match &args.output {
        Some(path) => write_file(path, &text)?,
        None => io::stdout()
            .write_all(text.as_bytes())
            .context("write stdout")?,
    }
    Ok(())
}

pub fn run_profile(args: &ProfileArgs) -> Result<ProfileResult> {
    let input = &args.source.input;
    let options = ingest_options(&args.source, inference_options(args));
    let loaded =
        load_table(input, &options).with_context(|| format!("profile {}", input.display()))?;

    for column in loaded.table.columns() {
        let mode = format_cell(column.mode());
        trace!(
            column = column.name(),
            value_type = %column.value_type(),
            mode = redact_value(&mode),
            "column statistics"
        );
    }

    if let Some(path) = &args.canonical_out {
        write_file(path, &canonical_text(loaded.canonical_lines()))?;
    }
    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&loaded.table).context("serialize table")?;
        write_file(path, &json)?;
    }

    Ok(ProfileResult {
        input: input.clone(),
        fingerprint: loaded.fingerprint.clone(),
        delimiter: loaded.delimiter(),
        rows: loaded.table.row_count(),
        columns: summarize(&loaded.table),
        numeric_columns: loaded.table.numeric_columns().to_vec(),
        json: args.json.clone(),
        canonical_out: args.canonical_out.clone(),
    })
}

pub fn run_ids(args: &IdsArgs) -> Result<()> {
    let input = &args.source.input;
    let options = ingest_options(&args.source, InferenceOptions::default());
    let source =
        read_source(input, &options).with_context(|| format!("read {}", input.display()))?;
    let document = normalize_document(&source.lines)
        .with_context(|| format!("normalize {}", input.display()))?;
    let dictionary = ValueDictionary::from_canonical_lines(&document.lines)
        .with_context(|| format!("assign ids for {}", input.display()))?;
    let json = serde_json::to_string_pretty(&dictionary).context("serialize ids")?;
    println!("{json}");
    Ok(())
}

fn ingest_options(source: &SourceArgs, inference: InferenceOptions) -> IngestOptions {
    IngestOptions::new()
        .with_max_file_size(source.max_file_size)
        .with_inference(inference)
}

fn inference_options(args: &ProfileArgs) -> InferenceOptions {
    let defaults: &[&str] = if args.no_default_null_tokens {
        &[]
    } else {
        DEFAULT_NULL_SENTINELS
    };
    let tokens = defaults
        .iter()
        .map(|token| (*token).to_string())
        .chain(args.null_tokens.iter().cloned());
    InferenceOptions::new().with_null_sentinels(tokens)
}

fn canonical_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
