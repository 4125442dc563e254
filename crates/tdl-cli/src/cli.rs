//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tdl_ingest::MAX_SOURCE_FILE_SIZE;

#[derive(Parser)]
#[command(
    name = "tdl",
    version,
    about = "Tabular Data Lens - normalize delimited text and profile typed columns",
    long_about = "Normalize comma, tab, or triple-space delimited text into canonical CSV.\n\n\
                  Infers one type per column (int, float, string, empty) and reports\n\
                  mode, mean, and median."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite a delimited file as canonical comma-separated lines.
    Normalize(NormalizeArgs),

    /// Infer column types and print per-column statistics.
    Profile(ProfileArgs),

    /// Print ids for the distinct values of each column as JSON.
    Ids(IdsArgs),
}

/// Options shared by every command that reads a source file.
#[derive(Args)]
pub struct SourceArgs {
    /// Source file (UTF-8, or UTF-16 with a byte order mark).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_SOURCE_FILE_SIZE)]
    pub max_file_size: u64,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write canonical lines here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the typed table as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also write the canonical lines (debug sidecar).
    #[arg(long = "canonical-out", value_name = "PATH")]
    pub canonical_out: Option<PathBuf>,

    /// Extra token that marks a missing value (repeatable).
    #[arg(long = "null-token", value_name = "TOKEN")]
    pub null_tokens: Vec<String>,

    /// Use only the tokens given with --null-token.
    #[arg(long = "no-default-null-tokens")]
    pub no_default_null_tokens: bool,
}

#[derive(Parser)]
pub struct IdsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
