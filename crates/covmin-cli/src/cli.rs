//! CLI argument definitions for the Terra data table converter.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use covmin_publish::DEFAULT_GSUTIL_PROGRAM;

#[derive(Parser)]
#[command(
    name = "covmin-terra",
    version,
    about = "Convert nanopore sample sheets into Terra data tables",
    long_about = "Convert nanopore sample sheets into Terra data tables.\n\n\
                  Reads one sample sheet or a directory of <RUN_NAME>.xlsx sheets,\n\
                  writes <RUN_NAME>_terra_data_table.tsv per run (plus a concatenated\n\
                  table for several runs), and copies tables and sheets to the bucket."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow sample identifiers in trace-level logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// MinION sample sheet, or a directory of <RUN_NAME>.xlsx sample sheets.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory (default: current directory).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Run name, e.g. COVMIN_0042 (default: taken from the sample sheet file name).
    #[arg(long = "seq_run", value_name = "RUN_NAME")]
    pub seq_run: Option<String>,

    /// Bucket holding the fastq_pass files, e.g. gs://covid_terra.
    #[arg(long = "bucket_path", value_name = "GS_PATH")]
    pub bucket_path: String,

    /// Prefix for workflow outputs (default: gs://<bucket>).
    #[arg(long = "terra_output_dir", value_name = "GS_PATH")]
    pub terra_output_dir: Option<String>,

    /// Shared entity column token used when concatenating runs.
    #[arg(long = "entity_col_name", value_name = "TOKEN")]
    pub entity_col_name: Option<String>,

    /// Reject run names that do not follow <PREFIX>_<NUMBER>.
    #[arg(long = "strict-run-name")]
    pub strict_run_name: bool,

    /// Value of the download_date column (default: today).
    #[arg(long = "download-date", value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub download_date: Option<NaiveDate>,

    /// Write tables locally without copying anything to the bucket.
    #[arg(long = "no-upload")]
    pub no_upload: bool,

    /// Copy into a local directory laid out like the bucket instead of uploading.
    #[arg(long = "mirror-dir", value_name = "DIR", conflicts_with = "no_upload")]
    pub mirror_dir: Option<PathBuf>,

    /// Copy command, e.g. "gsutil" or "gcloud storage".
    #[arg(long = "gsutil", value_name = "COMMAND", default_value = DEFAULT_GSUTIL_PROGRAM)]
    pub gsutil: String,

    /// Skip the concatenated table when several runs are processed.
    #[arg(long = "no-concat")]
    pub no_concat: bool,

    /// JSON file with sheet, run name and transform options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
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
