//! CLI argument definitions for csvxml.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use csvxml_core::{DEFAULT_MAX_COLUMNS, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PREFIX, DEFAULT_SUFFIX};

#[derive(Parser)]
#[command(
    name = "csvxml",
    version,
    about = "Convert comma-separated lines to XML attribute lines and comments",
    long_about = "Convert comma-separated lines to XML attribute lines and comments.\n\n\
                  The first content line is the header. Header fields starting with\n\
                  punctuation mark comment columns, whose values are written as an\n\
                  XML comment. Lines starting with punctuation are passed through as\n\
                  comments and blank lines stay blank."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Prefix log events with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Show the module path of each log event.
    #[arg(long = "log-target")]
    pub log_target: bool,

    /// Include raw line content in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input file (default: stdin, `-` also means stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prefix each attribute line with STRING.
    #[arg(short = 'p', long = "prefix", value_name = "STRING", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Add STRING as suffix to each attribute line.
    #[arg(short = 's', long = "suffix", value_name = "STRING", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Maximum number of fields per line.
    #[arg(long = "max-columns", value_name = "N", default_value_t = DEFAULT_MAX_COLUMNS)]
    pub max_columns: usize,

    /// Maximum line length in bytes, line ending excluded.
    #[arg(long = "max-line-length", value_name = "BYTES", default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    pub max_line_length: usize,

    /// XML-escape attribute values (&, <, >, quotes).
    #[arg(long = "escape-values")]
    pub escape_values: bool,

    /// Stop at the first rejected line instead of skipping it.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Print a summary table to stderr when done.
    #[arg(long = "summary")]
    pub summary: bool,
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
