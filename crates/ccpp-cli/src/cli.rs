//! CLI argument definitions for the metadata validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ccpp-meta-validate",
    version,
    about = "Check CCPP metadata files for naming and unit problems",
    long_about = "Check CCPP metadata files for naming and unit problems.\n\n\
                  Accepts a single metadata file, or a directory that is searched\n\
                  recursively for .meta files. Standard names, long names and the\n\
                  units declared for each variable type are checked."
)]
pub struct Cli {
    /// Location of metadata file(s): a file, or a directory to search.
    #[arg(short = 'm', long = "metafile-loc", value_name = "PATH")]
    pub metafile_loc: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Also report units that look inconsistent with the standard name.
    ///
    /// Advisories are printed as questions and never fail the run.
    #[arg(long = "advisories")]
    pub advisories: bool,

    /// Do not warn about variable types without a unit rule (e.g. derived types).
    #[arg(long = "ignore-unknown-types")]
    pub ignore_unknown_types: bool,

    /// File name suffix used when searching a directory.
    #[arg(long = "extension", value_name = "SUFFIX", default_value = ".meta")]
    pub extension: String,

    /// Directory name to skip while searching (repeatable; `.git` is always skipped).
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

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
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Table,
    Json,
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
