//! CLI argument definitions for `cmx`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cmx",
    version,
    about = "Inspect and normalize comic schema documents",
    long_about = "Inspect and normalize comic schema documents.\n\n\
                  Reads a JSON schema (a page list or a document with pages,\n\
                  chapters, config and loading), reports its chapter layout and\n\
                  renders navigation state strings."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the configuration and chapter layout of a schema.
    Inspect(SchemaArgs),

    /// List pages with their chapter and metadata.
    Pages(PagesArgs),

    /// Render the navigation state string for a page.
    State(StateArgs),

    /// Print the normalized schema as JSON.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct PagesArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only list these page IDs, in this order. Unknown IDs are skipped.
    #[arg(long = "ids", value_delimiter = ',', value_name = "ID,...")]
    pub ids: Vec<usize>,
}

#[derive(Parser)]
pub struct StateArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Page to render, clamped to the last page.
    #[arg(long = "page", default_value_t = 0)]
    pub page: usize,

    /// Format string to use instead of the schema's configured one.
    #[arg(long = "format", value_name = "FMT")]
    pub format: Option<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print only the renderer page list.
    #[arg(long = "pages-only")]
    pub pages_only: bool,

    /// Emit compact JSON.
    #[arg(long = "compact")]
    pub compact: bool,
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
