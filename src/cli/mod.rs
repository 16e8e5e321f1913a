//! CLI argument parsing for rubric
//!
//! Global flags: --root, --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::DialectArg;
use parse::parse_output_format;
pub use rubric_core::format::OutputFormat;

/// Rubric - derive grading rubrics from annotated assignment sources
#[derive(Parser, Debug)]
#[command(name = "rubric")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the config, store and repositories
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (default: <root>/rubric.toml)
    #[arg(long, global = true, env = "RUBRIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `rubric_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a rubric from a local file and print it
    Extract {
        /// File to scan
        file: PathBuf,

        /// Header dialect (auto selects from the file extension)
        #[arg(long, value_enum, default_value = "auto")]
        dialect: DialectArg,
    },

    /// Regenerate and store the rubric for a configured assignment
    Update {
        /// Assignment id from the config
        assignment: String,

        /// Repository checkout to read the main file from
        #[arg(long)]
        repo: Option<PathBuf>,
    },

    /// Show the stored rubric for an assignment
    Show {
        /// Assignment id
        assignment: String,
    },

    /// List configured assignments
    List,
}
