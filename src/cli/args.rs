//! Command-line argument definitions for the contact processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the contact data processor
///
/// Converts contact-center and helpdesk CSV exports into normalized records
/// and aggregate analytics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "contact-processor",
    version,
    about = "Convert contact-center and helpdesk CSV exports into normalized analytics",
    long_about = "Processes loosely-structured CSV exports describing call-center activity or \
                  customer-service tickets into a normalized record set plus aggregate analytics: \
                  distributions, averages, per-agent performance, and SLA compliance. Handles \
                  fuzzy column naming via prioritized alias tables and mixed time formats."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the contact processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze an export file and report analytics (main command)
    Analyze(AnalyzeArgs),
    /// Inspect an export's detected dataset kind and column bindings
    Schema(SchemaArgs),
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary on stdout
    Table,
    /// Full processing result as JSON
    Json,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV export to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format for the analysis result"
    )]
    pub format: OutputFormat,

    /// Write JSON output to a file instead of stdout
    ///
    /// Only meaningful with --format json.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the schema command
#[derive(Debug, Clone, Parser)]
pub struct SchemaArgs {
    /// Path to the CSV export to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl AnalyzeArgs {
    /// Effective log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

impl SchemaArgs {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
