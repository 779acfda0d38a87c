//! CLI argument definitions for the customer migration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use crm_cli::generate::{DEFAULT_RECORD_COUNT, DEFAULT_SEED};

#[derive(Parser)]
#[command(
    name = "crm-migrate",
    version,
    about = "Migrate legacy customer dumps into the CRM customers table",
    long_about = "Map, normalize and validate legacy customer records.\n\n\
                  Accepted records are written as a CSV load file; rejected records\n\
                  are written to a JSON report with every validation error."
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

    /// Allow raw customer values in trace logs (contains PII).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a legacy dump through the migration and write the outputs.
    Migrate(MigrateArgs),

    /// Print the effective legacy-to-canonical field mapping.
    Mapping(MappingArgs),

    /// Write a seeded dump of dirty legacy records for test runs.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct MigrateArgs {
    /// Legacy dump to migrate (.csv or .json).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML mapping file replacing the built-in legacy mapping.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Output directory for generated files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Append accepted customers to an existing load file instead of replacing it.
    #[arg(long = "append")]
    pub append: bool,

    /// Reject records with present but unparseable optional values.
    ///
    /// By default such values (an unreadable registration date or source
    /// id) are dropped and the record is loaded with the field empty.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Process records on the calling thread instead of the worker pool.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct MappingArgs {
    /// TOML mapping file to inspect (default: built-in legacy mapping).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path of the `;`-separated dump to write.
    #[arg(value_name = "OUT")]
    pub output: PathBuf,

    /// Number of records to generate.
    #[arg(long = "count", default_value_t = DEFAULT_RECORD_COUNT)]
    pub count: usize,

    /// Seed for the random generator; equal seeds give identical dumps.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,
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
