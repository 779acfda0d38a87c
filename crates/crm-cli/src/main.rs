//! Legacy customer migration CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use crm_cli::generate::{GenerateOptions, generate_dump};
use crm_cli::logging::{LogConfig, LogFormat, init_logging};
use crm_cli::migrate::{MigrateOptions, load_mapping, run_migration};
use crm_core::Execution;
use crm_output::WriteMode;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, GenerateArgs, LogFormatArg, LogLevelArg, MigrateArgs};
use crate::summary::{print_mapping, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Migrate(args) => match run_migration(&migrate_options(args, cli.log_data)) {
            Ok(report) => {
                print_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Mapping(args) => match load_mapping(args.mapping.as_deref()) {
            Ok(spec) => {
                print_mapping(&spec);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Generate(args) => match generate_dump(&generate_options(args)) {
            Ok(report) => {
                println!(
                    "Wrote {} records ({} reused emails) to {}",
                    report.records,
                    report.duplicate_emails,
                    report.output.display()
                );
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn migrate_options(args: MigrateArgs, log_data: bool) -> MigrateOptions {
    MigrateOptions {
        input: args.input,
        mapping: args.mapping,
        output_dir: args.output_dir,
        write_mode: if args.append {
            WriteMode::Append
        } else {
            WriteMode::Replace
        },
        strict: args.strict,
        execution: if args.sequential {
            Execution::Sequential
        } else {
            Execution::Parallel
        },
        dry_run: args.dry_run,
        log_data,
    }
}

fn generate_options(args: GenerateArgs) -> GenerateOptions {
    GenerateOptions {
        output: args.output,
        count: args.count,
        seed: args.seed,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
