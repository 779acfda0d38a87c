//! The `migrate` command: ingest, transform and validate, then load.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{Level, info, info_span, trace};

use crm_core::{BatchPipeline, Execution};
use crm_ingest::read_records;
use crm_map::load_mapping_spec;
use crm_model::{BatchResult, MappingSpec};
use crm_output::{MigrationOutputs, WriteMode, write_batch};
use crm_validate::ValidationOptions;

use crate::logging::redact_value;

/// Resolved options for one migration run.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub input: PathBuf,
    /// TOML mapping file; the legacy default mapping is used when absent.
    pub mapping: Option<PathBuf>,
    /// Defaults to `<input dir>/output`.
    pub output_dir: Option<PathBuf>,
    pub write_mode: WriteMode,
    pub strict: bool,
    pub execution: Execution,
    /// Validate and report without writing output files.
    pub dry_run: bool,
    /// Allow raw customer values in trace logs.
    pub log_data: bool,
}

impl MigrateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            mapping: None,
            output_dir: None,
            write_mode: WriteMode::default(),
            strict: false,
            execution: Execution::default(),
            dry_run: false,
            log_data: false,
        }
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&self.input))
    }
}

#[derive(Debug)]
pub struct MigrationReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub result: BatchResult,
    /// `None` on dry runs.
    pub outputs: Option<MigrationOutputs>,
}

/// Loads the mapping file if given, otherwise the legacy default mapping.
pub fn load_mapping(path: Option<&Path>) -> Result<MappingSpec> {
    match path {
        Some(path) => load_mapping_spec(path)
            .with_context(|| format!("load mapping {}", path.display())),
        None => Ok(MappingSpec::legacy_default()),
    }
}

pub fn run_migration(options: &MigrateOptions) -> Result<MigrationReport> {
    let span = info_span!("migrate", input = %options.input.display());
    let _guard = span.enter();

    let spec = load_mapping(options.mapping.as_deref())?;
    let raws = read_records(&options.input)
        .with_context(|| format!("read {}", options.input.display()))?;
    info!(records = raws.len(), "input loaded");

    let validation = if options.strict {
        ValidationOptions::strict()
    } else {
        ValidationOptions::default()
    };
    let pipeline = BatchPipeline::new(spec)
        .with_validation_options(validation)
        .with_execution(options.execution);
    let result = pipeline.run(&raws);

    if tracing::enabled!(Level::TRACE) {
        for rejected in &result.rejected {
            let rendered = format!("{:?}", rejected.raw);
            trace!(
                record_index = rejected.record_index,
                raw = redact_value(&rendered, options.log_data),
                "rejected record data"
            );
        }
        for dropped in &result.soft_failures {
            trace!(
                record_index = dropped.record_index,
                field = %dropped.field,
                raw = redact_value(&dropped.raw, options.log_data),
                "dropped optional value"
            );
        }
    }

    let output_dir = options.resolved_output_dir();
    let outputs = if options.dry_run {
        info!("dry run; no outputs written");
        None
    } else {
        let outputs = write_batch(&output_dir, &result, options.write_mode)
            .with_context(|| format!("write outputs to {}", output_dir.display()))?;
        Some(outputs)
    };

    Ok(MigrationReport {
        input: options.input.clone(),
        output_dir,
        result,
        outputs,
    })
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_defaults_next_to_input() {
        let options = MigrateOptions::new("/data/legacy/customer_dump.csv");
        assert_eq!(
            options.resolved_output_dir(),
            PathBuf::from("/data/legacy/output")
        );
    }

    #[test]
    fn bare_file_name_writes_to_relative_output() {
        let options = MigrateOptions::new("dump.csv");
        assert_eq!(options.resolved_output_dir(), PathBuf::from("output"));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let mut options = MigrateOptions::new("dump.csv");
        options.output_dir = Some(PathBuf::from("/tmp/out"));
        assert_eq!(options.resolved_output_dir(), PathBuf::from("/tmp/out"));
    }
}
