//! Batch pipeline over raw legacy records.
//!
//! Every record runs through the same three stages:
//!
//! 1. **map** - legacy field names to canonical fields (`crm_map`)
//! 2. **normalize** - canonical values to strict types (`crm_transform`)
//! 3. **validate** - schema checks, collecting every error (`crm_validate`)
//!
//! Records are independent, so the stages may run on a rayon pool. Results
//! are reassembled by record index, never by completion order.
//!
//! # Example
//!
//! ```ignore
//! use crm_core::pipeline::BatchPipeline;
//! use crm_model::MappingSpec;
//!
//! let pipeline = BatchPipeline::new(MappingSpec::legacy_default());
//! let result = pipeline.run(&records);
//! assert!(result.is_consistent());
//! ```

use crm_map::map_record;
use crm_model::{
    BatchResult, CanonicalCustomer, MappingSpec, RawRecord, RejectedRecord, SoftFailure,
    ValidationError,
};
use crm_transform::normalize;
use crm_validate::{ValidationOptions, soft_failures, validate_with_options};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

type Evaluated = (
    Result<CanonicalCustomer, Vec<ValidationError>>,
    Vec<SoftFailure>,
);

/// How per-record work is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Spread records over the global rayon pool.
    #[default]
    Parallel,
    Sequential,
}

/// Map → normalize → validate, configured once and reused per batch.
#[derive(Debug, Clone)]
pub struct BatchPipeline {
    spec: MappingSpec,
    options: ValidationOptions,
    execution: Execution,
}

impl BatchPipeline {
    pub fn new(spec: MappingSpec) -> Self {
        Self {
            spec,
            options: ValidationOptions::default(),
            execution: Execution::default(),
        }
    }

    #[must_use]
    pub fn with_validation_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn spec(&self) -> &MappingSpec {
        &self.spec
    }

    /// Runs a single record through all three stages.
    pub fn process_record(
        &self,
        record_index: usize,
        raw: &RawRecord,
    ) -> Result<CanonicalCustomer, Vec<ValidationError>> {
        self.evaluate(record_index, raw).0
    }

    /// Like [`Self::process_record`], also returning the optional values an
    /// accepted record lost to lenient validation.
    fn evaluate(&self, record_index: usize, raw: &RawRecord) -> Evaluated {
        let mapped = map_record(raw, &self.spec);
        let normalized = normalize(&mapped);
        let outcome = validate_with_options(&normalized, record_index, &self.options);
        let dropped = if outcome.is_ok() {
            soft_failures(&normalized, record_index)
        } else {
            Vec::new()
        };
        (outcome, dropped)
    }

    /// Processes a whole batch. Never fails: bad records land in `rejected`.
    pub fn run(&self, raws: &[RawRecord]) -> BatchResult {
        let span = info_span!("batch", records = raws.len());
        let _guard = span.enter();

        let unproduced = self.spec.unproduced_required_fields();
        if !unproduced.is_empty() {
            warn!(
                fields = ?unproduced,
                "mapping never produces required fields; all records will be rejected"
            );
        }

        let outcomes: Vec<Evaluated> = match self.execution {
            Execution::Parallel => raws
                .par_iter()
                .enumerate()
                .map(|(index, raw)| self.evaluate(index, raw))
                .collect(),
            Execution::Sequential => raws
                .iter()
                .enumerate()
                .map(|(index, raw)| self.evaluate(index, raw))
                .collect(),
        };

        let mut result = BatchResult {
            input_count: raws.len(),
            ..BatchResult::default()
        };
        for (record_index, (raw, (outcome, dropped))) in raws.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(customer) => {
                    result.accepted.push(customer);
                    result.soft_failures.extend(dropped);
                }
                Err(errors) => {
                    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                    debug!(record_index, fields = ?fields, "record rejected");
                    result.rejected.push(RejectedRecord {
                        record_index,
                        raw: raw.clone(),
                        errors,
                    });
                }
            }
        }

        info!(
            input = result.input_count,
            accepted = result.accepted.len(),
            rejected = result.rejected.len(),
            dropped_values = result.soft_failures.len(),
            "batch processed"
        );
        result
    }
}

impl Default for BatchPipeline {
    fn default() -> Self {
        Self::new(MappingSpec::legacy_default())
    }
}

/// Runs a batch with default options.
pub fn run(raws: &[RawRecord], spec: &MappingSpec) -> BatchResult {
    BatchPipeline::new(spec.clone()).run(raws)
}
