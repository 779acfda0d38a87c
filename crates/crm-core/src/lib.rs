//! Transform-and-validate core of the legacy customer migration.

pub mod pipeline;

pub use pipeline::{BatchPipeline, Execution, run};
