#![deny(unsafe_code)]

//! Field mapping for the legacy customer migration.
//!
//! - **mapper**: applies a [`crm_model::MappingSpec`] to raw records
//! - **file**: loads a mapping spec from a TOML file

pub mod error;
pub mod file;
pub mod mapper;

pub use error::MappingFileError;
pub use file::{load_mapping_spec, parse_mapping_spec};
pub use mapper::{MappedRecord, decompose, map_record};
