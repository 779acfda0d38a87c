//! TOML mapping files.
//!
//! ```toml
//! [rename]
//! client_id = "source_system_id"
//! email = "email"
//!
//! [[split]]
//! legacy = "full_name"
//! targets = ["first_name", "last_name"]
//! rule = "whitespace"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crm_model::{CanonicalField, MappingSpec, RenameEntry, SplitEntry};
use serde::Deserialize;

use crate::error::MappingFileError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingFile {
    #[serde(default)]
    rename: BTreeMap<String, CanonicalField>,
    #[serde(default)]
    split: Vec<SplitEntry>,
}

/// Parses mapping file contents into a validated [`MappingSpec`].
pub fn parse_mapping_spec(contents: &str) -> Result<MappingSpec, MappingFileError> {
    let file: MappingFile = toml::from_str(contents)?;
    let renames = file
        .rename
        .into_iter()
        .map(|(legacy, canonical)| RenameEntry::new(legacy, canonical))
        .collect();
    Ok(MappingSpec::new(renames, file.split)?)
}

pub fn load_mapping_spec(path: &Path) -> Result<MappingSpec, MappingFileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| MappingFileError::io(path, e))?;
    parse_mapping_spec(&contents)
}
