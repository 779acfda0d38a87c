//! Library side of the `crm-migrate` binary.

pub mod generate;
pub mod logging;
pub mod migrate;
