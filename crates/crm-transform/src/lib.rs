//! Value normalization for the legacy customer migration.
//!
//! This crate turns mapped legacy values into strict types:
//!
//! - **normalization**: per-field coercion (dates, status, identifier, text)
//! - **normalized**: the `Absent` / `Value` / `Invalid` outcome type
//! - **record**: whole-record normalization

pub mod normalization;
pub mod normalized;
pub mod record;

pub use normalized::{NormalizationIssue, Normalized};
pub use record::{NormalizedRecord, normalize};
