//! Per-field normalization functions.
//!
//! - **datetime**: multi-pattern registration date parsing
//! - **status**: account status to boolean coercion
//! - **numeric**: legacy identifier coercion
//! - **text**: names, email and phone trimming

pub mod datetime;
pub mod numeric;
pub mod status;
pub mod text;

pub use datetime::{DATE_PATTERNS, DatePattern, normalize_date, parse_legacy_date};
pub use numeric::{normalize_identifier, parse_i64};
pub use status::{ACTIVE_TOKENS, INACTIVE_TOKENS, normalize_status, resolve_status_token};
pub use text::{normalize_phone, normalize_text};
