use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated customer row of the target `crm.customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCustomer {
    pub first_name: String,
    pub last_name: String,
    /// Contains exactly one `@` with non-empty local and domain parts.
    pub email: String,
    pub phone_number: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub is_active: bool,
    pub source_system_id: Option<i64>,
}
