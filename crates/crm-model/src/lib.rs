pub mod batch;
pub mod customer;
pub mod error;
pub mod field;
pub mod mapping;
pub mod raw;
pub mod validation;

pub use batch::{BatchResult, BatchSummary, RejectedRecord, SoftFailure};
pub use customer::CanonicalCustomer;
pub use error::MappingSpecError;
pub use field::CanonicalField;
pub use mapping::{MappingSpec, RenameEntry, SplitEntry, SplitRule};
pub use raw::{RawRecord, RawValue};
pub use validation::{RECORD_FIELD, ValidationError, ValidationErrorKind};
