#![deny(unsafe_code)]

mod checks;
mod validator;

pub use checks::is_valid_email;
pub use validator::{ValidationOptions, soft_failures, validate, validate_with_options};
