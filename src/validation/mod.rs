//! Validation logic for job requests.

mod validate;

pub use validate::{validate_request, ValidationResult};
