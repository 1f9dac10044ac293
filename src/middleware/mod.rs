//! Request-validation middleware for the API router.

mod validate;

pub use validate::{validate_request, BODY_LIMIT_BYTES};
