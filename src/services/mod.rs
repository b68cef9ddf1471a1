//! Service layer: validates input and drives the repository traits.

pub mod errors;
pub mod member;

pub use errors::{ServiceError, ServiceResult};
