//! Domain models with validation at the request boundary
//!
//! Invalid input returns ValidationErrors, not panic.

pub mod product;
pub mod validation;

pub use product::{Product, ProductPayload};
pub use validation::{ValidationError, ValidationErrors};
