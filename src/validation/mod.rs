//! Input validation for raw request data.
//!
//! A [`Validator`] is built from a decoded JSON body or from query parameters,
//! runs checks in the order they are chained, and stops at the first failure.
//! The resulting [`ValidationError`] carries the field, the violated [`Rule`]
//! and a human-readable message, which the API layer returns verbatim.

mod error;
mod validator;

pub use error::{Bound, Expected, Format, Rule, ValidationError};
pub use validator::{Validator, parse_integer};
