pub mod error;
pub mod film;
pub mod table;
pub mod user;
pub mod validate;

pub use error::Error;
pub use table::Table;

use crate::error::Result;

/// Unwraps a payload field that validation has already required to be present
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| Error::Validation(format!("{field}: not set")))
}
