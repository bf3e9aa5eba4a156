//! Numeric coercion of raw survey fields
//!
//! Datasets often record quantities as text: `"2-5"` years of experience,
//! `"10+"` employees, or plain `"7"`. This crate turns such fields into
//! `f64` values, or into "no value" when a field cannot be read. Coercion
//! never fails hard; rejected fields are simply left out of the sample.
//!
//! # Examples
//!
//! ```rust
//! use freqdist_coerce::coerce;
//!
//! assert_eq!(coerce(Some("2-5")), Some(3.5));
//! assert_eq!(coerce(Some("10+")), Some(10.0));
//! assert_eq!(coerce(Some("7")), Some(7.0));
//! assert_eq!(coerce(Some("abc")), None);
//! assert_eq!(coerce(None::<&str>), None);
//! ```
//!
//! Whole columns keep track of what was dropped:
//!
//! ```rust
//! use freqdist_coerce::coerce_column;
//!
//! let column = coerce_column(vec![Some("1-3"), None, Some("oops"), Some("4")]);
//! assert_eq!(column.values(), &[2.0, 4.0]);
//! assert_eq!((column.valid(), column.total()), (2, 4));
//! ```

pub mod column;
pub mod rules;

pub use column::CoercedColumn;
pub use rules::CoercionRules;

use freqdist_core::Result;

/// Coerce one field with the default rules
///
/// `None` stands for a missing (non-text) field and always yields `None`.
pub fn coerce<S: AsRef<str>>(value: Option<S>) -> Option<f64> {
    value.and_then(|text| CoercionRules::default().coerce(text.as_ref()))
}

/// Coerce one field with the default rules, keeping the rejection reason
pub fn try_coerce(value: &str) -> Result<f64> {
    CoercionRules::default().try_coerce(value)
}

/// Coerce a column of fields with the default rules
pub fn coerce_column<I, S>(fields: I) -> CoercedColumn
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    CoercedColumn::from_fields(fields, &CoercionRules::default())
}

pub use freqdist_core::{Error, InvalidValueReason};
