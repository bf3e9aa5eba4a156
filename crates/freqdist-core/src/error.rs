//! Error types for frequency distribution analysis
//!
//! Provides a unified error type for all freqdist crates.

use std::fmt;
use thiserror::Error;

/// Why a single raw field could not be turned into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValueReason {
    /// The field was missing or contained only whitespace
    Empty,
    /// A range such as `"2-5"` where one side is not a number
    MalformedRange,
    /// The text is not a number in any accepted form
    NotANumber,
    /// The text parsed, but to NaN or an infinity
    NonFinite,
}

impl fmt::Display for InvalidValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Empty => "empty field",
            Self::MalformedRange => "malformed range",
            Self::NotANumber => "not a number",
            Self::NonFinite => "not a finite number",
        };
        f.write_str(text)
    }
}

/// Core error type for frequency table operations
#[derive(Error, Debug)]
pub enum Error {
    /// A single field could not be coerced to a number.
    ///
    /// Callers recover from this locally by leaving the field out of the sample.
    #[error("Invalid value {value:?}: {reason}")]
    InvalidValue {
        value: String,
        reason: InvalidValueReason,
    },

    /// No valid numeric data was left to build a table from
    #[error("Empty sample: none of the {total} input values were usable")]
    EmptySample { total: usize },

    /// The class count resolved to zero
    #[error("Degenerate class count: k = {k}, at least one class is required")]
    DegenerateClassCount { k: usize },

    /// A sample element was NaN or infinite
    #[error("Non-finite value at position {index}")]
    NonFinite { index: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a field that could not be coerced
    pub fn invalid_value(value: impl Into<String>, reason: InvalidValueReason) -> Self {
        Self::InvalidValue {
            value: value.into(),
            reason,
        }
    }

    /// Create an error for a sample with no usable values out of `total` inputs
    pub fn empty_sample(total: usize) -> Self {
        Self::EmptySample { total }
    }

    /// Create an error for a NaN/Inf element
    pub fn non_finite(index: usize) -> Self {
        Self::NonFinite { index }
    }

    /// Whether this error is recovered locally rather than failing a build
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("abc", InvalidValueReason::NotANumber);
        assert_eq!(err.to_string(), "Invalid value \"abc\": not a number");

        let err = Error::invalid_value("2-x", InvalidValueReason::MalformedRange);
        assert_eq!(err.to_string(), "Invalid value \"2-x\": malformed range");

        let err = Error::empty_sample(12);
        assert_eq!(
            err.to_string(),
            "Empty sample: none of the 12 input values were usable"
        );

        let err = Error::DegenerateClassCount { k: 0 };
        assert_eq!(
            err.to_string(),
            "Degenerate class count: k = 0, at least one class is required"
        );

        let err = Error::non_finite(3);
        assert_eq!(err.to_string(), "Non-finite value at position 3");

        let err = Error::InvalidParameter("clamp min 5 exceeds max 2".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: clamp min 5 exceeds max 2");

        let err = Error::Computation("boundaries collapsed".to_string());
        assert_eq!(err.to_string(), "Computation error: boundaries collapsed");
    }

    #[test]
    fn test_only_invalid_value_is_recoverable() {
        assert!(Error::invalid_value("", InvalidValueReason::Empty).is_recoverable());
        assert!(!Error::empty_sample(0).is_recoverable());
        assert!(!Error::DegenerateClassCount { k: 0 }.is_recoverable());
        assert!(!Error::non_finite(0).is_recoverable());
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}
