//! Core types for grouped frequency distribution analysis
//!
//! This crate holds the pieces shared by every other freqdist crate:
//!
//! - [`Error`] and [`Result`]: one error type for coercion, table building
//!   and reporting failures
//! - [`Numeric`]: the observation types a builder accepts
//! - [`Sample`]: a validated, non-empty sequence of finite reals
//!
//! # Example
//!
//! ```rust
//! use freqdist_core::{Error, Sample};
//!
//! let sample = Sample::new(vec![1.0, 4.0, 2.5]).unwrap();
//! assert_eq!(sample.min(), 1.0);
//! assert_eq!(sample.max(), 4.0);
//!
//! assert!(matches!(Sample::new(vec![]), Err(Error::EmptySample { .. })));
//! ```

pub mod error;
pub mod numeric;
pub mod sample;

pub use error::{Error, InvalidValueReason, Result};
pub use numeric::Numeric;
pub use sample::{finite_extent, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
