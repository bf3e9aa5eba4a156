//! Descriptive statistics reported next to a frequency table
//!
//! ```rust
//! use freqdist_describe::Summary;
//!
//! let data = [2.0, 4.0, 4.0, 5.0, 7.0, 9.0, 40.0];
//! let summary = Summary::from_sample(&data).unwrap();
//!
//! assert_eq!(summary.mode, 4.0);
//! assert_eq!(summary.median, 5.0);
//!
//! let outliers = summary.outliers(&data);
//! assert_eq!(outliers.len(), 1);
//! assert_eq!(outliers[0].index, 6);
//! ```

pub mod outliers;
pub mod summary;

pub use outliers::{Fences, Outlier, TUKEY_MULTIPLIER};
pub use summary::Summary;

pub use freqdist_core::{Error, Result};
