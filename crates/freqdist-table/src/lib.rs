//! Grouped frequency distribution tables
//!
//! This crate turns a one-dimensional numeric sample into a classic
//! frequency table: a handful of equal-width classes with their boundaries,
//! midpoints and absolute, relative and cumulative frequencies.
//!
//! # Algorithm
//!
//! 1. `k = ceil(1 + 3.322 * log10(n))` (Sturges' rule), clamped to `[3, 20]`
//!    unless configured otherwise or overridden outright
//! 2. `i = ceil((max - origin) / k)`, or `1` when every value is equal
//! 3. boundaries `origin + q * i` for `q` in `0..=k`, where the origin is
//!    `floor(min)` by default
//! 4. every class is `[lower, upper)` except the last, which is
//!    `[lower, upper]` so the maximum is counted
//!
//! The frequencies always sum to `n` and the last cumulative frequency is `n`.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use freqdist_table::{FrequencyTableBuilder, LabelStyle};
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let table = FrequencyTableBuilder::new().build(&data).unwrap();
//!
//! assert_eq!(table.class_count(), 5);
//! assert_eq!(table.width(), 2.0);
//! assert_eq!(table.boundaries(), &[1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
//!
//! for (row, label) in table.iter().zip(table.labels(LabelStyle::Boundaries)) {
//!     println!("{label:>8}  f={}  cf={}  rf={:.2}%",
//!              row.frequency, row.cumulative_frequency, row.relative_frequency);
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use freqdist_table::{FrequencyTableBuilder, OriginMode, RelativeScale};
//!
//! let table = FrequencyTableBuilder::new()
//!     .unclamped()
//!     .relative_scale(RelativeScale::Fraction)
//!     .origin_mode(OriginMode::ExactMin)
//!     .build(&[2.5, 3.0, 4.5, 7.25])
//!     .unwrap();
//!
//! let total: f64 = table.relative_frequencies().iter().sum();
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

pub mod builders;
pub mod config;
pub mod layout;
pub mod rules;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::FrequencyTableBuilder;
pub use config::{
    BuildConfig, ClampBounds, OriginMode, RelativeScale, WidthMode, MAX_CLASS_COUNT,
    STURGES_COEFFICIENT,
};
pub use layout::ClassLayout;
pub use rules::{FixedClassCount, SturgesRule};
pub use traits::ClassCountRule;
pub use types::{format_bound, ClassRow, FrequencyTable, LabelStyle};

pub use freqdist_core::{Error, Result, Sample};

// Convenience functions
/// Build a table with the default configuration
pub fn frequency_table<T: freqdist_core::Numeric>(data: &[T]) -> Result<FrequencyTable> {
    FrequencyTableBuilder::new().build(data)
}

/// Build a table with exactly `k` classes
pub fn fixed_frequency_table<T: freqdist_core::Numeric>(
    data: &[T],
    k: usize,
) -> Result<FrequencyTable> {
    FrequencyTableBuilder::new().class_count(k).build(data)
}
