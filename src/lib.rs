//! # freqdist
//!
//! Grouped frequency distribution tables for one-dimensional numeric data.
//!
//! The workspace is split into focused crates, all re-exported here:
//!
//! - `freqdist-core`: error type, numeric trait and validated samples,
//!   re-exported at the crate root
//! - [`coerce`]: turning survey text such as `"2-5"` or `"10+"` into numbers
//! - [`table`]: Sturges' rule, class boundaries and frequency tables
//! - [`describe`]: mean, median, mode, quartiles and IQR outliers
//! - [`report`]: CSV loading, console rendering and export
//!
//! ## Quick Start
//!
//! ```rust
//! use freqdist::prelude::*;
//!
//! let fields = ["2-5", "10+", "7", "abc", "1-3", "4"];
//! let column = coerce_column(fields.iter().map(|f| Some(*f)));
//! assert_eq!(column.valid(), 5);
//!
//! let table = FrequencyTableBuilder::new().build(column.values()).unwrap();
//! assert_eq!(table.counts().iter().sum::<usize>(), 5);
//! assert_eq!(table.cumulative_counts().last(), Some(&5));
//!
//! for row in &table {
//!     println!("{:>8}  {}", row.label(LabelStyle::Boundaries), row.frequency);
//! }
//! ```

pub use freqdist_coerce as coerce;
pub use freqdist_describe as describe;
pub use freqdist_report as report;
pub use freqdist_table as table;

pub use freqdist_core::{finite_extent, Error, InvalidValueReason, Numeric, Result, Sample};

/// Commonly used items
pub mod prelude {
    pub use freqdist_coerce::{coerce, coerce_column, try_coerce, CoercedColumn, CoercionRules};
    pub use freqdist_core::{Error, Numeric, Result, Sample};
    pub use freqdist_describe::{Fences, Outlier, Summary};
    pub use freqdist_report::{
        load_column, render_table, write_csv, CategoryDistribution, ExportOptions, FrequencyReport,
        RenderOptions, ReportConfig,
    };
    pub use freqdist_table::{
        fixed_frequency_table, frequency_table, BuildConfig, ClampBounds, ClassCountRule,
        ClassRow, FixedClassCount, FrequencyTable, FrequencyTableBuilder, LabelStyle, OriginMode,
        RelativeScale, SturgesRule, WidthMode,
    };
}
