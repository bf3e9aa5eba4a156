//! Loading, rendering and exporting frequency tables
//!
//! The pipeline behind the `freqdist` binary, usable as a library:
//!
//! ```rust
//! use freqdist_report::{read_column, render_table, FrequencyReport, LoadOptions, RenderOptions, ReportConfig};
//!
//! let csv = "name,years\nada,2-5\nbob,10+\ncy,\ndee,7\n";
//! let column = read_column(csv.as_bytes(), "years", &LoadOptions::default()).unwrap();
//! let report = FrequencyReport::from_column(&column, &ReportConfig::default()).unwrap();
//!
//! assert_eq!((report.valid, report.total), (3, 4));
//! println!("{}", render_table(&report.table, &RenderOptions::default()));
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod export;
pub mod load;
pub mod render;
pub mod report;

pub use category::{CategoryCount, CategoryDistribution};
pub use config::ReportConfig;
pub use error::{Error, Result};
pub use export::{round_relative, to_csv_string, write_csv, ExportOptions};
pub use load::{load_column, read_column, ColumnData, LoadOptions};
pub use render::{format_relative, render_table, RenderOptions};
pub use report::FrequencyReport;
