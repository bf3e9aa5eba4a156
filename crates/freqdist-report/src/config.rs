//! Configuration for report generation

use crate::load::LoadOptions;
use crate::Result;
use freqdist_coerce::CoercionRules;
use freqdist_table::{BuildConfig, LabelStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for one report, loadable from a JSON file
///
/// Every field is optional in the file; absent ones keep their defaults.
///
/// ```json
/// {
///   "table": { "clamp": { "min": 5, "max": 12 }, "relative_scale": "fraction" },
///   "labels": "discrete_inclusive",
///   "summary": true
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub table: BuildConfig,
    pub coercion: CoercionRules,
    pub load: LoadOptions,
    pub labels: LabelStyle,
    /// Include descriptive statistics
    pub summary: bool,
}

impl ReportConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}
