//! IQR-based outlier fences

use serde::{Deserialize, Serialize};

/// Conventional fence multiplier
pub const TUKEY_MULTIPLIER: f64 = 1.5;

/// Closed interval outside of which a value counts as an outlier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fences {
    pub lower: f64,
    pub upper: f64,
}

impl Fences {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Values outside the fences in input order
    pub fn outliers(&self, values: &[f64]) -> Vec<Outlier> {
        values
            .iter()
            .enumerate()
            .filter(|(_, &value)| !self.contains(value))
            .map(|(index, &value)| Outlier { index, value })
            .collect()
    }
}

/// A value outside the fences and its position in the input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub index: usize,
    pub value: f64,
}
