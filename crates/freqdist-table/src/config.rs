//! Configuration for frequency table construction

use freqdist_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default Sturges coefficient, `1 / log10(2)` rounded to three places
pub const STURGES_COEFFICIENT: f64 = 3.322;

/// Largest class count any rule or override may resolve to
pub const MAX_CLASS_COUNT: usize = 100_000;

/// Inclusive bounds applied to a heuristic class count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampBounds {
    pub min: usize,
    pub max: usize,
}

impl ClampBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Bound `k` to `[min, max]`
    pub fn apply(&self, k: usize) -> usize {
        k.clamp(self.min, self.max)
    }
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self { min: 3, max: 20 }
    }
}

/// Scale used for relative frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeScale {
    /// Proportions in `[0, 1]`
    Fraction,
    /// Percentages in `[0, 100]`
    #[default]
    Percentage,
}

impl RelativeScale {
    /// Factor applied to `count / n`
    pub fn factor(self) -> f64 {
        match self {
            Self::Fraction => 1.0,
            Self::Percentage => 100.0,
        }
    }
}

/// Where the first class boundary sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginMode {
    /// The sample minimum itself
    ExactMin,
    /// The largest integer not above the sample minimum
    #[default]
    FlooredMin,
}

impl OriginMode {
    pub fn origin(self, min: f64) -> f64 {
        match self {
            Self::ExactMin => min,
            Self::FlooredMin => min.floor(),
        }
    }
}

/// How the interval width is derived from `span / k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthMode {
    /// Round up to a whole number
    #[default]
    Ceiled,
    /// Use the real quotient
    Exact,
}

/// All options recognised by [`FrequencyTableBuilder`](crate::FrequencyTableBuilder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Use this many classes instead of Sturges' rule. Never clamped.
    pub class_count_override: Option<usize>,
    /// Bounds for the Sturges class count; `None` uses the raw value
    pub clamp: Option<ClampBounds>,
    pub relative_scale: RelativeScale,
    pub origin_mode: OriginMode,
    pub width_mode: WidthMode,
    pub sturges_coefficient: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            class_count_override: None,
            clamp: Some(ClampBounds::default()),
            relative_scale: RelativeScale::default(),
            origin_mode: OriginMode::default(),
            width_mode: WidthMode::default(),
            sturges_coefficient: STURGES_COEFFICIENT,
        }
    }
}

impl BuildConfig {
    /// Check option combinations that can never produce a table
    pub fn validate(&self) -> Result<()> {
        if let Some(bounds) = self.clamp {
            if bounds.min > bounds.max {
                return Err(Error::InvalidParameter(format!(
                    "clamp min {} exceeds clamp max {}",
                    bounds.min, bounds.max
                )));
            }
        }
        if let Some(k) = self.class_count_override {
            if k > MAX_CLASS_COUNT {
                return Err(Error::InvalidParameter(format!(
                    "class count {k} exceeds the maximum of {MAX_CLASS_COUNT}"
                )));
            }
        }
        if !self.sturges_coefficient.is_finite() || self.sturges_coefficient <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Sturges coefficient must be positive, got {}",
                self.sturges_coefficient
            )));
        }
        Ok(())
    }
}
