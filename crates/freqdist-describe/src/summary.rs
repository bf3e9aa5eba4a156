//! Basic descriptive statistics of a sample

use crate::outliers::{Fences, Outlier, TUKEY_MULTIPLIER};
use freqdist_core::{Result, Sample};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Descriptive statistics of one sample
///
/// Quartiles interpolate linearly between order statistics at `h = (n - 1) p`
/// (Hyndman and Fan type 7), so `q1` and `q3` of `1..=10` are `3.25` and
/// `7.75`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; the smallest one when several tie
    pub mode: f64,
    /// Sample standard deviation (`n - 1` denominator), `0` for a single value
    pub std_dev: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl Summary {
    /// Summarize a slice of observations
    ///
    /// Fails with `EmptySample` or `NonFinite` exactly like a table build.
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        Ok(Self::from_validated(&Sample::new(values.to_vec())?))
    }

    /// Summarize an already validated sample
    pub fn from_validated(sample: &Sample) -> Self {
        let values = sample.values();
        let n = sample.len();

        let mean = values.iter().mean();
        let std_dev = if n > 1 { values.iter().std_dev() } else { 0.0 };

        let mut data = Data::new(values.to_vec());
        let median = linear_quantile(&mut data, 0.5);
        let q1 = linear_quantile(&mut data, 0.25);
        let q3 = linear_quantile(&mut data, 0.75);

        let summary = Self {
            n,
            min: sample.min(),
            max: sample.max(),
            mean,
            median,
            mode: mode_of(values),
            std_dev,
            q1,
            q3,
            iqr: q3 - q1,
        };
        debug!(n, mean, median, std_dev, "summarized sample");
        summary
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Tukey fences `Q1 - m * IQR` and `Q3 + m * IQR`
    pub fn outlier_fences(&self, multiplier: f64) -> Fences {
        Fences {
            lower: self.q1 - multiplier * self.iqr,
            upper: self.q3 + multiplier * self.iqr,
        }
    }

    /// Values outside the conventional 1.5 IQR fences, with their positions
    pub fn outliers(&self, values: &[f64]) -> Vec<Outlier> {
        self.outlier_fences(TUKEY_MULTIPLIER).outliers(values)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.n)?;
        writeln!(f, "min = {:.4}, max = {:.4}", self.min, self.max)?;
        writeln!(f, "mean = {:.4}, median = {:.4}, mode = {:.4}", self.mean, self.median, self.mode)?;
        writeln!(f, "std dev = {:.4}", self.std_dev)?;
        write!(f, "Q1 = {:.4}, Q3 = {:.4}, IQR = {:.4}", self.q1, self.q3, self.iqr)
    }
}

/// Type 7 quantile of a non-empty sample, `0 <= p <= 1`
fn linear_quantile(data: &mut Data<Vec<f64>>, p: f64) -> f64 {
    let h = (data.len() - 1) as f64 * p;
    let lower = h.floor();
    // order statistics are 1-based
    let order = lower as usize + 1;
    let below = data.order_statistic(order);
    let frac = h - lower;
    if frac == 0.0 {
        return below;
    }
    below + frac * (data.order_statistic(order + 1) - below)
}

fn mode_of(values: &[f64]) -> f64 {
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(OrderedFloat(value)).or_insert(0) += 1;
    }

    // ascending keys, so a strict comparison keeps the smallest of ties
    let mut best = (f64::NAN, 0);
    for (value, count) in counts {
        if count > best.1 {
            best = (value.into_inner(), count);
        }
    }
    best.0
}
