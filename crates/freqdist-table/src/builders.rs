//! The frequency table builder

use crate::config::{
    BuildConfig, ClampBounds, OriginMode, RelativeScale, WidthMode, MAX_CLASS_COUNT,
};
use crate::layout::ClassLayout;
use crate::rules::{FixedClassCount, SturgesRule};
use crate::traits::ClassCountRule;
use crate::types::{ClassRow, FrequencyTable};
use freqdist_core::{Error, Result, Sample};
use num_traits::ToPrimitive;
use tracing::{debug, instrument};

/// Builds grouped frequency tables from numeric samples
///
/// The class count comes from Sturges' rule unless overridden, and is clamped
/// to `[3, 20]` by default. See [`BuildConfig`] for every option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTableBuilder {
    config: BuildConfig,
}

impl FrequencyTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Use exactly `k` classes instead of Sturges' rule
    pub fn class_count(mut self, k: usize) -> Self {
        self.config.class_count_override = Some(k);
        self
    }

    pub fn clamp(mut self, bounds: ClampBounds) -> Self {
        self.config.clamp = Some(bounds);
        self
    }

    /// Use the raw Sturges value, however small or large
    pub fn unclamped(mut self) -> Self {
        self.config.clamp = None;
        self
    }

    pub fn relative_scale(mut self, scale: RelativeScale) -> Self {
        self.config.relative_scale = scale;
        self
    }

    pub fn origin_mode(mut self, mode: OriginMode) -> Self {
        self.config.origin_mode = mode;
        self
    }

    pub fn width_mode(mut self, mode: WidthMode) -> Self {
        self.config.width_mode = mode;
        self
    }

    pub fn sturges_coefficient(mut self, coefficient: f64) -> Self {
        self.config.sturges_coefficient = coefficient;
        self
    }

    /// Resolve the class count for a sample of size `n` under this configuration
    pub fn resolve_class_count(&self, n: usize) -> Result<usize> {
        match self.config.class_count_override {
            Some(k) => self.resolve_class_count_with(&FixedClassCount(k), n),
            None => self.resolve_class_count_with(
                &SturgesRule::with_coefficient(self.config.sturges_coefficient),
                n,
            ),
        }
    }

    /// Resolve the class count with a caller-chosen rule, applying the
    /// configured clamp when the rule allows it
    pub fn resolve_class_count_with(&self, rule: &dyn ClassCountRule, n: usize) -> Result<usize> {
        self.config.validate()?;
        let raw = rule.class_count(n)?;
        let k = match self.config.clamp {
            Some(bounds) if rule.is_clampable() => bounds.apply(raw),
            _ => raw,
        };
        debug!(rule = rule.name(), n, raw, k, "resolved class count");
        if k == 0 {
            return Err(Error::DegenerateClassCount { k });
        }
        if k > MAX_CLASS_COUNT {
            return Err(Error::InvalidParameter(format!(
                "{} rule resolved {k} classes, more than the maximum of {MAX_CLASS_COUNT}",
                rule.name()
            )));
        }
        Ok(k)
    }

    /// Build a table from any slice of numbers
    ///
    /// Fails with [`Error::EmptySample`] for an empty slice and
    /// [`Error::NonFinite`] if any element is NaN or infinite.
    pub fn build<T: freqdist_core::Numeric>(&self, sample: &[T]) -> Result<FrequencyTable> {
        self.build_sample(&Sample::from_numeric(sample)?)
    }

    /// Build a table from a validated sample
    pub fn build_sample(&self, sample: &Sample) -> Result<FrequencyTable> {
        let k = self.resolve_class_count(sample.len())?;
        self.build_with_class_count(sample, k)
    }

    /// Build a table with the class count chosen by `rule`
    pub fn build_with_rule(
        &self,
        rule: &dyn ClassCountRule,
        sample: &Sample,
    ) -> Result<FrequencyTable> {
        let k = self.resolve_class_count_with(rule, sample.len())?;
        self.build_with_class_count(sample, k)
    }

    /// Build one table per sample
    ///
    /// Samples are independent; with the `parallel` feature they are
    /// processed on the rayon thread pool. Results keep the input order.
    pub fn build_batch<S>(&self, samples: &[S]) -> Vec<Result<FrequencyTable>>
    where
        S: AsRef<[f64]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            samples
                .par_iter()
                .map(|sample| self.build(sample.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            samples
                .iter()
                .map(|sample| self.build(sample.as_ref()))
                .collect()
        }
    }

    #[instrument(level = "debug", skip_all, fields(n = sample.len(), k = k))]
    fn build_with_class_count(&self, sample: &Sample, k: usize) -> Result<FrequencyTable> {
        let layout = ClassLayout::new(
            sample.min(),
            sample.max(),
            k,
            self.config.origin_mode,
            self.config.width_mode,
        )?;
        debug!(
            width = layout.width(),
            origin = layout.origin(),
            "laid out classes"
        );

        let mut counts = vec![0usize; k];
        for &value in sample {
            let q = layout.class_of(value).ok_or_else(|| {
                Error::Computation(format!(
                    "value {value} lies outside [{}, {}]",
                    layout.origin(),
                    layout.boundaries()[k]
                ))
            })?;
            counts[q] += 1;
        }

        let n = sample.len();
        let n_f = n.to_f64().unwrap_or(f64::MAX);
        let factor = self.config.relative_scale.factor();
        let half_width = layout.width() / 2.0;

        let mut cumulative = 0;
        let rows = counts
            .iter()
            .enumerate()
            .map(|(q, &frequency)| {
                cumulative += frequency;
                let (lower, upper) = layout.bounds(q).unwrap_or_default();
                ClassRow {
                    index: q,
                    lower,
                    upper,
                    midpoint: lower + half_width,
                    frequency,
                    relative_frequency: frequency.to_f64().unwrap_or(0.0) * factor / n_f,
                    cumulative_frequency: cumulative,
                    cumulative_relative_frequency: cumulative.to_f64().unwrap_or(0.0) * factor
                        / n_f,
                    closed: q + 1 == k,
                }
            })
            .collect();

        Ok(FrequencyTable::new(
            rows,
            layout,
            n,
            sample.min(),
            sample.max(),
            &self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WEIGHTS: [u32; 30] = [
        128, 63, 97, 134, 133, 136, 125, 110, 118, 94, 76, 84, 132, 105, 80, 87, 100, 77, 120,
        109, 90, 72, 103, 78, 94, 118, 117, 80, 140, 94,
    ];

    #[test]
    fn test_one_to_ten() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let table = FrequencyTableBuilder::new().build(&data).unwrap();

        assert_eq!(table.class_count(), 5);
        assert_eq!(table.width(), 2.0);
        assert_eq!(table.boundaries(), &[1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
        assert_eq!(table.counts(), vec![2, 2, 2, 2, 2]);
        assert_eq!(table.cumulative_counts(), vec![2, 4, 6, 8, 10]);
        assert_eq!(table.midpoints(), vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(table.row(4).unwrap().contains(10.0));
    }

    #[test]
    fn test_adult_weights() {
        let table = FrequencyTableBuilder::new().build(&WEIGHTS).unwrap();

        // n = 30: ceil(1 + 3.322 * 1.477) = 6 classes, width ceil(77 / 6) = 13
        assert_eq!(table.class_count(), 6);
        assert_eq!(table.width(), 13.0);
        assert_eq!(table.boundaries()[0], 63.0);
        assert_eq!(table.counts(), vec![2, 7, 6, 4, 5, 6]);
        assert_eq!(table.total_count(), 30);
        assert_eq!(table.cumulative_counts().last(), Some(&30));
    }

    #[test]
    fn test_single_value_unclamped_and_clamped() {
        let table = FrequencyTableBuilder::new().unclamped().build(&[5.0]).unwrap();
        assert_eq!(table.class_count(), 1);
        assert_eq!(table.width(), 1.0);
        assert_eq!(table.boundaries(), &[5.0, 6.0]);
        assert_eq!(table.counts(), vec![1]);

        let table = FrequencyTableBuilder::new().build(&[5.0]).unwrap();
        assert_eq!(table.class_count(), 3);
        assert_eq!(table.boundaries(), &[5.0, 6.0, 7.0, 8.0]);
        assert_eq!(table.counts(), vec![1, 0, 0]);
    }

    #[test]
    fn test_relative_scales() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();

        let percent = FrequencyTableBuilder::new().build(&data).unwrap();
        assert_relative_eq!(percent.rows()[0].relative_frequency, 20.0);
        assert_relative_eq!(percent.rows()[4].cumulative_relative_frequency, 100.0);

        let fraction = FrequencyTableBuilder::new()
            .relative_scale(RelativeScale::Fraction)
            .build(&data)
            .unwrap();
        assert_relative_eq!(fraction.rows()[0].relative_frequency, 0.2);
        assert_relative_eq!(fraction.rows()[4].cumulative_relative_frequency, 1.0);
        assert_eq!(fraction.relative_scale(), RelativeScale::Fraction);
    }

    #[test]
    fn test_override_is_not_clamped() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let table = FrequencyTableBuilder::new().class_count(2).build(&data).unwrap();
        assert_eq!(table.class_count(), 2);
        assert_eq!(table.boundaries(), &[1.0, 6.0, 11.0]);
        assert_eq!(table.counts(), vec![5, 5]);
    }

    #[test]
    fn test_degenerate_class_count() {
        let err = FrequencyTableBuilder::new().class_count(0).build(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::DegenerateClassCount { k: 0 }));

        let err = FrequencyTableBuilder::new()
            .clamp(ClampBounds::new(0, 0))
            .build(&[1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateClassCount { k: 0 }));
    }

    #[test]
    fn test_empty_and_non_finite_samples() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            FrequencyTableBuilder::new().build(&empty),
            Err(Error::EmptySample { total: 0 })
        ));
        assert!(matches!(
            FrequencyTableBuilder::new().build(&[1.0, f64::INFINITY]),
            Err(Error::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn test_exact_origin_and_width() {
        let data = [0.5, 1.0, 1.75, 2.5];
        let table = FrequencyTableBuilder::new()
            .class_count(4)
            .origin_mode(OriginMode::ExactMin)
            .width_mode(WidthMode::Exact)
            .build(&data)
            .unwrap();
        assert_eq!(table.boundaries(), &[0.5, 1.0, 1.5, 2.0, 2.5]);
        assert_eq!(table.counts(), vec![1, 1, 1, 1]);
        assert_eq!(table.width_mode(), WidthMode::Exact);
    }

    #[test]
    fn test_custom_rule() {
        let sample = Sample::new((0..100).map(f64::from).collect()).unwrap();
        let table = FrequencyTableBuilder::new()
            .build_with_rule(&SturgesRule::classic(), &sample)
            .unwrap();
        assert_eq!(table.class_count(), 8);
        assert_eq!(table.counts().iter().sum::<usize>(), 100);
    }

    #[test]
    fn test_batch_keeps_order_and_errors() {
        let samples = vec![vec![1.0, 2.0, 3.0], vec![], vec![10.0; 4]];
        let results = FrequencyTableBuilder::new().build_batch(&samples);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().total_count(), 3);
        assert!(matches!(results[1], Err(Error::EmptySample { .. })));
        // n = 4 lands just above 3 under Sturges, so four classes
        assert_eq!(results[2].as_ref().unwrap().counts(), vec![4, 0, 0, 0]);
    }

    #[test]
    fn test_oversized_class_count_is_rejected() {
        let err = FrequencyTableBuilder::new()
            .class_count(MAX_CLASS_COUNT + 1)
            .build(&[1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = FrequencyTableBuilder::new()
            .build_with_rule(
                &FixedClassCount(usize::MAX),
                &Sample::new(vec![1.0, 2.0]).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let table = FrequencyTableBuilder::new()
            .class_count(MAX_CLASS_COUNT)
            .build(&[0.0, 1.0])
            .unwrap();
        assert_eq!(table.class_count(), MAX_CLASS_COUNT);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = FrequencyTableBuilder::new()
            .clamp(ClampBounds::new(10, 3))
            .build(&[1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
