//! Validated one-dimensional samples

use crate::{Error, Numeric, Result};

/// A non-empty sequence of finite real numbers in input order
///
/// Duplicates are kept. The minimum and maximum are computed once on
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl Sample {
    /// Validate `values` as a sample
    ///
    /// Fails with [`Error::EmptySample`] when `values` is empty and with
    /// [`Error::NonFinite`] at the first NaN or infinite element.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        let (min, max) = finite_extent(&values)?;
        Ok(Self { values, min, max })
    }

    /// Validate a slice of any numeric type as a sample
    pub fn from_numeric<T: Numeric>(values: &[T]) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite(index));
        }
        Self::new(values.iter().map(Numeric::to_f64).collect())
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a `Sample` holds at least one value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Min and max of a slice that must be non-empty and finite
pub fn finite_extent(values: &[f64]) -> Result<(f64, f64)> {
    let first = *values.first().ok_or_else(|| Error::empty_sample(0))?;
    let mut min = first;
    let mut max = first;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::non_finite(index));
        }
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_and_order_are_preserved() {
        let sample = Sample::new(vec![128.0, 63.0, 97.0, 140.0, 94.0]).unwrap();
        assert_eq!(sample.len(), 5);
        assert_eq!(sample.min(), 63.0);
        assert_eq!(sample.max(), 140.0);
        assert_eq!(sample.range(), 77.0);
        assert_eq!(sample.values(), &[128.0, 63.0, 97.0, 140.0, 94.0]);
    }

    #[test]
    fn test_empty_sample_is_rejected() {
        let err = Sample::new(vec![]).unwrap_err();
        assert!(matches!(err, Error::EmptySample { total: 0 }));
    }

    #[test]
    fn test_non_finite_is_rejected_with_position() {
        let err = Sample::new(vec![1.0, 2.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::NonFinite { index: 2 }));

        let err = Sample::from_numeric(&[f32::NEG_INFINITY, 1.0]).unwrap_err();
        assert!(matches!(err, Error::NonFinite { index: 0 }));
    }

    #[test]
    fn test_from_integers() {
        let sample = Sample::from_numeric(&[3_u32, 1, 2]).unwrap();
        assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
        assert_eq!(sample.min(), 1.0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let sample = Sample::try_from(vec![5.0, 5.0, 5.0]).unwrap();
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.range(), 0.0);
    }
}
