//! Class count rules

use crate::config::STURGES_COEFFICIENT;
use crate::traits::ClassCountRule;
use freqdist_core::{Error, Result};
use num_traits::ToPrimitive;

/// Sturges' rule: `k = ceil(1 + c * log10(n))`
///
/// With the usual `c = 3.322` this approximates `ceil(1 + log2(n))`. The
/// rule assumes roughly normal data and gives too few classes for very large
/// samples; the builder clamps its result by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SturgesRule {
    coefficient: f64,
}

impl SturgesRule {
    pub fn new() -> Self {
        Self {
            coefficient: STURGES_COEFFICIENT,
        }
    }

    /// The `3.3` coefficient common in textbook tables
    pub fn classic() -> Self {
        Self { coefficient: 3.3 }
    }

    pub fn with_coefficient(coefficient: f64) -> Self {
        Self { coefficient }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl Default for SturgesRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassCountRule for SturgesRule {
    fn class_count(&self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(Error::empty_sample(0));
        }
        let n_f = n.to_f64().unwrap_or(f64::MAX);
        let k = (1.0 + self.coefficient * n_f.log10()).ceil();
        k.to_usize().ok_or_else(|| {
            Error::InvalidParameter(format!(
                "Sturges coefficient {} yields class count {k} for n = {n}",
                self.coefficient
            ))
        })
    }

    fn name(&self) -> &'static str {
        "sturges"
    }
}

/// A caller-supplied class count, used as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClassCount(pub usize);

impl ClassCountRule for FixedClassCount {
    fn class_count(&self, _n: usize) -> Result<usize> {
        Ok(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }

    fn is_clampable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sturges_known_values() {
        let rule = SturgesRule::new();
        assert_eq!(rule.class_count(1).unwrap(), 1);
        assert_eq!(rule.class_count(2).unwrap(), 3);
        assert_eq!(rule.class_count(10).unwrap(), 5);
        assert_eq!(rule.class_count(30).unwrap(), 6);
        assert_eq!(rule.class_count(100).unwrap(), 8);
        assert_eq!(rule.class_count(1000).unwrap(), 11);
    }

    #[test]
    fn test_classic_coefficient() {
        let rule = SturgesRule::classic();
        assert_eq!(rule.coefficient(), 3.3);
        assert_eq!(rule.class_count(10).unwrap(), 5);
        assert_eq!(rule.class_count(30).unwrap(), 6);
    }

    #[test]
    fn test_sturges_rejects_empty() {
        assert!(matches!(
            SturgesRule::new().class_count(0),
            Err(Error::EmptySample { .. })
        ));
    }

    #[test]
    fn test_fixed_is_not_clampable() {
        let rule = FixedClassCount(7);
        assert_eq!(rule.class_count(1_000).unwrap(), 7);
        assert!(!rule.is_clampable());
        assert!(SturgesRule::new().is_clampable());
    }
}
