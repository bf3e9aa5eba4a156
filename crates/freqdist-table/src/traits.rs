//! Core traits for frequency table construction

use freqdist_core::Result;

/// Trait for choosing how many classes a sample of size `n` is grouped into
pub trait ClassCountRule {
    /// Number of classes for a sample of `n` observations
    fn class_count(&self, n: usize) -> Result<usize>;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Whether practical clamp bounds should be applied to the result.
    ///
    /// Heuristics are clamped; explicit caller-supplied counts are not.
    fn is_clampable(&self) -> bool {
        true
    }
}
