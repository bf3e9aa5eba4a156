//! Core types for frequency table representation

use crate::config::{BuildConfig, OriginMode, RelativeScale, WidthMode};
use crate::layout::ClassLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How interval labels are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// The class boundaries as computed: `"70 - 94"`
    #[default]
    Boundaries,
    /// Integer classes with an inclusive upper end: `"70 - 93"` for every
    /// class but the last. Falls back to [`LabelStyle::Boundaries`] when the
    /// interval width is not a whole number.
    DiscreteInclusive,
}

/// A single class of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRow {
    /// Zero-based class index
    pub index: usize,
    /// Lower boundary (inclusive)
    pub lower: f64,
    /// Upper boundary (exclusive, except for the last class)
    pub upper: f64,
    /// `lower + width / 2`
    pub midpoint: f64,
    /// Number of observations in this class
    pub frequency: usize,
    /// `frequency / n`, as a fraction or percentage
    pub relative_frequency: f64,
    /// Observations in this and all earlier classes
    pub cumulative_frequency: usize,
    /// `cumulative_frequency / n`, on the same scale as `relative_frequency`
    pub cumulative_relative_frequency: f64,
    /// Whether the upper boundary is included (the last class only)
    pub closed: bool,
}

impl ClassRow {
    /// One-based class number, as printed in tables
    pub fn class_number(&self) -> usize {
        self.index + 1
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value falls within this class
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && (value < self.upper || (self.closed && value <= self.upper))
    }

    /// Interval label in the given style
    pub fn label(&self, style: LabelStyle) -> String {
        let upper = match style {
            LabelStyle::DiscreteInclusive if !self.closed && is_whole(self.width()) => {
                self.upper - 1.0
            }
            _ => self.upper,
        };
        format!("{} - {}", format_bound(self.lower), format_bound(upper))
    }
}

impl fmt::Display for ClassRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed { ']' } else { ')' };
        write!(
            f,
            "[{}, {}{close}: f={}, cf={}, rf={:.4}",
            format_bound(self.lower),
            format_bound(self.upper),
            self.frequency,
            self.cumulative_frequency,
            self.relative_frequency
        )
    }
}

/// A grouped frequency distribution
///
/// Built once by [`FrequencyTableBuilder`](crate::FrequencyTableBuilder) and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    rows: Vec<ClassRow>,
    layout: ClassLayout,
    total_count: usize,
    min: f64,
    max: f64,
    relative_scale: RelativeScale,
    origin_mode: OriginMode,
    width_mode: WidthMode,
}

impl FrequencyTable {
    pub(crate) fn new(
        rows: Vec<ClassRow>,
        layout: ClassLayout,
        total_count: usize,
        min: f64,
        max: f64,
        config: &BuildConfig,
    ) -> Self {
        Self {
            rows,
            layout,
            total_count,
            min,
            max,
            relative_scale: config.relative_scale,
            origin_mode: config.origin_mode,
            width_mode: config.width_mode,
        }
    }

    pub fn rows(&self) -> &[ClassRow] {
        &self.rows
    }

    pub fn row(&self, q: usize) -> Option<&ClassRow> {
        self.rows.get(q)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassRow> {
        self.rows.iter()
    }

    /// Number of classes, `k`
    pub fn class_count(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Interval width, `i`
    pub fn width(&self) -> f64 {
        self.layout.width()
    }

    /// The `k + 1` class boundaries
    pub fn boundaries(&self) -> &[f64] {
        self.layout.boundaries()
    }

    pub fn layout(&self) -> &ClassLayout {
        &self.layout
    }

    /// Sample size, `n`
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn relative_scale(&self) -> RelativeScale {
        self.relative_scale
    }

    pub fn origin_mode(&self) -> OriginMode {
        self.origin_mode
    }

    pub fn width_mode(&self) -> WidthMode {
        self.width_mode
    }

    /// Class index a value would be counted in
    pub fn find_class(&self, value: f64) -> Option<usize> {
        self.layout.class_of(value)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.frequency).collect()
    }

    pub fn cumulative_counts(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.cumulative_frequency).collect()
    }

    pub fn relative_frequencies(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.relative_frequency).collect()
    }

    pub fn midpoints(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.midpoint).collect()
    }

    /// Interval labels, one per class
    pub fn labels(&self, style: LabelStyle) -> Vec<String> {
        self.rows.iter().map(|row| row.label(style)).collect()
    }

    /// Index of the most populated class; the first one wins ties
    pub fn modal_class(&self) -> Option<usize> {
        self.rows
            .iter()
            .rev()
            .max_by_key(|row| row.frequency)
            .map(|row| row.index)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a ClassRow;
    type IntoIter = std::slice::Iter<'a, ClassRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrequencyTable({} classes, width={}, n={}, range=[{}, {}])",
            self.class_count(),
            format_bound(self.width()),
            self.total_count,
            format_bound(self.min),
            format_bound(self.max)
        )
    }
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Whole numbers without decimals, anything else with at most four
pub fn format_bound(value: f64) -> String {
    if is_whole(value) {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.4}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
