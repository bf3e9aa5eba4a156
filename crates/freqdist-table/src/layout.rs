//! Class boundaries and the membership rule

use crate::config::{OriginMode, WidthMode, MAX_CLASS_COUNT};
use freqdist_core::{Error, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// The `k + 1` boundaries splitting a range into `k` classes
///
/// Every class but the last is half-open, `[lower, upper)`. The last class is
/// closed, `[lower, upper]`, so the sample maximum is always counted. A value
/// equal to an interior boundary belongs to the class that starts there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassLayout {
    boundaries: Vec<f64>,
    width: f64,
}

impl ClassLayout {
    /// Lay out `k` classes covering `[min, max]`
    ///
    /// The width is `(max - origin) / k`, rounded up under
    /// [`WidthMode::Ceiled`], or `1` when `min == max`. At magnitudes where
    /// that is finer than the float spacing, the width is widened to one ulp
    /// so the boundaries stay distinct. The final boundary is raised to `max`
    /// if floating point rounding left it short.
    ///
    /// Fails with [`Error::DegenerateClassCount`] for `k == 0` and
    /// [`Error::InvalidParameter`] above [`MAX_CLASS_COUNT`].
    pub fn new(
        min: f64,
        max: f64,
        k: usize,
        origin_mode: OriginMode,
        width_mode: WidthMode,
    ) -> Result<Self> {
        if k == 0 {
            return Err(Error::DegenerateClassCount { k });
        }
        if k > MAX_CLASS_COUNT {
            return Err(Error::InvalidParameter(format!(
                "class count {k} exceeds the maximum of {MAX_CLASS_COUNT}"
            )));
        }
        let origin = origin_mode.origin(min);
        let k_f = k.to_f64().unwrap_or(f64::MAX);

        let mut width = if max == min {
            1.0
        } else {
            let raw = (max - origin) / k_f;
            match width_mode {
                WidthMode::Ceiled => raw.ceil(),
                WidthMode::Exact => raw,
            }
        };
        // boundaries only stay distinct with a step of at least one ulp
        loop {
            let step = ulp(origin.abs().max((origin + k_f * width).abs()));
            if !step.is_finite() || width >= step {
                break;
            }
            width = step;
        }

        let mut boundaries: Vec<f64> = (0..=k)
            .map(|q| origin + q.to_f64().unwrap_or(f64::MAX) * width)
            .collect();
        if boundaries[k] < max {
            boundaries[k] = max;
        }

        if !width.is_finite() || boundaries.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::Computation(format!(
                "interval width {width} cannot separate {k} classes starting at {origin}"
            )));
        }

        Ok(Self { boundaries, width })
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn origin(&self) -> f64 {
        self.boundaries[0]
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Lower and upper boundary of class `q`
    pub fn bounds(&self, q: usize) -> Option<(f64, f64)> {
        Some((*self.boundaries.get(q)?, *self.boundaries.get(q + 1)?))
    }

    /// Index of the class `value` falls in, or `None` outside the layout
    pub fn class_of(&self, value: f64) -> Option<usize> {
        let k = self.len();
        match self.boundaries.partition_point(|&b| b <= value) {
            0 => None,
            i if i <= k => Some(i - 1),
            _ if value == self.boundaries[k] => Some(k - 1),
            _ => None,
        }
    }
}

/// Distance from `|x|` to the next larger float
fn ulp(x: f64) -> f64 {
    let x = x.abs();
    f64::from_bits(x.to_bits() + 1) - x
}
