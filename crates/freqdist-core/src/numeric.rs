//! Numeric observation types accepted by the table builders
//!
//! Samples are processed as `f64` internally. Any primitive number type can be
//! handed to a builder as long as it knows how to widen itself and whether it
//! is finite (integers always are).

use std::fmt::Debug;

/// A single numeric observation
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync {
    /// Widen to `f64` for binning arithmetic
    fn to_f64(&self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

impl Numeric for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[allow(clippy::cast_precision_loss)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
