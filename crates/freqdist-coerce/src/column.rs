//! Coercing whole columns of raw fields

use crate::CoercionRules;
use freqdist_core::{Error, Result, Sample};
use tracing::debug;

/// The numeric values that survived coercion of one column
///
/// Keeps enough bookkeeping to explain an empty result: how many rows there
/// were, how many were missing outright and how many had unparseable text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoercedColumn {
    values: Vec<f64>,
    rows: Vec<usize>,
    total: usize,
    missing: usize,
    rejected: usize,
}

impl CoercedColumn {
    /// Coerce every field with `rules`, keeping valid values in input order
    pub fn from_fields<I, S>(fields: I, rules: &CoercionRules) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut column = Self::default();
        for (row, field) in fields.into_iter().enumerate() {
            column.total += 1;
            match field {
                None => column.missing += 1,
                Some(text) => match rules.coerce(text.as_ref()) {
                    Some(value) => {
                        column.values.push(value);
                        column.rows.push(row);
                    }
                    None => column.rejected += 1,
                },
            }
        }
        debug!(
            total = column.total,
            valid = column.values.len(),
            missing = column.missing,
            rejected = column.rejected,
            "coerced column"
        );
        column
    }

    /// Valid values in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 0-based input row of each valid value, parallel to [`values`](Self::values)
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of input rows
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of rows that produced a value
    pub fn valid(&self) -> usize {
        self.values.len()
    }

    /// Rows with no field at all
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Rows whose text could not be parsed
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Turn the surviving values into a [`Sample`]
    ///
    /// Fails with [`Error::EmptySample`] carrying the row total when nothing
    /// survived.
    pub fn into_sample(self) -> Result<Sample> {
        if self.values.is_empty() {
            return Err(Error::empty_sample(self.total));
        }
        Sample::new(self.values)
    }
}
