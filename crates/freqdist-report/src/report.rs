//! A frequency table together with the bookkeeping of how it was obtained

use crate::category::CategoryDistribution;
use crate::config::ReportConfig;
use crate::load::ColumnData;
use crate::{Error, Result};
use freqdist_coerce::CoercedColumn;
use freqdist_core::Sample;
use freqdist_describe::{Outlier, Summary};
use freqdist_table::{FrequencyTable, FrequencyTableBuilder};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything printed or exported for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub column: String,
    /// Rows in the source column
    pub total: usize,
    /// Rows that coerced to a number
    pub valid: usize,
    pub missing: usize,
    pub rejected: usize,
    pub table: FrequencyTable,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<Summary>,
    /// Values outside the 1.5 IQR fences, indexed by 0-based data row of the
    /// source column
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub outliers: Vec<Outlier>,
    /// Value counts of a companion categorical column
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub categories: Option<CategoryDistribution>,
}

impl FrequencyReport {
    /// Coerce a raw column, then build its table and optional summary
    ///
    /// A column without a single usable value fails with
    /// [`Error::EmptyColumn`], reporting how many rows were seen.
    #[instrument(level = "debug", skip_all, fields(column = column.name(), rows = column.len()))]
    pub fn from_column(column: &ColumnData, config: &ReportConfig) -> Result<Self> {
        let coerced = column.coerce(&config.coercion);
        Self::from_coerced(column.name(), coerced, config)
    }

    /// Build a report over values that are already numeric
    pub fn from_values(name: &str, values: &[f64], config: &ReportConfig) -> Result<Self> {
        let sample = Sample::new(values.to_vec())?;
        Self::from_sample(name, &sample, values.len(), 0, 0, config)
    }

    fn from_coerced(name: &str, coerced: CoercedColumn, config: &ReportConfig) -> Result<Self> {
        let (total, missing, rejected) = (coerced.total(), coerced.missing(), coerced.rejected());
        if coerced.valid() == 0 {
            return Err(Error::EmptyColumn {
                column: name.to_string(),
                total,
                missing,
                rejected,
            });
        }
        let rows = coerced.rows().to_vec();
        let sample = coerced.into_sample()?;
        let mut report = Self::from_sample(name, &sample, total, missing, rejected, config)?;
        for outlier in &mut report.outliers {
            outlier.index = rows[outlier.index];
        }
        Ok(report)
    }

    fn from_sample(
        name: &str,
        sample: &Sample,
        total: usize,
        missing: usize,
        rejected: usize,
        config: &ReportConfig,
    ) -> Result<Self> {
        let table = FrequencyTableBuilder::with_config(config.table.clone()).build_sample(sample)?;
        let summary = config.summary.then(|| Summary::from_validated(sample));
        let outliers = summary
            .as_ref()
            .map(|summary| summary.outliers(sample.values()))
            .unwrap_or_default();
        info!(
            column = name,
            valid = sample.len(),
            total,
            classes = table.class_count(),
            "built frequency table"
        );
        Ok(Self {
            column: name.to_string(),
            total,
            valid: sample.len(),
            missing,
            rejected,
            table,
            summary,
            outliers,
            categories: None,
        })
    }

    /// Attach the value counts of a categorical column from the same source
    pub fn with_categories(mut self, column: &ColumnData) -> Self {
        self.categories = Some(CategoryDistribution::from_column(column));
        self
    }

    /// Rows that did not make it into the table
    pub fn dropped(&self) -> usize {
        self.total - self.valid
    }
}
