//! Delimited export of frequency tables

use crate::Result;
use freqdist_table::{format_bound, ClassRow, FrequencyTable, LabelStyle, RelativeScale};
use serde::{Deserialize, Serialize};
use std::io;
use tracing::debug;

/// Options for [`write_csv`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub labels: LabelStyle,
    /// Add class number, boundaries, midpoint and cumulative relative frequency
    pub extended: bool,
    pub delimiter: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            labels: LabelStyle::Boundaries,
            extended: false,
            delimiter: b',',
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    #[serde(rename = "Interval")]
    interval: &'a str,
    #[serde(rename = "Frequency")]
    frequency: usize,
    #[serde(rename = "Cumulative Frequency")]
    cumulative_frequency: usize,
    #[serde(rename = "Relative Frequency")]
    relative_frequency: f64,
}

#[derive(Serialize)]
struct ExtendedRecord<'a> {
    #[serde(rename = "Class")]
    class: usize,
    #[serde(rename = "Interval")]
    interval: &'a str,
    #[serde(rename = "Lower")]
    lower: f64,
    #[serde(rename = "Upper")]
    upper: f64,
    #[serde(rename = "Midpoint")]
    midpoint: f64,
    #[serde(rename = "Frequency")]
    frequency: usize,
    #[serde(rename = "Cumulative Frequency")]
    cumulative_frequency: usize,
    #[serde(rename = "Relative Frequency")]
    relative_frequency: f64,
    #[serde(rename = "Cumulative Relative Frequency")]
    cumulative_relative_frequency: f64,
}

/// Round to two decimals for percentages and four for fractions
pub fn round_relative(value: f64, scale: RelativeScale) -> f64 {
    let factor = match scale {
        RelativeScale::Percentage => 100.0,
        RelativeScale::Fraction => 10_000.0,
    };
    (value * factor).round() / factor
}

/// Write `table` as delimited text with a header row
pub fn write_csv<W: io::Write>(
    table: &FrequencyTable,
    writer: W,
    options: &ExportOptions,
) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);
    let scale = table.relative_scale();

    for row in table {
        let interval = row.label(options.labels);
        if options.extended {
            csv.serialize(extended_record(row, &interval, scale))?;
        } else {
            csv.serialize(Record {
                interval: &interval,
                frequency: row.frequency,
                cumulative_frequency: row.cumulative_frequency,
                relative_frequency: round_relative(row.relative_frequency, scale),
            })?;
        }
    }
    csv.flush()?;
    debug!(rows = table.class_count(), extended = options.extended, "wrote table");
    Ok(())
}

/// Render `table` to a delimited string
pub fn to_csv_string(table: &FrequencyTable, options: &ExportOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn extended_record<'a>(row: &ClassRow, interval: &'a str, scale: RelativeScale) -> ExtendedRecord<'a> {
    ExtendedRecord {
        class: row.class_number(),
        interval,
        lower: parse_bound(row.lower),
        upper: parse_bound(row.upper),
        midpoint: parse_bound(row.midpoint),
        frequency: row.frequency,
        cumulative_frequency: row.cumulative_frequency,
        relative_frequency: round_relative(row.relative_frequency, scale),
        cumulative_relative_frequency: round_relative(row.cumulative_relative_frequency, scale),
    }
}

// strips floating noise such as 0.30000000000000004 the same way labels do
fn parse_bound(value: f64) -> f64 {
    format_bound(value).parse().unwrap_or(value)
}
