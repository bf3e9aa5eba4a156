//! Reading a single column out of a CSV file

use crate::{Error, Result};
use freqdist_coerce::{CoercedColumn, CoercionRules};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

/// How the CSV input is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// Accept rows with fewer fields than the header; absent cells read as missing
    pub flexible: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            flexible: true,
        }
    }
}

/// Raw fields of one column, in row order
///
/// Empty and whitespace-only cells are stored as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnData {
    name: String,
    fields: Vec<Option<String>>,
}

impl ColumnData {
    pub fn new(name: impl Into<String>, fields: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Option<String>] {
        &self.fields
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Coerce every field with `rules`
    pub fn coerce(&self, rules: &CoercionRules) -> CoercedColumn {
        CoercedColumn::from_fields(self.fields.iter().map(Option::as_deref), rules)
    }
}

/// Load the column named `column` from the CSV file at `path`
pub fn load_column(
    path: impl AsRef<Path>,
    column: &str,
    options: &LoadOptions,
) -> Result<ColumnData> {
    let path = path.as_ref();
    debug!(path = %path.display(), column, "loading column");
    let file = File::open(path)?;
    read_column(file, column, options)
}

/// Read the column named `column` from any CSV source with a header row
pub fn read_column<R: io::Read>(
    reader: R,
    column: &str,
    options: &LoadOptions,
) -> Result<ColumnData> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(options.flexible)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|name| name.trim() == column)
        .ok_or_else(|| Error::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })?;

    let mut fields = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record
            .get(index)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        fields.push(field);
    }

    debug!(column, rows = fields.len(), "read column");
    Ok(ColumnData::new(column, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURVEY: &str = "\
Respondent,YearsCode,Country
1,2-5,NZ
2,,DE
3,10+,US
4,Less than 1 year,FR
5,7,NZ
";

    #[test]
    fn test_read_column_by_name() {
        let column = read_column(SURVEY.as_bytes(), "YearsCode", &LoadOptions::default()).unwrap();
        assert_eq!(column.name(), "YearsCode");
        assert_eq!(column.len(), 5);
        assert_eq!(column.fields()[0].as_deref(), Some("2-5"));
        assert_eq!(column.fields()[1], None);

        let coerced = column.coerce(&CoercionRules::default());
        assert_eq!(coerced.values(), &[3.5, 10.0, 7.0]);
        assert_eq!(coerced.missing(), 1);
        assert_eq!(coerced.rejected(), 1);
    }

    #[test]
    fn test_missing_column_lists_headers() {
        let err = read_column(SURVEY.as_bytes(), "Salary", &LoadOptions::default()).unwrap_err();
        match err {
            Error::MissingColumn { column, available } => {
                assert_eq!(column, "Salary");
                assert_eq!(available, vec!["Respondent", "YearsCode", "Country"]);
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_short_rows_read_as_missing() {
        let data = "a,b\n1,2\n3\n";
        let column = read_column(data.as_bytes(), "b", &LoadOptions::default()).unwrap();
        assert_eq!(column.fields(), &[Some("2".to_string()), None]);
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "x;y\n1;4\n2;5\n";
        let options = LoadOptions {
            delimiter: b';',
            ..Default::default()
        };
        let column = read_column(data.as_bytes(), "y", &options).unwrap();
        assert_eq!(column.len(), 2);
    }
}
