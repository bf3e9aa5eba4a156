//! Value counts of a categorical column

use crate::load::ColumnData;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// One distinct value and how often it occurs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Share of all rows in the column, missing ones included
    pub percentage: f64,
}

/// Counts of every distinct value of a column, most frequent first
///
/// Values with equal counts keep the order they first appear in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub column: String,
    /// Rows in the column
    pub total: usize,
    pub missing: usize,
    pub categories: Vec<CategoryCount>,
}

impl CategoryDistribution {
    pub fn from_column(column: &ColumnData) -> Self {
        let total = column.len();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut missing = 0;

        for field in column.fields() {
            let Some(value) = field.as_deref() else {
                missing += 1;
                continue;
            };
            let slot = *index.entry(value).or_insert_with(|| {
                counts.push((value, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        // stable, so ties stay in first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let categories = counts
            .into_iter()
            .map(|(value, count)| CategoryCount {
                value: value.to_string(),
                count,
                percentage: percentage_of(count, total),
            })
            .collect::<Vec<_>>();
        debug!(
            column = column.name(),
            distinct = categories.len(),
            missing,
            "counted categories"
        );

        Self {
            column: column.name().to_string(),
            total,
            missing,
            categories,
        }
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Count of `value`, or `0` if it never occurs
    pub fn count_of(&self, value: &str) -> usize {
        self.categories
            .iter()
            .find(|category| category.value == value)
            .map_or(0, |category| category.count)
    }
}

fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

impl fmt::Display for CategoryDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distribution of {:?} ({} rows)", self.column, self.total)?;
        for category in &self.categories {
            write!(
                f,
                "\n   {}: {} ({:.1}%)",
                category.value, category.count, category.percentage
            )?;
        }
        if self.missing > 0 {
            write!(
                f,
                "\n   (missing): {} ({:.1}%)",
                self.missing,
                percentage_of(self.missing, self.total)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn column(fields: &[Option<&str>]) -> ColumnData {
        ColumnData::new(
            "Employment",
            fields.iter().map(|f| f.map(str::to_string)).collect(),
        )
    }

    #[test]
    fn test_counts_most_frequent_first() {
        let data = column(&[
            Some("Student"),
            Some("Full-time"),
            None,
            Some("Part-time"),
            Some("Full-time"),
            Some("Part-time"),
            Some("Full-time"),
            Some("Contractor"),
        ]);
        let distribution = CategoryDistribution::from_column(&data);

        assert_eq!(distribution.total, 8);
        assert_eq!(distribution.missing, 1);
        let order: Vec<_> = distribution
            .categories
            .iter()
            .map(|category| (category.value.as_str(), category.count))
            .collect();
        assert_eq!(
            order,
            vec![("Full-time", 3), ("Part-time", 2), ("Student", 1), ("Contractor", 1)]
        );
        assert_relative_eq!(distribution.categories[0].percentage, 37.5);
        assert_eq!(distribution.count_of("Contractor"), 1);
        assert_eq!(distribution.count_of("Retired"), 0);
    }

    #[test]
    fn test_all_missing() {
        let distribution = CategoryDistribution::from_column(&column(&[None, None]));
        assert!(distribution.is_empty());
        assert_eq!(distribution.missing, 2);

        let empty = CategoryDistribution::from_column(&column(&[]));
        assert_eq!(empty.total, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_display() {
        let data = column(&[Some("a"), Some("b"), Some("a"), None]);
        let text = CategoryDistribution::from_column(&data).to_string();
        assert!(text.starts_with("Distribution of \"Employment\" (4 rows)"));
        assert!(text.contains("\n   a: 2 (50.0%)"));
        assert!(text.contains("\n   b: 1 (25.0%)"));
        assert!(text.ends_with("(missing): 1 (25.0%)"));
    }
}
