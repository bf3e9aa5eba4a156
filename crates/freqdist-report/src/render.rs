//! Console rendering of frequency tables

use freqdist_table::{format_bound, FrequencyTable, LabelStyle, RelativeScale};
use std::fmt::Write as _;

/// Options for [`render_table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub labels: LabelStyle,
}

const HEADERS: [&str; 7] = [
    "Class",
    "Interval",
    "Midpoint",
    "f",
    "Relative",
    "Cumulative f",
    "Cumulative rel.",
];

/// Format a relative frequency on its scale: `20.00%` or `0.2000`
pub fn format_relative(value: f64, scale: RelativeScale) -> String {
    match scale {
        RelativeScale::Percentage => format!("{value:.2}%"),
        RelativeScale::Fraction => format!("{value:.4}"),
    }
}

/// Render `table` as a fixed-width text table with a totals line
pub fn render_table(table: &FrequencyTable, options: &RenderOptions) -> String {
    let scale = table.relative_scale();
    let cells: Vec<[String; 7]> = table
        .iter()
        .map(|row| {
            [
                row.class_number().to_string(),
                row.label(options.labels),
                format_bound(row.midpoint),
                row.frequency.to_string(),
                format_relative(row.relative_frequency, scale),
                row.cumulative_frequency.to_string(),
                format_relative(row.cumulative_relative_frequency, scale),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(rule_len));
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    let _ = writeln!(out, "{}", "-".repeat(rule_len));
    let _ = writeln!(
        out,
        "n = {}, k = {}, width = {}",
        table.total_count(),
        table.class_count(),
        format_bound(table.width())
    );
    out
}

// interval left-aligned, everything else right-aligned
fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            if column == 1 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}
