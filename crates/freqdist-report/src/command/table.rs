use std::path::PathBuf;

use anyhow::Context as _;
use freqdist_report::{load_column, FrequencyReport};

use super::TableOptions;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TableArg {
    /// CSV file with a header row
    input: PathBuf,
    /// Header of the column to tabulate
    #[arg(long, short)]
    column: String,
    /// Also count the distinct values of this column
    #[arg(long, value_name = "COLUMN")]
    category: Option<String>,
    #[clap(flatten)]
    options: TableOptions,
}

pub(crate) fn run(arg: &TableArg) -> anyhow::Result<()> {
    let config = arg.options.report_config()?;
    let column = load_column(&arg.input, &arg.column, &config.load)
        .with_context(|| format!("Failed to load {}", arg.input.display()))?;
    let mut report = FrequencyReport::from_column(&column, &config)?;
    if let Some(name) = &arg.category {
        let categories = load_column(&arg.input, name, &config.load)
            .with_context(|| format!("Failed to load {}", arg.input.display()))?;
        report = report.with_categories(&categories);
    }
    arg.options.emit(&report, &config)
}
