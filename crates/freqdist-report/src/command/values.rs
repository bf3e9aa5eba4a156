use freqdist_report::{ColumnData, FrequencyReport};

use super::TableOptions;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ValuesArg {
    /// Observations; ranges like "2-5" and open ends like "10+" are accepted
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
    #[clap(flatten)]
    options: TableOptions,
}

pub(crate) fn run(arg: &ValuesArg) -> anyhow::Result<()> {
    let config = arg.options.report_config()?;
    let column = ColumnData::new("values", arg.values.iter().cloned().map(Some).collect());
    let report = FrequencyReport::from_column(&column, &config)?;
    arg.options.emit(&report, &config)
}
