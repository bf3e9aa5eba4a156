use std::{fs::File, io, path::PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use freqdist_report::{
    render_table, write_csv, ExportOptions, FrequencyReport, RenderOptions, ReportConfig,
};
use freqdist_table::{ClampBounds, LabelStyle, OriginMode, RelativeScale, WidthMode};
use tracing_subscriber::EnvFilter;

use self::{table::TableArg, values::ValuesArg};

mod table;
mod values;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Tabulate one column of a CSV file
    Table(#[clap(flatten)] TableArg),
    /// Tabulate values given on the command line
    Values(#[clap(flatten)] ValuesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Table(arg) => table::run(&arg)?,
        Mode::Values(arg) => values::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LabelArg {
    /// Class boundaries as computed, e.g. "70 - 94"
    #[default]
    Boundaries,
    /// Inclusive integer classes, e.g. "70 - 93"
    Inclusive,
}

impl From<LabelArg> for LabelStyle {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Boundaries => LabelStyle::Boundaries,
            LabelArg::Inclusive => LabelStyle::DiscreteInclusive,
        }
    }
}

/// Table options shared by every subcommand
///
/// Flags override the values read from `--config`.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TableOptions {
    /// Use exactly this many classes instead of Sturges' rule
    #[arg(long, short = 'k')]
    classes: Option<usize>,
    /// Do not clamp the Sturges class count
    #[arg(long, conflicts_with_all = ["clamp_min", "clamp_max"])]
    no_clamp: bool,
    /// Smallest class count Sturges' rule may produce
    #[arg(long)]
    clamp_min: Option<usize>,
    /// Largest class count Sturges' rule may produce
    #[arg(long)]
    clamp_max: Option<usize>,
    /// Relative frequencies as fractions instead of percentages
    #[arg(long)]
    fraction: bool,
    /// Start the first class at the minimum instead of its floor
    #[arg(long)]
    exact_origin: bool,
    /// Do not round the class width up to a whole number
    #[arg(long)]
    exact_width: bool,
    /// Interval label style
    #[arg(long, value_enum)]
    labels: Option<LabelArg>,
    /// Print descriptive statistics and outliers
    #[arg(long)]
    summary: bool,
    /// JSON file with report options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the table to this file instead of printing it
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Export the extended column set
    #[arg(long)]
    extended: bool,
    /// Emit the whole report as JSON
    #[arg(long)]
    json: bool,
}

impl TableOptions {
    fn report_config(&self) -> anyhow::Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_json_file(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?,
            None => ReportConfig::default(),
        };

        let table = &mut config.table;
        if let Some(k) = self.classes {
            table.class_count_override = Some(k);
        }
        if self.no_clamp {
            table.clamp = None;
        } else if self.clamp_min.is_some() || self.clamp_max.is_some() {
            let current = table.clamp.unwrap_or_default();
            table.clamp = Some(ClampBounds::new(
                self.clamp_min.unwrap_or(current.min),
                self.clamp_max.unwrap_or(current.max),
            ));
        }
        if self.fraction {
            table.relative_scale = RelativeScale::Fraction;
        }
        if self.exact_origin {
            table.origin_mode = OriginMode::ExactMin;
        }
        if self.exact_width {
            table.width_mode = WidthMode::Exact;
        }
        if let Some(labels) = self.labels {
            config.labels = labels.into();
        }
        config.summary |= self.summary;
        Ok(config)
    }

    fn emit(&self, report: &FrequencyReport, config: &ReportConfig) -> anyhow::Result<()> {
        let wants_json = self.json
            || self
                .output
                .as_ref()
                .is_some_and(|path| path.extension().is_some_and(|ext| ext == "json"));

        match (&self.output, wants_json) {
            (Some(path), json) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                if json {
                    serde_json::to_writer_pretty(io::BufWriter::new(file), report)
                        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
                } else {
                    let options = ExportOptions {
                        labels: config.labels,
                        extended: self.extended,
                        ..Default::default()
                    };
                    write_csv(&report.table, io::BufWriter::new(file), &options)
                        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
                }
                eprintln!(
                    "Wrote {} classes for {:?} to {}",
                    report.table.class_count(),
                    report.column,
                    path.display()
                );
            }
            (None, true) => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            (None, false) => print_report(report, config),
        }
        Ok(())
    }
}

fn print_report(report: &FrequencyReport, config: &ReportConfig) {
    println!(
        "Frequency table for {:?} ({} of {} rows usable)",
        report.column, report.valid, report.total
    );
    if report.dropped() > 0 {
        println!(
            "  dropped {} rows: {} missing, {} not numeric",
            report.dropped(),
            report.missing,
            report.rejected
        );
    }
    println!();
    print!(
        "{}",
        render_table(
            &report.table,
            &RenderOptions {
                labels: config.labels
            }
        )
    );

    if let Some(summary) = &report.summary {
        println!();
        println!("{summary}");
        let fences = summary.outlier_fences(freqdist_describe::TUKEY_MULTIPLIER);
        println!(
            "Outlier fences (1.5 IQR): [{:.4}, {:.4}]",
            fences.lower, fences.upper
        );
        for outlier in &report.outliers {
            println!("  outlier at row {}: {}", outlier.index + 1, outlier.value);
        }
    }

    if let Some(categories) = &report.categories {
        println!();
        println!("{categories}");
    }
}
