use std::{io::Write as _, path::PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use essaylab_analysis::{
    Verbosity,
    correlation::{self, CorrelationReport},
};
use serde::Serialize;
use tracing::{debug, info};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelateArg {
    /// Path to the instances JSON file
    pub instances: PathBuf,

    /// Essay sets to correlate (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub set: Vec<u32>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// List coefficients from strongest to weakest instead of by feature name
    #[arg(long)]
    pub ranked: bool,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CorrelationOutput<'a> {
    generated_at: DateTime<Utc>,
    reports: &'a [CorrelationReport],
}

pub(crate) fn run(arg: &CorrelateArg, verbosity: Verbosity) -> anyhow::Result<()> {
    let collection = util::read_instances_file(&arg.instances)?;
    let instances = &collection.instances;
    let mut output = Output::from_output_path(arg.output.as_deref())?;

    match arg.format {
        ReportFormat::Text if arg.ranked && verbosity.is_verbose() => {
            for &set in &arg.set {
                let report = correlation::correlate_set(instances, set)?;
                write_ranked(&mut output, &report)?;
            }
            output.finish()?;
        }
        ReportFormat::Text => {
            for &set in &arg.set {
                let report =
                    correlation::correlation_test(instances, set, verbosity, &mut output)?;
                if verbosity.is_quiet() {
                    info!(
                        "Essay set {set}: {} instances (use --verbose to print coefficients)",
                        report.instance_count
                    );
                }
            }
            output.finish()?;
        }
        ReportFormat::Json => {
            let reports = arg
                .set
                .iter()
                .map(|&set| correlation::correlate_set(instances, set))
                .collect::<Result<Vec<_>, _>>()?;
            debug!("Computed {} correlation reports", reports.len());
            output.write_json(&CorrelationOutput {
                generated_at: Utc::now(),
                reports: &reports,
            })?;
        }
    }

    Ok(())
}

fn write_ranked(output: &mut Output, report: &CorrelationReport) -> anyhow::Result<()> {
    writeln!(
        output,
        "Features ranked by |r| against domain1_score for essay set {}, {} instances",
        report.set, report.instance_count
    )?;
    for (rank, c) in report.ranked().iter().enumerate() {
        writeln!(output, "  {:>3}. {:<30} {:>10.4}", rank + 1, c.feature, c.r)?;
    }
    Ok(())
}
