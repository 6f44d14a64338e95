use std::path::PathBuf;

use clap::Args;
use essaylab_analysis::{
    Verbosity,
    driver::{self, AnalysisPlan, DEFAULT_FEATURE, DEFAULT_SET, FeatureStep},
};
use tracing::info;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalysisArg {
    /// Path to the instances JSON file
    pub instances: PathBuf,

    /// Essay sets to run the correlation test on (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [DEFAULT_SET])]
    pub correlate: Vec<u32>,

    /// Feature reports to produce, as SET:FEATURE (comma-separated)
    #[arg(
        long = "feature",
        value_delimiter = ',',
        default_values_t = [FeatureStep { set: DEFAULT_SET, feature: DEFAULT_FEATURE.to_owned() }]
    )]
    pub features: Vec<FeatureStep>,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalysisArg, verbosity: Verbosity) -> anyhow::Result<()> {
    let collection = util::read_instances_file(&arg.instances)?;
    let plan = AnalysisPlan {
        correlation_sets: arg.correlate.clone(),
        feature_steps: arg.features.clone(),
    };

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    let outcome = driver::analysis(&collection.instances, &plan, verbosity, &mut output)?;
    output.finish()?;

    for report in &outcome.correlations {
        info!(
            "Correlation test passed for essay set {} ({} instances)",
            report.set, report.instance_count
        );
    }
    info!("Produced {} feature reports", outcome.features.len());
    Ok(())
}
