use std::path::PathBuf;

use clap::Args;
use essaylab_analysis::{feature_report, filter};
use tracing::{debug, warn};

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeFeatureArg {
    /// Path to the instances JSON file
    pub instances: PathBuf,

    /// Essay set to analyze
    #[arg(long)]
    pub set: u32,

    /// Feature name to analyze
    #[arg(long)]
    pub feature: String,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeFeatureArg) -> anyhow::Result<()> {
    let collection = util::read_instances_file(&arg.instances)?;
    let filtered = filter::filter(&collection.instances, arg.set);
    if filtered.is_empty() {
        warn!("Essay set {} has no instances", arg.set);
    }
    debug!("Analyzing {} over {} instances", arg.feature, filtered.len());

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    feature_report::analyse_feature(&filtered, &arg.feature, &mut output)?;
    output.finish()
}
