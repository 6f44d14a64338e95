use clap::{Parser, Subcommand};
use essaylab_analysis::Verbosity;

use self::{
    analysis::AnalysisArg, analyze_feature::AnalyzeFeatureArg, correlate::CorrelateArg,
    sets::SetsArg,
};
use crate::util;

mod analysis;
mod analyze_feature;
mod correlate;
mod sets;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Print correlation coefficients and debug logs
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Show the number of instances in each essay set
    Sets(#[clap(flatten)] SetsArg),
    /// Correlate every feature with domain1_score, per essay set
    Correlate(#[clap(flatten)] CorrelateArg),
    /// Report the value distribution and mean of one feature
    AnalyzeFeature(#[clap(flatten)] AnalyzeFeatureArg),
    /// Run correlation tests followed by feature reports
    Analysis(#[clap(flatten)] AnalysisArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let verbosity = Verbosity::from(args.verbose);
    util::init_logging(verbosity)?;
    match args.mode {
        Mode::Sets(arg) => sets::run(&arg)?,
        Mode::Correlate(arg) => correlate::run(&arg, verbosity)?,
        Mode::AnalyzeFeature(arg) => analyze_feature::run(&arg)?,
        Mode::Analysis(arg) => analysis::run(&arg, verbosity)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_analysis_defaults() {
        let args = CommandArgs::try_parse_from(["essaylab", "analysis", "data.json"]).unwrap();
        assert!(!args.verbose);
        let Mode::Analysis(arg) = args.mode else {
            panic!("expected analysis mode");
        };
        assert_eq!(arg.correlate, vec![1]);
        assert_eq!(arg.features.len(), 1);
        assert_eq!(arg.features[0].to_string(), "1:grade");
    }

    #[test]
    fn test_analysis_plan_arguments() {
        let args = CommandArgs::try_parse_from([
            "essaylab",
            "analysis",
            "data.json",
            "--correlate",
            "1,2,3",
            "--feature",
            "2:grade,3:word_count",
            "--verbose",
        ])
        .unwrap();
        assert!(args.verbose);
        let Mode::Analysis(arg) = args.mode else {
            panic!("expected analysis mode");
        };
        assert_eq!(arg.correlate, vec![1, 2, 3]);
        let features = arg
            .features
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(features, vec!["2:grade", "3:word_count"]);
    }

    #[test]
    fn test_invalid_feature_step_is_rejected() {
        let result =
            CommandArgs::try_parse_from(["essaylab", "analysis", "data.json", "--feature", "grade"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_correlate_requires_set() {
        assert!(CommandArgs::try_parse_from(["essaylab", "correlate", "data.json"]).is_err());
        let args =
            CommandArgs::try_parse_from(["essaylab", "correlate", "data.json", "--set", "4"])
                .unwrap();
        let Mode::Correlate(arg) = args.mode else {
            panic!("expected correlate mode");
        };
        assert_eq!(arg.set, vec![4]);
        assert!(!arg.ranked);
    }
}
