use std::{io::Write as _, path::PathBuf};

use clap::Args;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct SetsArg {
    /// Path to the instances JSON file
    pub instances: PathBuf,
}

pub(crate) fn run(arg: &SetsArg) -> anyhow::Result<()> {
    let collection = util::read_instances_file(&arg.instances)?;
    let sizes = collection.set_sizes();

    let mut output = Output::stdout();
    writeln!(output, "  {:>6} {:>10}", "Set", "Instances")?;
    writeln!(output, "  {}", "-".repeat(17))?;
    for (set, count) in &sizes {
        writeln!(output, "  {set:>6} {count:>10}")?;
    }
    output.finish()
}
