use std::path::PathBuf;

use clap::Args;

use crate::{config::ChartConfig, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ShowConfigArg {
    /// Write the configuration here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ShowConfigArg, config: &ChartConfig) -> anyhow::Result<()> {
    Output::create(arg.output.clone())?.json(config)
}
