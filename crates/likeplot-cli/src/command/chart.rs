use std::path::PathBuf;

use clap::Args;

use crate::{config::ChartConfig, pipeline::{self, ChartKind}, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ChartArg {
    /// CSV source of the chart
    pub input: PathBuf,

    /// Write the SVG here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(kind: ChartKind, arg: &ChartArg, config: &ChartConfig) -> anyhow::Result<()> {
    let svg = pipeline::render_svg(kind, &arg.input, config)?;
    Output::create(arg.output.clone())?.document(&svg)
}
