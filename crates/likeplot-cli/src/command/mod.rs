use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::{config::ChartConfig, logging, pipeline::ChartKind};

use self::{chart::ChartArg, page::PageArg, show_config::ShowConfigArg, summary::SummaryArg};

mod chart;
mod page;
mod show_config;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// JSON file overriding the default chart configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// What to produce
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Render the Likes-per-age-group boxplot as SVG
    Boxplot(#[clap(flatten)] ChartArg),
    /// Render the average likes per platform and post type as a grouped bar chart
    Bar(#[clap(flatten)] ChartArg),
    /// Render the average likes per date as a line chart
    Line(#[clap(flatten)] ChartArg),
    /// Render all three charts into one HTML page
    Page(#[clap(flatten)] PageArg),
    /// Print five-number summaries of Likes per age group
    Summary(#[clap(flatten)] SummaryArg),
    /// Print the effective chart configuration
    Config(#[clap(flatten)] ShowConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.verbose, args.quiet);
    let config = ChartConfig::load(args.config.as_deref())?;

    match args.mode {
        Mode::Boxplot(arg) => chart::run(ChartKind::Boxplot, &arg, &config)?,
        Mode::Bar(arg) => chart::run(ChartKind::GroupedBar, &arg, &config)?,
        Mode::Line(arg) => chart::run(ChartKind::Line, &arg, &config)?,
        Mode::Page(arg) => page::run(&arg, &config)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Config(arg) => show_config::run(&arg, &config)?,
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
    fn test_global_flags_after_subcommand() {
        let args =
            CommandArgs::try_parse_from(["likeplot", "bar", "avg.csv", "-vv", "--config", "c.json"])
                .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        assert!(matches!(args.mode, Mode::Bar(_)));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(CommandArgs::try_parse_from(["likeplot", "-q", "-v", "config"]).is_err());
    }

    #[test]
    fn test_page_requires_all_sources() {
        assert!(
            CommandArgs::try_parse_from(["likeplot", "page", "--boxplot", "a.csv"]).is_err()
        );
    }
}
