//! Five-number summaries behind the boxplot.

use std::{io::Write as _, path::PathBuf};

use anyhow::Context;
use clap::Args;
use likeplot_stats::{grouping::CategoryGrouping, summary::FiveNumberSummary};
use serde::Serialize;

use crate::{
    data::{self, AgeGroupLikes},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// CSV with `AgeGroup` and `Likes` columns
    pub input: PathBuf,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct GroupSummary {
    category: String,
    count: usize,
    #[serde(flatten)]
    summary: FiveNumberSummary,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let records = data::load_records::<AgeGroupLikes>(&arg.input)?;
    let rows = summarize(records)
        .with_context(|| format!("Failed to summarize {}", arg.input.display()))?;

    if arg.json {
        return Output::create(arg.output.clone())?.json(&rows);
    }
    let mut output = Output::create(arg.output.clone())?;
    write_table(&mut output, &rows)
        .with_context(|| format!("Cannot write table to {}", output.destination()))?;
    output.finish()
}

fn summarize(records: Vec<AgeGroupLikes>) -> anyhow::Result<Vec<GroupSummary>> {
    let groups = CategoryGrouping::from_pairs(records.into_iter().map(|r| (r.age_group, r.likes)));
    let summaries = groups.summarize()?;
    let rows = groups
        .iter()
        .zip(&summaries)
        .map(|((category, values), (_, summary))| GroupSummary {
            category: category.clone(),
            count: values.len(),
            summary: *summary,
        })
        .collect();
    Ok(rows)
}

fn write_table(output: &mut Output, rows: &[GroupSummary]) -> std::io::Result<()> {
    writeln!(
        output,
        "  {:<20} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "AgeGroup", "Posts", "Min", "Q1", "Median", "Q3", "Max",
    )?;
    // label(20) + count(8) + five values(10 each) + spaces(6)
    writeln!(output, "  {}", "-".repeat(84))?;
    for row in rows {
        let s = &row.summary;
        writeln!(
            output,
            "  {:<20} {:>8} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            row.category, row.count, s.min, s.q1, s.median, s.q3, s.max,
        )?;
    }
    Ok(())
}
