//! All three charts on one page.
//!
//! The pipelines run on their own threads. A chart that fails is logged and
//! its container stays empty; the command itself only fails when no chart
//! could be drawn.

use std::{path::PathBuf, thread};

use clap::Args;
use likeplot_render::page::HtmlPage;
use tracing::{info, warn};

use crate::{
    config::ChartConfig,
    pipeline::{self, ChartKind},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct PageArg {
    /// CSV with `AgeGroup` and `Likes` columns
    #[arg(long)]
    pub boxplot: PathBuf,

    /// CSV with `Platform`, `PostType` and `AvgLikes` columns
    #[arg(long)]
    pub barplot: PathBuf,

    /// CSV with `Date` and `AvgLikes` columns
    #[arg(long)]
    pub lineplot: PathBuf,

    /// Page title
    #[arg(long, default_value = "Social media engagement")]
    pub title: String,

    /// Write the HTML here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl PageArg {
    fn source(&self, kind: ChartKind) -> &PathBuf {
        match kind {
            ChartKind::Boxplot => &self.boxplot,
            ChartKind::GroupedBar => &self.barplot,
            ChartKind::Line => &self.lineplot,
        }
    }
}

pub(crate) fn run(arg: &PageArg, config: &ChartConfig) -> anyhow::Result<()> {
    let page = build_page(arg, config)?;
    let html = page.render()?;
    Output::create(arg.output.clone())?.document(&html)
}

fn build_page(arg: &PageArg, config: &ChartConfig) -> anyhow::Result<HtmlPage> {
    let results = thread::scope(|s| {
        let handles = ChartKind::ALL
            .into_iter()
            .map(|kind| {
                let path = arg.source(kind);
                (kind, s.spawn(move || pipeline::render_svg(kind, path, config)))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|(kind, handle)| (kind, handle.join()))
            .collect::<Vec<_>>()
    });

    let mut page = HtmlPage::new(&arg.title);
    for (kind, result) in results {
        let chart = kind.container_id();
        match result {
            Ok(Ok(svg)) => {
                page.set_svg(chart, svg);
            }
            Ok(Err(err)) => warn!(chart, "chart not rendered: {err:#}"),
            Err(_) => warn!(chart, "chart pipeline panicked"),
        }
    }

    if page.rendered_count() == 0 {
        anyhow::bail!("None of the charts could be rendered");
    }
    info!(
        rendered = page.rendered_count(),
        total = ChartKind::ALL.len(),
        "page assembled"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn sample(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data")
            .join(name)
    }

    fn arg(boxplot: PathBuf, barplot: PathBuf, lineplot: PathBuf) -> PageArg {
        PageArg {
            boxplot,
            barplot,
            lineplot,
            title: "test".to_owned(),
            output: None,
        }
    }

    #[test]
    fn test_all_charts_rendered() {
        let arg = arg(
            sample("socialMedia.csv"),
            sample("socialMediaAvg.csv"),
            sample("socialMediaTime.csv"),
        );
        let page = build_page(&arg, &ChartConfig::default()).unwrap();
        assert_eq!(page.rendered_count(), 3);
    }

    #[test]
    fn test_failed_chart_leaves_empty_container() {
        let arg = arg(
            sample("socialMedia.csv"),
            PathBuf::from("missing.csv"),
            sample("socialMediaTime.csv"),
        );
        let page = build_page(&arg, &ChartConfig::default()).unwrap();
        assert_eq!(page.rendered_count(), 2);
        let html = page.render().unwrap();
        assert!(html.contains(r#"<div id="barplot"></div>"#));
        assert!(html.contains(r#"<div id="boxplot"><svg"#));
        assert!(html.contains(r#"<div id="lineplot"><svg"#));
    }

    #[test]
    fn test_all_failed_is_an_error() {
        let missing = PathBuf::from("missing.csv");
        let arg = arg(missing.clone(), missing.clone(), missing);
        assert!(build_page(&arg, &ChartConfig::default()).is_err());
    }
}
