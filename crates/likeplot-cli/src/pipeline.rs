//! Load, lay out and render one chart.
//!
//! Each chart pipeline owns its data from start to finish and shares nothing
//! with the others, so pipelines can run on separate threads and fail
//! independently.

use std::path::Path;

use anyhow::Context;
use likeplot_layout::chart::{
    ChartLayout, boxplot::BoxplotLayout, grouped_bar::GroupedBarLayout, line::LineLayout,
};
use likeplot_render::{Backend, svg::SvgBackend};
use tracing::{debug, info};

use crate::{
    config::ChartConfig,
    data::{self, AgeGroupLikes, DailyLikes, PlatformPostLikes},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Boxplot,
    GroupedBar,
    Line,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Boxplot, Self::GroupedBar, Self::Line];

    /// Id of the page container this chart is drawn into.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Boxplot => "boxplot",
            Self::GroupedBar => "barplot",
            Self::Line => "lineplot",
        }
    }
}

pub fn build_layout(
    kind: ChartKind,
    path: &Path,
    config: &ChartConfig,
) -> anyhow::Result<Box<dyn ChartLayout>> {
    let chart = kind.container_id();
    let layout: Box<dyn ChartLayout> = match kind {
        ChartKind::Boxplot => {
            let records = data::load_records::<AgeGroupLikes>(path)?;
            info!(chart, rows = records.len(), "dataset loaded");
            let layout = BoxplotLayout::new(
                &config.frame,
                &config.boxplot,
                records.into_iter().map(|r| (r.age_group, r.likes)),
            )
            .with_context(|| format!("Failed to lay out {chart} from {}", path.display()))?;
            for glyph in layout.glyphs() {
                debug!(chart, category = %glyph.category, summary = ?glyph.summary, "group summarized");
            }
            Box::new(layout)
        }
        ChartKind::GroupedBar => {
            let records = data::load_records::<PlatformPostLikes>(path)?;
            info!(chart, rows = records.len(), "dataset loaded");
            let layout = GroupedBarLayout::new(
                &config.frame,
                &config.barplot,
                records
                    .into_iter()
                    .map(|r| (r.platform, r.post_type, r.avg_likes)),
            )
            .with_context(|| format!("Failed to lay out {chart} from {}", path.display()))?;
            debug!(
                chart,
                outer_bandwidth = layout.outer_scale().bandwidth(),
                inner_bandwidth = layout.inner_scale().bandwidth(),
                y_domain = ?layout.y_scale().domain(),
                "scales computed"
            );
            Box::new(layout)
        }
        ChartKind::Line => {
            let records = data::load_records::<DailyLikes>(path)?;
            info!(chart, rows = records.len(), "dataset loaded");
            let layout = LineLayout::new(
                &config.frame,
                &config.lineplot,
                records.into_iter().map(|r| (r.date, r.avg_likes)),
            )
            .with_context(|| format!("Failed to lay out {chart} from {}", path.display()))?;
            debug!(
                chart,
                step = layout.x_scale().step(),
                y_domain = ?layout.y_scale().domain(),
                "scales computed"
            );
            Box::new(layout)
        }
    };
    Ok(layout)
}

pub fn render_svg(kind: ChartKind, path: &Path, config: &ChartConfig) -> anyhow::Result<String> {
    let layout = build_layout(kind, path, config)?;
    let scene = layout.to_scene();
    let svg = SvgBackend::default()
        .render(&scene)
        .with_context(|| format!("Failed to render {}", layout.kind()))?;
    info!(chart = layout.kind(), shapes = scene.items.len(), "chart rendered");
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sample(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data")
            .join(name)
    }

    #[test]
    fn test_container_ids_match_layout_kinds() {
        let config = ChartConfig::default();
        let sources = [
            (ChartKind::Boxplot, "socialMedia.csv"),
            (ChartKind::GroupedBar, "socialMediaAvg.csv"),
            (ChartKind::Line, "socialMediaTime.csv"),
        ];
        for (kind, file) in sources {
            let layout = build_layout(kind, &sample(file), &config).unwrap();
            assert_eq!(layout.kind(), kind.container_id());
        }
    }

    #[test]
    fn test_renders_sample_datasets() {
        let config = ChartConfig::default();
        let svg = render_svg(ChartKind::GroupedBar, &sample("socialMediaAvg.csv"), &config).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Average Likes</text>"));
        assert_eq!(svg.matches("<rect").count(), 9 + 3);
    }

    #[test]
    fn test_missing_dataset_fails() {
        let err = render_svg(ChartKind::Line, Path::new("missing.csv"), &ChartConfig::default())
            .unwrap_err();
        assert!(err.downcast_ref::<data::DataLoadError>().is_some());
    }
}
