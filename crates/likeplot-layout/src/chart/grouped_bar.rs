//! Grouped bar chart with a color legend.
//!
//! Outer categories (e.g. platforms) split the plot width into bands; each
//! outer band is split again among the inner categories (e.g. post types),
//! which also pick the bar color. A legend maps inner categories to colors.

use likeplot_stats::grouping::distinct_in_order;
use serde::{Deserialize, Serialize};

use super::{AxisTitles, ChartLayout, VALUE_AXIS_TICKS, base_scene, checked_max, value_scale};
use crate::{
    LayoutError,
    axis::Axis,
    frame::ChartFrame,
    scale::{BandScale, ColorScale, LinearScale},
    scene::{Group, Point, Rect, Scene, Text, TextAnchor},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedBarStyle {
    pub outer_padding: f64,
    pub inner_padding: f64,
    /// One color per inner category, in first-seen order.
    pub palette: Vec<String>,
    /// Distance of the legend's left edge from the right canvas edge.
    pub legend_right_offset: f64,
    pub legend_swatch_size: f64,
    pub legend_row_height: f64,
    pub legend_label_offset: f64,
    pub x_title: String,
    pub x_title_offset: f64,
    pub y_title: String,
    pub y_title_offset: f64,
}

impl Default for GroupedBarStyle {
    fn default() -> Self {
        Self {
            outer_padding: 0.2,
            inner_padding: 0.2,
            palette: ["red", "orange", "blue"].map(String::from).to_vec(),
            legend_right_offset: 75.0,
            legend_swatch_size: 14.0,
            legend_row_height: 22.0,
            legend_label_offset: 20.0,
            x_title: "Platform".to_owned(),
            x_title_offset: 10.0,
            y_title: "Average Likes".to_owned(),
            y_title_offset: 18.0,
        }
    }
}

/// One observation drawn as a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub group: String,
    pub subgroup: String,
    pub value: f64,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    /// Swatch position relative to the legend origin.
    pub swatch: Rect,
    /// Label position relative to the legend origin.
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub origin: Point,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    fn new(frame: &ChartFrame, style: &GroupedBarStyle, color: &ColorScale) -> Self {
        let entries = color
            .entries()
            .zip(0u32..)
            .map(|((label, color), row)| {
                let top = f64::from(row) * style.legend_row_height;
                LegendEntry {
                    label: label.to_owned(),
                    color: color.to_owned(),
                    swatch: Rect {
                        x: 0.0,
                        y: top,
                        width: style.legend_swatch_size,
                        height: style.legend_swatch_size,
                        fill: Some(color.to_owned()),
                        stroke: None,
                    },
                    text: Text::new(
                        Point::new(style.legend_label_offset, top + style.legend_row_height / 2.0),
                        label,
                    )
                    .anchor(TextAnchor::Start)
                    .dy_em(0.32),
                }
            })
            .collect();
        Self {
            origin: Point::new(frame.width - style.legend_right_offset, frame.plot_top()),
            entries,
        }
    }

    fn to_group(&self) -> Group {
        let mut group = Group::at(self.origin);
        for entry in &self.entries {
            group.push(entry.swatch.clone());
            group.push(entry.text.clone());
        }
        group
    }
}

#[derive(Debug, Clone)]
pub struct GroupedBarLayout {
    frame: ChartFrame,
    style: GroupedBarStyle,
    outer: BandScale,
    inner: BandScale,
    y: LinearScale,
    color: ColorScale,
    bars: Vec<Bar>,
    legend: Legend,
}

impl GroupedBarLayout {
    /// Lays out `(group, subgroup, value)` observations.
    ///
    /// Both category domains keep first-seen order; the value axis spans
    /// `[0, max value]`. Bars rise from the zero line.
    ///
    /// # Errors
    ///
    /// * [`LayoutError::EmptyDataset`] - no observations
    /// * [`LayoutError::InvalidInput`] - a value is NaN or infinite
    /// * [`LayoutError::Scale`] - invalid paddings, or fewer palette colors than subgroups
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_layout::{
    ///     chart::grouped_bar::{GroupedBarLayout, GroupedBarStyle},
    ///     frame::ChartFrame,
    /// };
    ///
    /// let rows = [
    ///     ("Facebook", "Image", 120.0),
    ///     ("Facebook", "Video", 300.0),
    ///     ("Instagram", "Image", 410.0),
    /// ];
    /// let layout = GroupedBarLayout::new(&ChartFrame::default(), &GroupedBarStyle::default(), rows)?;
    /// assert_eq!(layout.bars().len(), 3);
    /// assert_eq!(layout.legend().entries[1].color, "orange");
    /// # Ok::<(), likeplot_layout::LayoutError>(())
    /// ```
    pub fn new<I, G, S>(
        frame: &ChartFrame,
        style: &GroupedBarStyle,
        observations: I,
    ) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (G, S, f64)>,
        G: Into<String>,
        S: Into<String>,
    {
        frame.validate()?;
        let observations = observations
            .into_iter()
            .map(|(group, subgroup, value)| (group.into(), subgroup.into(), value))
            .collect::<Vec<(String, String, f64)>>();
        let max = checked_max(observations.iter().map(|(_, _, v)| *v))?;

        let groups = distinct_in_order(observations.iter().map(|(g, _, _)| g.as_str()));
        let subgroups = distinct_in_order(observations.iter().map(|(_, s, _)| s.as_str()));

        let outer = BandScale::new(groups, frame.x_extent(), style.outer_padding)?;
        let inner = BandScale::nested(subgroups.iter().copied(), outer.bandwidth(), style.inner_padding)?;
        let y = value_scale(frame, max);
        let color = ColorScale::new(subgroups, &style.palette)?;

        let baseline = y.map(0.0);
        let bars = observations
            .into_iter()
            .map(|(group, subgroup, value)| {
                let unknown = |category: &String| LayoutError::UnknownCategory {
                    category: category.clone(),
                };
                let outer_x = outer.position(&group).ok_or_else(|| unknown(&group))?;
                let inner_x = inner.position(&subgroup).ok_or_else(|| unknown(&subgroup))?;
                let fill = color.color(&subgroup).ok_or_else(|| unknown(&subgroup))?;
                let top = y.map(value);
                let rect = Rect {
                    x: outer_x + inner_x,
                    y: top.min(baseline),
                    width: inner.bandwidth(),
                    height: (baseline - top).abs(),
                    fill: Some(fill.to_owned()),
                    stroke: None,
                };
                Ok(Bar {
                    group,
                    subgroup,
                    value,
                    rect,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        let legend = Legend::new(frame, style, &color);
        Ok(Self {
            frame: frame.clone(),
            style: style.clone(),
            outer,
            inner,
            y,
            color,
            bars,
            legend,
        })
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    #[must_use]
    pub fn outer_scale(&self) -> &BandScale {
        &self.outer
    }

    #[must_use]
    pub fn inner_scale(&self) -> &BandScale {
        &self.inner
    }

    #[must_use]
    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    #[must_use]
    pub fn color_scale(&self) -> &ColorScale {
        &self.color
    }
}

impl ChartLayout for GroupedBarLayout {
    fn kind(&self) -> &'static str {
        "barplot"
    }

    fn to_scene(&self) -> Scene {
        let titles = AxisTitles {
            x: &self.style.x_title,
            x_offset: self.style.x_title_offset,
            y: &self.style.y_title,
            y_offset: self.style.y_title_offset,
        };
        let mut scene = base_scene(
            &self.frame,
            &Axis::bottom_band(&self.outer, self.frame.plot_bottom()),
            &Axis::left_linear(&self.y, self.frame.plot_left(), VALUE_AXIS_TICKS),
            titles,
        );
        for bar in &self.bars {
            scene.push(bar.rect.clone());
        }
        scene.push(self.legend.to_group());
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample() -> Vec<(&'static str, &'static str, f64)> {
        let mut rows = vec![];
        for (platform, base) in [("Facebook", 100.0), ("Instagram", 400.0), ("LinkedIn", 60.0), ("Twitter", 250.0)] {
            for (post_type, factor) in [("Image", 1.0), ("Link", 0.5), ("Video", 1.5)] {
                rows.push((platform, post_type, base * factor));
            }
        }
        rows
    }

    fn layout() -> GroupedBarLayout {
        GroupedBarLayout::new(&ChartFrame::default(), &GroupedBarStyle::default(), sample()).unwrap()
    }

    #[test]
    fn test_bars_stay_within_outer_band() {
        let layout = layout();
        let outer = layout.outer_scale();
        for bar in layout.bars() {
            let left = outer.position(&bar.group).unwrap();
            assert!(bar.rect.x >= left - EPS);
            assert!(bar.rect.x + bar.rect.width <= left + outer.bandwidth() + EPS);
        }
    }

    #[test]
    fn test_bars_in_one_group_do_not_overlap() {
        let layout = layout();
        for group in layout.outer_scale().domain() {
            let rects = layout
                .bars()
                .iter()
                .filter(|b| b.group == group)
                .map(|b| &b.rect)
                .collect::<Vec<_>>();
            assert_eq!(rects.len(), 3);
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    assert!(!a.overlaps_horizontally(b), "{a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_bar_heights_reach_baseline() {
        let layout = layout();
        let frame = ChartFrame::default();
        let y = layout.y_scale();
        for bar in layout.bars() {
            assert!((bar.rect.y - y.map(bar.value)).abs() < EPS);
            assert!((bar.rect.height - (frame.plot_bottom() - y.map(bar.value))).abs() < EPS);
        }
        // tallest bar touches the top of the plot area
        let tallest = layout
            .bars()
            .iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap();
        assert!((tallest.rect.y - frame.plot_top()).abs() < EPS);
    }

    #[test]
    fn test_all_zero_values_sit_on_axis() {
        let rows = [("Facebook", "Image", 0.0), ("Facebook", "Video", 0.0)];
        let frame = ChartFrame::default();
        let layout = GroupedBarLayout::new(&frame, &GroupedBarStyle::default(), rows).unwrap();
        for bar in layout.bars() {
            assert_eq!(bar.rect.y, frame.plot_bottom());
            assert_eq!(bar.rect.height, 0.0);
        }
    }

    #[test]
    fn test_legend_matches_bar_colors() {
        let layout = layout();
        let legend = layout.legend();
        let labels = legend.entries.iter().map(|e| e.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["Image", "Link", "Video"]);
        for bar in layout.bars() {
            let entry = legend.entries.iter().find(|e| e.label == bar.subgroup).unwrap();
            assert_eq!(bar.rect.fill.as_deref(), Some(entry.color.as_str()));
            assert_eq!(entry.swatch.fill.as_deref(), Some(entry.color.as_str()));
        }
    }

    #[test]
    fn test_legend_placement() {
        let legend = layout().legend().clone();
        assert_eq!(legend.origin, Point::new(525.0, 50.0));
        assert_eq!(legend.entries[2].swatch.y, 44.0);
        assert_eq!(legend.entries[2].text.position, Point::new(20.0, 55.0));
    }

    #[test]
    fn test_short_palette_fails() {
        let style = GroupedBarStyle {
            palette: vec!["red".to_owned()],
            ..GroupedBarStyle::default()
        };
        let err = GroupedBarLayout::new(&ChartFrame::default(), &style, sample()).unwrap_err();
        assert!(matches!(err, LayoutError::Scale(_)));
    }

    #[test]
    fn test_scene_ends_with_legend() {
        let scene = layout().to_scene();
        let Some(crate::scene::Shape::Group(legend)) = scene.items.last() else {
            panic!("legend group expected last");
        };
        assert_eq!(legend.children.len(), 6);
        // 2 axes + 2 titles + 12 bars + legend
        assert_eq!(scene.items.len(), 17);
    }
}
