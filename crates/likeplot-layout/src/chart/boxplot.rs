//! Boxplot of a numeric value per category.
//!
//! Every category gets a whisker spanning min to max, a box spanning the
//! quartiles and a median tick, all centered on the category's band.

use likeplot_stats::{grouping::CategoryGrouping, summary::FiveNumberSummary};
use serde::{Deserialize, Serialize};

use super::{AxisTitles, ChartLayout, VALUE_AXIS_TICKS, base_scene, checked_max, value_scale};
use crate::{
    LayoutError,
    axis::Axis,
    frame::ChartFrame,
    scale::{BandScale, LinearScale},
    scene::{Line, Point, Rect, Scene, Stroke},
};

/// Boxes never get shorter than this, so identical quartiles stay visible.
pub const MIN_BOX_HEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxplotStyle {
    /// Band padding of the category axis.
    pub padding: f64,
    pub box_width: f64,
    pub box_fill: String,
    pub stroke: String,
    pub median_stroke_width: f64,
    pub x_title: String,
    pub x_title_offset: f64,
    pub y_title: String,
    pub y_title_offset: f64,
}

impl Default for BoxplotStyle {
    fn default() -> Self {
        Self {
            padding: 0.3,
            box_width: 60.0,
            box_fill: "blue".to_owned(),
            stroke: "black".to_owned(),
            median_stroke_width: 2.0,
            x_title: "Age Group".to_owned(),
            x_title_offset: 15.0,
            y_title: "# Of Likes".to_owned(),
            y_title_offset: 15.0,
        }
    }
}

/// The marks drawn for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGlyph {
    pub category: String,
    pub summary: FiveNumberSummary,
    pub center_x: f64,
    /// Vertical line from min to max.
    pub whisker: Line,
    /// Box from the third quartile down to the first.
    pub body: Rect,
    pub median: Line,
}

#[derive(Debug, Clone)]
pub struct BoxplotLayout {
    frame: ChartFrame,
    style: BoxplotStyle,
    x: BandScale,
    y: LinearScale,
    glyphs: Vec<BoxGlyph>,
}

impl BoxplotLayout {
    /// Lays out a boxplot of `(category, value)` observations.
    ///
    /// Categories appear in the order they are first seen. The value axis
    /// spans `[0, max value]`.
    ///
    /// # Errors
    ///
    /// * [`LayoutError::EmptyDataset`] - no observations
    /// * [`LayoutError::InvalidInput`] - a value is NaN or infinite
    /// * [`LayoutError::InvalidFrame`], [`LayoutError::Scale`] - unusable frame or style
    pub fn new<I, S>(frame: &ChartFrame, style: &BoxplotStyle, observations: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        frame.validate()?;
        let observations = observations
            .into_iter()
            .map(|(category, value)| (category.into(), value))
            .collect::<Vec<(String, f64)>>();
        let max = checked_max(observations.iter().map(|(_, v)| *v))?;

        let summaries = CategoryGrouping::from_pairs(observations).summarize()?;
        let x = BandScale::new(summaries.keys().cloned(), frame.x_extent(), style.padding)?;
        let y = value_scale(frame, max);

        let glyphs = summaries
            .iter()
            .map(|(category, summary)| {
                let center_x = x
                    .center(category)
                    .ok_or_else(|| LayoutError::UnknownCategory {
                        category: category.clone(),
                    })?;
                Ok(Self::glyph(style, &y, category, *summary, center_x))
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        Ok(Self {
            frame: frame.clone(),
            style: style.clone(),
            x,
            y,
            glyphs,
        })
    }

    fn glyph(
        style: &BoxplotStyle,
        y: &LinearScale,
        category: &str,
        summary: FiveNumberSummary,
        center_x: f64,
    ) -> BoxGlyph {
        let half = style.box_width / 2.0;
        let top = y.map(summary.q3);
        BoxGlyph {
            category: category.to_owned(),
            summary,
            center_x,
            whisker: Line {
                from: Point::new(center_x, y.map(summary.min)),
                to: Point::new(center_x, y.map(summary.max)),
                stroke: Stroke::thin(&style.stroke),
            },
            body: Rect {
                x: center_x - half,
                y: top,
                width: style.box_width,
                height: (y.map(summary.q1) - top).max(MIN_BOX_HEIGHT),
                fill: Some(style.box_fill.clone()),
                stroke: Some(Stroke::thin(&style.stroke)),
            },
            median: Line {
                from: Point::new(center_x - half, y.map(summary.median)),
                to: Point::new(center_x + half, y.map(summary.median)),
                stroke: Stroke::new(&style.stroke, style.median_stroke_width),
            },
        }
    }

    #[must_use]
    pub fn glyphs(&self) -> &[BoxGlyph] {
        &self.glyphs
    }

    #[must_use]
    pub fn x_scale(&self) -> &BandScale {
        &self.x
    }

    #[must_use]
    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }
}

impl ChartLayout for BoxplotLayout {
    fn kind(&self) -> &'static str {
        "boxplot"
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
            &Axis::bottom_band(&self.x, self.frame.plot_bottom()),
            &Axis::left_linear(&self.y, self.frame.plot_left(), VALUE_AXIS_TICKS),
            titles,
        );
        for glyph in &self.glyphs {
            scene.push(glyph.whisker.clone());
            scene.push(glyph.body.clone());
            scene.push(glyph.median.clone());
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    const EPS: f64 = 1e-9;

    fn layout(rows: &[(&str, f64)]) -> BoxplotLayout {
        BoxplotLayout::new(
            &ChartFrame::default(),
            &BoxplotStyle::default(),
            rows.iter().copied(),
        )
        .unwrap()
    }

    #[test]
    fn test_teen_summary() {
        let layout = layout(&[("Teen", 10.0), ("Teen", 20.0), ("Teen", 30.0)]);
        let teen = &layout.glyphs()[0];
        assert_eq!(
            teen.summary,
            FiveNumberSummary {
                min: 10.0,
                q1: 15.0,
                median: 20.0,
                q3: 25.0,
                max: 30.0,
            }
        );
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let layout = layout(&[
            ("25-34", 5.0),
            ("18-24", 7.0),
            ("25-34", 1.0),
            ("35-44", 3.0),
        ]);
        let categories = layout
            .glyphs()
            .iter()
            .map(|g| g.category.as_str())
            .collect::<Vec<_>>();
        assert_eq!(categories, ["25-34", "18-24", "35-44"]);
        let centers = layout.glyphs().iter().map(|g| g.center_x).collect::<Vec<_>>();
        assert!(centers.is_sorted_by(|a, b| a < b));
    }

    #[test]
    fn test_geometry_follows_value_axis() {
        let layout = layout(&[("A", 0.0), ("A", 100.0), ("A", 50.0), ("B", 40.0)]);
        let y = layout.y_scale();
        assert_eq!(y.map(0.0), 350.0);
        assert_eq!(y.map(100.0), 50.0);

        let a = &layout.glyphs()[0];
        assert_eq!(a.whisker.from.y, 350.0);
        assert_eq!(a.whisker.to.y, 50.0);
        assert!((a.body.y - y.map(a.summary.q3)).abs() < EPS);
        assert!((a.body.y + a.body.height - y.map(a.summary.q1)).abs() < EPS);
        assert!((a.median.from.y - y.map(50.0)).abs() < EPS);
        assert_eq!(a.body.width, 60.0);
        assert!((a.body.x + 30.0 - a.center_x).abs() < EPS);
        assert_eq!(a.median.stroke.width, 2.0);
    }

    #[test]
    fn test_flat_box_keeps_minimum_height() {
        let layout = layout(&[("A", 10.0), ("A", 10.0), ("B", 20.0)]);
        for glyph in layout.glyphs() {
            assert!(glyph.body.height >= MIN_BOX_HEIGHT);
        }
        assert_eq!(layout.glyphs()[1].body.height, MIN_BOX_HEIGHT);
    }

    #[test]
    fn test_band_centers() {
        let layout = layout(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        let x = layout.x_scale();
        for glyph in layout.glyphs() {
            let left = x.position(&glyph.category).unwrap();
            assert!((glyph.center_x - (left + x.bandwidth() / 2.0)).abs() < EPS);
        }
    }

    #[test]
    fn test_rejects_nan_and_empty() {
        let err = BoxplotLayout::new(
            &ChartFrame::default(),
            &BoxplotStyle::default(),
            [("A", 1.0), ("A", f64::NAN)],
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput { index: 1, .. }));

        let err = BoxplotLayout::new(
            &ChartFrame::default(),
            &BoxplotStyle::default(),
            Vec::<(String, f64)>::new(),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::EmptyDataset);
    }

    #[test]
    fn test_scene_contains_marks_after_axes() {
        let scene = layout(&[("A", 1.0), ("B", 2.0)]).to_scene();
        assert_eq!(scene.background.as_deref(), Some("lightblue"));
        // 2 axes + 2 titles + 3 marks per category
        assert_eq!(scene.items.len(), 4 + 6);
        assert!(scene.items[0].is_group());
        assert!(scene.items[1].is_group());
        assert!(scene.items[5].is_rect());
        let rects = scene.flatten().into_iter().filter(|(_, s)| s.is_rect()).count();
        assert_eq!(rects, 2);
        assert!(matches!(scene.items[4], Shape::Line(_)));
    }
}
