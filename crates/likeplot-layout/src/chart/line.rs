//! Time-series line chart with point markers.
//!
//! Observations are drawn in input order, never sorted: the labels are
//! ordinal (e.g. dates) and the caller decides their sequence.

use serde::{Deserialize, Serialize};

use super::{AxisTitles, ChartLayout, VALUE_AXIS_TICKS, base_scene, checked_max, value_scale};
use crate::{
    LayoutError,
    axis::Axis,
    frame::ChartFrame,
    scale::{BandScale, LinearScale},
    scene::{Circle, Path, Point, Scene, Stroke},
    spline,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub padding: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub marker_radius: f64,
    pub marker_fill: String,
    /// Rotation of the x tick labels in degrees.
    pub label_rotation: f64,
    pub x_title: String,
    pub x_title_offset: f64,
    pub y_title: String,
    pub y_title_offset: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            padding: 0.0,
            stroke: "blue".to_owned(),
            stroke_width: 2.0,
            marker_radius: 5.0,
            marker_fill: "black".to_owned(),
            label_rotation: -25.0,
            x_title: "Date".to_owned(),
            x_title_offset: 10.0,
            y_title: "Average Likes".to_owned(),
            y_title_offset: 20.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineLayout {
    frame: ChartFrame,
    style: LineStyle,
    x: BandScale,
    y: LinearScale,
    points: Vec<Point>,
    path: Path,
    markers: Vec<Circle>,
}

impl LineLayout {
    /// Lays out `(label, value)` observations as a smoothed line.
    ///
    /// Each point sits at the left edge of its label's band. Repeated labels
    /// share one band.
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_layout::{
    ///     chart::line::{LineLayout, LineStyle},
    ///     frame::ChartFrame,
    /// };
    ///
    /// let rows = [("3/1", 120.0), ("3/2", 80.0), ("3/3", 200.0)];
    /// let layout = LineLayout::new(&ChartFrame::default(), &LineStyle::default(), rows)?;
    /// assert_eq!(layout.points().len(), 3);
    /// assert_eq!(layout.points()[2].y, 50.0);
    /// # Ok::<(), likeplot_layout::LayoutError>(())
    /// ```
    pub fn new<I, S>(frame: &ChartFrame, style: &LineStyle, observations: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        frame.validate()?;
        let observations = observations
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .collect::<Vec<(String, f64)>>();
        let max = checked_max(observations.iter().map(|(_, v)| *v))?;

        let x = BandScale::new(
            observations.iter().map(|(label, _)| label.as_str()),
            frame.x_extent(),
            style.padding,
        )?;
        let y = value_scale(frame, max);

        let points = observations
            .iter()
            .map(|(label, value)| {
                let px = x.position(label).ok_or_else(|| LayoutError::UnknownCategory {
                    category: label.clone(),
                })?;
                Ok(Point::new(px, y.map(*value)))
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        let path = Path {
            commands: spline::natural_path(&points),
            fill: None,
            stroke: Some(Stroke::new(&style.stroke, style.stroke_width)),
        };
        let markers = points
            .iter()
            .map(|&center| Circle {
                center,
                radius: style.marker_radius,
                fill: style.marker_fill.clone(),
            })
            .collect();

        Ok(Self {
            frame: frame.clone(),
            style: style.clone(),
            x,
            y,
            points,
            path,
            markers,
        })
    }

    /// Data points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn markers(&self) -> &[Circle] {
        &self.markers
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

impl ChartLayout for LineLayout {
    fn kind(&self) -> &'static str {
        "lineplot"
    }

    fn to_scene(&self) -> Scene {
        let titles = AxisTitles {
            x: &self.style.x_title,
            x_offset: self.style.x_title_offset,
            y: &self.style.y_title,
            y_offset: self.style.y_title_offset,
        };
        let x_axis = Axis::bottom_band(&self.x, self.frame.plot_bottom())
            .rotate_labels(self.style.label_rotation);
        let mut scene = base_scene(
            &self.frame,
            &x_axis,
            &Axis::left_linear(&self.y, self.frame.plot_left(), VALUE_AXIS_TICKS),
            titles,
        );
        scene.push(self.path.clone());
        for marker in &self.markers {
            scene.push(marker.clone());
        }
        scene
    }
}
