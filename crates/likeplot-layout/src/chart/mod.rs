//! The three chart layouts.
//!
//! Each layout validates its observations, builds its scales and computes
//! every mark up front; [`ChartLayout::to_scene`] then assembles axes, axis
//! titles and marks into a [`Scene`].

use crate::{
    LayoutError,
    axis::Axis,
    frame::ChartFrame,
    scale::{LinearScale, Orientation},
    scene::{Point, Scene, Text, TextAnchor},
};

pub mod boxplot;
pub mod grouped_bar;
pub mod line;

/// Number of ticks requested on every value axis.
pub const VALUE_AXIS_TICKS: usize = 10;

/// A laid-out chart that can be handed to a rendering backend.
pub trait ChartLayout {
    /// Short identifier of the chart kind, e.g. `"boxplot"`.
    fn kind(&self) -> &'static str;

    fn to_scene(&self) -> Scene;
}

/// Titles drawn outside the plot area along the bottom and left edges.
#[derive(Debug, Clone, Copy)]
struct AxisTitles<'a> {
    x: &'a str,
    /// Distance of the x title baseline from the bottom edge.
    x_offset: f64,
    y: &'a str,
    /// Distance of the y title baseline from the left edge.
    y_offset: f64,
}

impl AxisTitles<'_> {
    fn to_texts(self, frame: &ChartFrame) -> [Text; 2] {
        let x = Text::new(
            Point::new(frame.width / 2.0, frame.height - self.x_offset),
            self.x,
        )
        .anchor(TextAnchor::Middle);
        // Rotated a quarter turn counter-clockwise; in that frame the
        // canvas' vertical center sits at x = -height / 2.
        let y = Text::new(Point::new(-frame.height / 2.0, self.y_offset), self.y)
            .anchor(TextAnchor::Middle)
            .rotate(-90.0);
        [x, y]
    }
}

fn base_scene(frame: &ChartFrame, x_axis: &Axis, y_axis: &Axis, titles: AxisTitles<'_>) -> Scene {
    let mut scene = Scene::new(frame.width, frame.height);
    scene.background = Some(frame.background.clone());
    scene.push(x_axis.to_group());
    scene.push(y_axis.to_group());
    for title in titles.to_texts(frame) {
        scene.push(title);
    }
    scene
}

/// Rejects empty input and non-finite values, returning the largest value.
fn checked_max<I>(values: I) -> Result<f64, LayoutError>
where
    I: IntoIterator<Item = f64>,
{
    let mut max = None::<f64>;
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(LayoutError::InvalidInput { index, value });
        }
        max = Some(max.map_or(value, |m| m.max(value)));
    }
    max.ok_or(LayoutError::EmptyDataset)
}

/// Vertical value scale from zero to `max`, larger values nearer the top.
///
/// A non-positive `max` falls back to `[0, 1]` so zero still lands on the
/// bottom edge of the plot.
fn value_scale(frame: &ChartFrame, max: f64) -> LinearScale {
    let upper = if max > 0.0 { max } else { 1.0 };
    LinearScale::oriented([0.0, upper], frame.y_extent(), Orientation::Inverted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_max() {
        assert_eq!(checked_max([3.0, 9.0, 1.0]), Ok(9.0));
        assert_eq!(checked_max([]), Err(LayoutError::EmptyDataset));
        assert!(matches!(
            checked_max([1.0, f64::NAN]),
            Err(LayoutError::InvalidInput { index: 1, .. })
        ));
    }

    #[test]
    fn test_value_scale_zero_on_plot_bottom() {
        let frame = ChartFrame::default();
        for max in [250.0, 0.0, -4.0] {
            let y = value_scale(&frame, max);
            assert_eq!(y.map(0.0), frame.plot_bottom(), "max {max}");
        }
        assert_eq!(value_scale(&frame, 250.0).map(250.0), frame.plot_top());
        assert_eq!(value_scale(&frame, 0.0).domain(), [0.0, 1.0]);
    }

    #[test]
    fn test_title_positions() {
        let frame = ChartFrame::default();
        let [x, y] = AxisTitles {
            x: "Platform",
            x_offset: 10.0,
            y: "Average Likes",
            y_offset: 18.0,
        }
        .to_texts(&frame);
        assert_eq!(x.position, Point::new(300.0, 390.0));
        assert_eq!(y.position, Point::new(-200.0, 18.0));
        assert_eq!(y.rotate, Some(-90.0));
    }
}
