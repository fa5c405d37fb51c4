//! Bottom and left axes with ticks and tick labels.

use crate::{
    scale::{BandScale, LinearScale},
    scene::{Group, Line, Path, PathCommand, Point, Stroke, Text, TextAnchor},
};

/// Length of tick marks, including the outer ticks at the domain ends.
const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 3.0;
const FONT_SIZE: f64 = 10.0;
const AXIS_COLOR: &str = "black";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

/// An axis ready to be turned into shapes.
///
/// # Examples
///
/// ```
/// use likeplot_layout::{axis::Axis, scale::LinearScale};
///
/// let y = LinearScale::new([0.0, 100.0], [350.0, 50.0]);
/// let axis = Axis::left_linear(&y, 50.0, 10);
/// assert_eq!(axis.ticks().len(), 11);
/// assert_eq!(axis.ticks()[10].label, "100");
/// assert_eq!(axis.ticks()[10].offset, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    side: AxisSide,
    /// Position of the axis line across its direction (y for bottom, x for left).
    position: f64,
    extent: [f64; 2],
    ticks: Vec<Tick>,
    label_rotation: Option<f64>,
}

impl Axis {
    /// A bottom axis with one tick at the center of every band.
    #[must_use]
    pub fn bottom_band(scale: &BandScale, y: f64) -> Self {
        let ticks = scale
            .domain()
            .filter_map(|category| {
                Some(Tick {
                    offset: scale.center(category)?,
                    label: category.to_owned(),
                })
            })
            .collect();
        Self {
            side: AxisSide::Bottom,
            position: y,
            extent: scale.range(),
            ticks,
            label_rotation: None,
        }
    }

    /// A left axis with about `count` nicely rounded ticks.
    #[must_use]
    pub fn left_linear(scale: &LinearScale, x: f64, count: usize) -> Self {
        let format = scale.tick_format(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                offset: scale.map(value),
                label: format.format(value),
            })
            .collect();
        Self {
            side: AxisSide::Left,
            position: x,
            extent: scale.range(),
            ticks,
            label_rotation: None,
        }
    }

    /// Rotates every tick label by `degrees` and anchors it at its end.
    #[must_use]
    pub fn rotate_labels(mut self, degrees: f64) -> Self {
        self.label_rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn side(&self) -> AxisSide {
        self.side
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Builds the axis shapes: domain line with outer ticks, then one
    /// translated group per tick holding its mark and label.
    #[must_use]
    pub fn to_group(&self) -> Group {
        let [r0, r1] = self.extent;
        let stroke = Stroke::thin(AXIS_COLOR);
        let (translate, domain) = match self.side {
            AxisSide::Bottom => (
                Point::new(0.0, self.position),
                [
                    Point::new(r0, TICK_SIZE),
                    Point::new(r0, 0.0),
                    Point::new(r1, 0.0),
                    Point::new(r1, TICK_SIZE),
                ],
            ),
            AxisSide::Left => (
                Point::new(self.position, 0.0),
                [
                    Point::new(-TICK_SIZE, r0),
                    Point::new(0.0, r0),
                    Point::new(0.0, r1),
                    Point::new(-TICK_SIZE, r1),
                ],
            ),
        };

        let mut group = Group::at(translate);
        group.font_size = Some(FONT_SIZE);
        group.push(Path {
            commands: domain
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    if i == 0 {
                        PathCommand::MoveTo(p)
                    } else {
                        PathCommand::LineTo(p)
                    }
                })
                .collect(),
            fill: None,
            stroke: Some(stroke.clone()),
        });

        for tick in &self.ticks {
            group.push(self.tick_group(tick, &stroke));
        }
        group
    }

    fn tick_group(&self, tick: &Tick, stroke: &Stroke) -> Group {
        let label_gap = TICK_SIZE + TICK_PADDING;
        let (translate, mark_end, label) = match self.side {
            AxisSide::Bottom => (
                Point::new(tick.offset, 0.0),
                Point::new(0.0, TICK_SIZE),
                Text::new(Point::new(0.0, label_gap), &tick.label)
                    .anchor(TextAnchor::Middle)
                    .dy_em(0.71),
            ),
            AxisSide::Left => (
                Point::new(0.0, tick.offset),
                Point::new(-TICK_SIZE, 0.0),
                Text::new(Point::new(-label_gap, 0.0), &tick.label)
                    .anchor(TextAnchor::End)
                    .dy_em(0.32),
            ),
        };
        let label = match self.label_rotation {
            Some(degrees) => label.rotate(degrees).anchor(TextAnchor::End),
            None => label,
        };

        let mut group = Group::at(translate);
        group.push(Line {
            from: Point::default(),
            to: mark_end,
            stroke: stroke.clone(),
        });
        group.push(label);
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    #[test]
    fn test_band_ticks_at_centers() {
        let x = BandScale::new(["Mon", "Tue"], [50.0, 550.0], 0.0).unwrap();
        let axis = Axis::bottom_band(&x, 350.0);
        let offsets = axis.ticks().iter().map(|t| t.offset).collect::<Vec<_>>();
        assert_eq!(offsets, [175.0, 425.0]);
        assert_eq!(axis.ticks()[1].label, "Tue");
    }

    #[test]
    fn test_bottom_group_layout() {
        let x = BandScale::new(["a"], [50.0, 550.0], 0.0).unwrap();
        let group = Axis::bottom_band(&x, 350.0).to_group();
        assert_eq!(group.translate, Point::new(0.0, 350.0));
        // domain path plus one tick
        assert_eq!(group.children.len(), 2);
        let Shape::Path(domain) = &group.children[0] else {
            panic!("expected domain path first");
        };
        let vertices = domain.vertices().collect::<Vec<_>>();
        assert_eq!(vertices[1], Point::new(50.0, 0.0));
        assert_eq!(vertices[2], Point::new(550.0, 0.0));
    }

    #[test]
    fn test_rotated_labels() {
        let x = BandScale::new(["3/1", "3/2"], [50.0, 550.0], 0.0).unwrap();
        let group = Axis::bottom_band(&x, 350.0).rotate_labels(-25.0).to_group();
        let Shape::Group(tick) = &group.children[1] else {
            panic!("expected tick group");
        };
        let Shape::Text(label) = &tick.children[1] else {
            panic!("expected tick label");
        };
        assert_eq!(label.rotate, Some(-25.0));
        assert_eq!(label.anchor, TextAnchor::End);
    }

    #[test]
    fn test_left_axis_labels_grouped() {
        let y = LinearScale::new([0.0, 5000.0], [350.0, 50.0]);
        let axis = Axis::left_linear(&y, 50.0, 10);
        assert_eq!(axis.side(), AxisSide::Left);
        assert_eq!(axis.ticks()[2].label, "1,000");
        assert_eq!(axis.ticks()[0].offset, 350.0);
    }
}
