//! Shape descriptors produced by chart layout.
//!
//! A [`Scene`] is a retained list of shapes. Shapes may be nested in
//! [`Group`]s which translate their children; everything else carries
//! coordinates in its parent's frame.

use std::ops::Add;

/// A position in canvas units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Outline paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// A 1-unit stroke.
    pub fn thin(color: impl Into<String>) -> Self {
        Self::new(color, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl Rect {
    /// Returns `true` if the horizontal spans of both rectangles intersect
    /// with positive width.
    #[must_use]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.x + other.width && other.x < self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: String,
}

/// A single path drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier curve through two control points to an end point.
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl Path {
    /// Returns the end point of every command, in drawing order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CubicTo(_, _, p) => {
                Some(p)
            }
            PathCommand::Close => None,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub content: String,
    pub anchor: TextAnchor,
    /// Vertical shift in multiples of the font size.
    pub dy_em: Option<f64>,
    /// Rotation in degrees about the local origin; `position` is expressed
    /// in the rotated frame.
    pub rotate: Option<f64>,
}

impl Text {
    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            anchor: TextAnchor::Start,
            dy_em: None,
            rotate: None,
        }
    }

    #[must_use]
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn dy_em(mut self, dy: f64) -> Self {
        self.dy_em = Some(dy);
        self
    }

    #[must_use]
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// A translated container of shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub translate: Point,
    /// Font size inherited by text children that set none.
    pub font_size: Option<f64>,
    pub children: Vec<Shape>,
}

impl Group {
    #[must_use]
    pub fn at(translate: Point) -> Self {
        Self {
            translate,
            ..Self::default()
        }
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.children.push(shape.into());
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::IsVariant)]
pub enum Shape {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    Path(Path),
    Text(Text),
    Group(Group),
}

/// A complete, backend-independent drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Option<String>,
    pub items: Vec<Shape>,
}

impl Scene {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            items: vec![],
        }
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.items.push(shape.into());
    }

    /// Visits every non-group shape together with the accumulated
    /// translation of its enclosing groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_layout::scene::{Circle, Group, Point, Scene, Shape};
    ///
    /// let mut group = Group::at(Point::new(10.0, 0.0));
    /// group.push(Circle { center: Point::new(1.0, 2.0), radius: 3.0, fill: "black".into() });
    /// let mut scene = Scene::new(100.0, 100.0);
    /// scene.push(group);
    ///
    /// let shapes = scene.flatten();
    /// assert_eq!(shapes.len(), 1);
    /// assert_eq!(shapes[0].0, Point::new(10.0, 0.0));
    /// assert!(matches!(shapes[0].1, Shape::Circle(_)));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Vec<(Point, &Shape)> {
        fn walk<'a>(offset: Point, shapes: &'a [Shape], out: &mut Vec<(Point, &'a Shape)>) {
            for shape in shapes {
                match shape {
                    Shape::Group(group) => walk(offset + group.translate, &group.children, out),
                    _ => out.push((offset, shape)),
                }
            }
        }

        let mut out = vec![];
        walk(Point::default(), &self.items, &mut out);
        out
    }
}
