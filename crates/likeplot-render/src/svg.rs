use std::fmt::{self, Write as _};

use likeplot_layout::scene::{
    Circle, Group, Line, Path, PathCommand, Point, Rect, Scene, Shape, Stroke, Text, TextAnchor,
};

use crate::{Backend, RenderError};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Writes scenes as standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    /// Font family set on the root element.
    pub font_family: String,
    /// Spaces per nesting level; `0` writes everything on one line per element.
    pub indent: usize,
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_owned(),
            indent: 2,
        }
    }
}

impl Backend for SvgBackend {
    fn render(&self, scene: &Scene) -> Result<String, RenderError> {
        if !(scene.width.is_finite() && scene.height.is_finite()) {
            return Err(RenderError::InvalidSize {
                width: scene.width,
                height: scene.height,
            });
        }

        let mut out = String::new();
        write!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}""#,
            w = Num(scene.width),
            h = Num(scene.height),
            font = Escaped(&self.font_family),
        )?;
        if let Some(background) = &scene.background {
            write!(out, r#" style="background: {}""#, Escaped(background))?;
        }
        writeln!(out, ">")?;

        let mut writer = ShapeWriter {
            out: &mut out,
            indent: self.indent,
        };
        for shape in &scene.items {
            writer.shape(shape, 1)?;
        }
        writeln!(out, "</svg>")?;
        Ok(out)
    }
}

struct ShapeWriter<'a> {
    out: &'a mut String,
    indent: usize,
}

impl ShapeWriter<'_> {
    fn pad(&mut self, depth: usize) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = self.indent * depth)
    }

    fn shape(&mut self, shape: &Shape, depth: usize) -> fmt::Result {
        match shape {
            Shape::Line(line) => self.line(line, depth),
            Shape::Rect(rect) => self.rect(rect, depth),
            Shape::Circle(circle) => self.circle(circle, depth),
            Shape::Path(path) => self.path(path, depth),
            Shape::Text(text) => self.text(text, depth),
            Shape::Group(group) => self.group(group, depth),
        }
    }

    fn line(&mut self, line: &Line, depth: usize) -> fmt::Result {
        self.pad(depth)?;
        write!(
            self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            Num(line.from.x),
            Num(line.from.y),
            Num(line.to.x),
            Num(line.to.y),
        )?;
        write_stroke(self.out, Some(&line.stroke))?;
        writeln!(self.out, "/>")
    }

    fn rect(&mut self, rect: &Rect, depth: usize) -> fmt::Result {
        self.pad(depth)?;
        write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            Num(rect.x),
            Num(rect.y),
            Num(rect.width),
            Num(rect.height),
        )?;
        write_fill(self.out, rect.fill.as_deref())?;
        write_stroke(self.out, rect.stroke.as_ref())?;
        writeln!(self.out, "/>")
    }

    fn circle(&mut self, circle: &Circle, depth: usize) -> fmt::Result {
        self.pad(depth)?;
        write!(
            self.out,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            Num(circle.center.x),
            Num(circle.center.y),
            Num(circle.radius),
        )?;
        write_fill(self.out, Some(&circle.fill))?;
        writeln!(self.out, "/>")
    }

    fn path(&mut self, path: &Path, depth: usize) -> fmt::Result {
        self.pad(depth)?;
        write!(self.out, r#"<path d="{}""#, PathData(&path.commands))?;
        // SVG fills paths black by default
        write_fill(self.out, Some(path.fill.as_deref().unwrap_or("none")))?;
        write_stroke(self.out, path.stroke.as_ref())?;
        writeln!(self.out, "/>")
    }

    fn text(&mut self, text: &Text, depth: usize) -> fmt::Result {
        self.pad(depth)?;
        write!(
            self.out,
            r#"<text x="{}" y="{}""#,
            Num(text.position.x),
            Num(text.position.y)
        )?;
        if let Some(dy) = text.dy_em {
            write!(self.out, r#" dy="{}em""#, Num(dy))?;
        }
        let anchor = match text.anchor {
            TextAnchor::Start => None,
            TextAnchor::Middle => Some("middle"),
            TextAnchor::End => Some("end"),
        };
        if let Some(anchor) = anchor {
            write!(self.out, r#" text-anchor="{anchor}""#)?;
        }
        if let Some(degrees) = text.rotate {
            write!(self.out, r#" transform="rotate({})""#, Num(degrees))?;
        }
        writeln!(self.out, ">{}</text>", Escaped(&text.content))
    }

    fn group(&mut self, group: &Group, depth: usize) -> fmt::Result {
        self.pad(depth)?;
        write!(self.out, "<g")?;
        if group.translate != Point::default() {
            write!(
                self.out,
                r#" transform="translate({},{})""#,
                Num(group.translate.x),
                Num(group.translate.y)
            )?;
        }
        if let Some(size) = group.font_size {
            write!(self.out, r#" font-size="{}""#, Num(size))?;
        }
        writeln!(self.out, ">")?;
        for child in &group.children {
            self.shape(child, depth + 1)?;
        }
        self.pad(depth)?;
        writeln!(self.out, "</g>")
    }
}

fn write_fill(out: &mut String, fill: Option<&str>) -> fmt::Result {
    match fill {
        Some(fill) => write!(out, r#" fill="{}""#, Escaped(fill)),
        None => Ok(()),
    }
}

fn write_stroke(out: &mut String, stroke: Option<&Stroke>) -> fmt::Result {
    let Some(stroke) = stroke else {
        return Ok(());
    };
    write!(out, r#" stroke="{}""#, Escaped(&stroke.color))?;
    if (stroke.width - 1.0).abs() > f64::EPSILON {
        write!(out, r#" stroke-width="{}""#, Num(stroke.width))?;
    }
    Ok(())
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        // avoid printing "-0"
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        let text = format!("{rounded:.3}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        f.write_str(text)
    }
}

/// XML-escapes text content and attribute values.
pub(crate) struct Escaped<'a>(pub(crate) &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

struct PathData<'a>(&'a [PathCommand]);

impl fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in self.0 {
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", Num(p.x), Num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", Num(p.x), Num(p.y))?,
                PathCommand::CubicTo(c1, c2, p) => write!(
                    f,
                    "C{},{},{},{},{},{}",
                    Num(c1.x),
                    Num(c1.y),
                    Num(c2.x),
                    Num(c2.y),
                    Num(p.x),
                    Num(p.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}
