//! Rendering backends for likeplot scenes.
//!
//! - [`svg::SvgBackend`]: a standalone SVG document per scene
//! - [`page::HtmlPage`]: an HTML page hosting the `boxplot`, `barplot` and
//!   `lineplot` panels
//!
//! # Examples
//!
//! ```
//! use likeplot_layout::scene::{Circle, Point, Scene};
//! use likeplot_render::{Backend, svg::SvgBackend};
//!
//! let mut scene = Scene::new(100.0, 50.0);
//! scene.push(Circle { center: Point::new(10.0, 20.0), radius: 5.0, fill: "black".into() });
//!
//! let svg = SvgBackend::default().render(&scene)?;
//! assert!(svg.contains(r#"<circle cx="10" cy="20" r="5" fill="black"/>"#));
//! # Ok::<(), likeplot_render::RenderError>(())
//! ```

use likeplot_layout::scene::Scene;

pub mod page;
pub mod svg;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RenderError {
    #[display("failed to format output")]
    Format(std::fmt::Error),
    #[display("scene has a non-finite size {width}x{height}")]
    #[from(ignore)]
    InvalidSize { width: f64, height: f64 },
}

/// Turns a scene into a document.
pub trait Backend {
    fn render(&self, scene: &Scene) -> Result<String, RenderError>;
}
