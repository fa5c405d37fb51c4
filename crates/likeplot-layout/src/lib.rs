//! Chart layout for likeplot: scales, axes and the three chart kinds.
//!
//! Layout is pure. Every chart turns its observations into a [`Scene`], a
//! flat description of lines, rectangles, circles, paths and text with
//! absolute positions and colors. Drawing a scene is left to a rendering
//! backend (see the `likeplot-render` crate), so everything here can be
//! tested without producing any output.
//!
//! # Overview
//!
//! ```text
//! observations ──► chart layout ──► Scene ──► backend (SVG, ...)
//!                   │
//!                   ├─ scale::{BandScale, LinearScale, ColorScale}
//!                   ├─ axis::Axis
//!                   └─ spline::natural_path
//! ```
//!
//! # Coordinate system
//!
//! Pixel `y` grows downward. Vertical value axes are built with
//! [`Orientation::Inverted`](scale::Orientation::Inverted) so that larger
//! values end up nearer the top of the plot.
//!
//! # Examples
//!
//! ```
//! use likeplot_layout::{
//!     chart::{
//!         ChartLayout,
//!         boxplot::{BoxplotLayout, BoxplotStyle},
//!     },
//!     frame::ChartFrame,
//! };
//!
//! let rows = [("Teen", 10.0), ("Teen", 20.0), ("Teen", 30.0), ("Adult", 12.0)];
//! let layout = BoxplotLayout::new(&ChartFrame::default(), &BoxplotStyle::default(), rows)?;
//!
//! let teen = &layout.glyphs()[0];
//! assert_eq!(teen.category, "Teen");
//! assert_eq!(teen.summary.median, 20.0);
//!
//! let scene = layout.to_scene();
//! assert_eq!(scene.width, 600.0);
//! # Ok::<(), likeplot_layout::LayoutError>(())
//! ```

pub use self::error::LayoutError;

pub mod axis;
pub mod chart;
mod error;
pub mod frame;
pub mod scale;
pub mod scene;
pub mod spline;
