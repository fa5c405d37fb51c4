//! Canvas size, margins and background shared by every chart.

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Space reserved around the plot area, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// The canvas a chart is drawn on.
///
/// ```text
///  (0,0) ┌──────────────────────────────┐
///        │          margin.top          │
///        │   ┌──────────────────────┐   │
///        │   │      plot area       │   │
///        │   └──────────────────────┘   │
///        │        margin.bottom         │
///        └──────────────────────────────┘ (width, height)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// CSS color painted behind the whole canvas.
    pub background: String,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: Margin::default(),
            background: "lightblue".to_owned(),
        }
    }
}

impl ChartFrame {
    /// Checks that the margins leave a plot area with positive size.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let usable = self.width.is_finite()
            && self.height.is_finite()
            && self.plot_right() > self.plot_left()
            && self.plot_bottom() > self.plot_top();
        if usable {
            Ok(())
        } else {
            Err(LayoutError::InvalidFrame {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    /// Horizontal pixel extent of the plot area, `[left, right]`.
    #[must_use]
    pub fn x_extent(&self) -> [f64; 2] {
        [self.plot_left(), self.plot_right()]
    }

    /// Vertical pixel extent of the plot area, `[top, bottom]`.
    #[must_use]
    pub fn y_extent(&self) -> [f64; 2] {
        [self.plot_top(), self.plot_bottom()]
    }
}
