//! HTML host page for the three chart panels.
//!
//! Every panel is a `<div>` with a fixed id. A chart that failed to render
//! still gets its container, left empty, so one broken dataset never hides
//! the others.

use std::fmt::Write as _;

use crate::{RenderError, svg::Escaped};

/// Container ids in page order.
pub const PANEL_IDS: [&str; 3] = ["boxplot", "barplot", "lineplot"];

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: String,
    pub heading: String,
    /// Rendered SVG document, or `None` when the chart is unavailable.
    pub svg: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlPage {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl HtmlPage {
    /// A page with the three standard containers, all empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_render::page::HtmlPage;
    ///
    /// let mut page = HtmlPage::new("Social media");
    /// page.set_svg("barplot", "<svg></svg>".to_owned());
    /// let html = page.render()?;
    /// assert!(html.contains(r#"<div id="barplot"><svg></svg></div>"#));
    /// assert!(html.contains(r#"<div id="lineplot"></div>"#));
    /// # Ok::<(), likeplot_render::RenderError>(())
    /// ```
    pub fn new(title: impl Into<String>) -> Self {
        let headings = ["Boxplot", "Grouped bar chart", "Line chart"];
        let panels = PANEL_IDS
            .iter()
            .zip(headings)
            .map(|(id, heading)| Panel {
                id: (*id).to_owned(),
                heading: heading.to_owned(),
                svg: None,
            })
            .collect();
        Self {
            title: title.into(),
            panels,
        }
    }

    /// Fills the panel with the given id. Returns `false` if there is no such panel.
    pub fn set_svg(&mut self, id: &str, svg: String) -> bool {
        match self.panels.iter_mut().find(|p| p.id == id) {
            Some(panel) => {
                panel.svg = Some(svg);
                true
            }
            None => false,
        }
    }

    /// Number of panels holding a chart.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.panels.iter().filter(|p| p.svg.is_some()).count()
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, r#"<html lang="en">"#)?;
        writeln!(out, "<head>")?;
        writeln!(out, r#"  <meta charset="utf-8">"#)?;
        writeln!(out, "  <title>{}</title>", Escaped(&self.title))?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        for panel in &self.panels {
            writeln!(out, "  <h2>{}</h2>", Escaped(&panel.heading))?;
            write!(out, r#"  <div id="{}">"#, Escaped(&panel.id))?;
            if let Some(svg) = &panel.svg {
                out.push_str(svg.trim_end());
            }
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}
