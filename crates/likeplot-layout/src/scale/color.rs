use indexmap::IndexMap;

use super::ScaleError;

/// Assigns palette colors to categories by position.
///
/// The i-th distinct domain value gets the i-th palette color. A palette
/// shorter than the domain is rejected rather than cycled.
///
/// # Examples
///
/// ```
/// use likeplot_layout::scale::ColorScale;
///
/// let color = ColorScale::new(["Image", "Link", "Video"], ["red", "orange", "blue"])?;
/// assert_eq!(color.color("Link"), Some("orange"));
/// assert_eq!(color.color("Story"), None);
/// # Ok::<(), likeplot_layout::scale::ScaleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: IndexMap<String, String>,
}

impl ColorScale {
    pub fn new<D, P, S, C>(domain: D, palette: P) -> Result<Self, ScaleError>
    where
        D: IntoIterator<Item = S>,
        P: IntoIterator<Item = C>,
        S: Into<String>,
        C: Into<String>,
    {
        let mut colors = IndexMap::new();
        for category in domain {
            let len = colors.len();
            colors.entry(category.into()).or_insert(len);
        }
        let palette = palette.into_iter().map(Into::into).collect::<Vec<String>>();
        if palette.len() < colors.len() {
            return Err(ScaleError::PaletteTooShort {
                domain_len: colors.len(),
                palette_len: palette.len(),
            });
        }
        let colors = colors
            .into_iter()
            .map(|(category, index)| (category, palette[index].clone()))
            .collect();
        Ok(Self { colors })
    }

    #[must_use]
    pub fn color(&self, category: &str) -> Option<&str> {
        self.colors.get(category).map(String::as_str)
    }

    /// `(category, color)` pairs in domain order, as drawn by a legend.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_by_position() {
        let scale = ColorScale::new(["b", "a", "b", "c"], ["red", "orange", "blue", "green"]).unwrap();
        let entries = scale.entries().collect::<Vec<_>>();
        assert_eq!(entries, [("b", "red"), ("a", "orange"), ("c", "blue")]);
    }

    #[test]
    fn test_deterministic() {
        let domain = ["Image", "Link", "Video"];
        let palette = ["red", "orange", "blue"];
        let first = ColorScale::new(domain, palette).unwrap();
        let second = ColorScale::new(domain, palette).unwrap();
        for category in domain {
            assert_eq!(first.color(category), second.color(category));
            assert!(first.color(category).is_some());
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_palette_is_rejected() {
        let err = ColorScale::new(["a", "b", "c"], ["red"]).unwrap_err();
        assert_eq!(
            err,
            ScaleError::PaletteTooShort {
                domain_len: 3,
                palette_len: 1
            }
        );
    }
}
