use indexmap::IndexSet;

use super::ScaleError;

/// Maps an ordered set of categories onto equal-width pixel bands.
///
/// The range is divided into one *step* per category. A `padding` fraction
/// of every step is left empty, split evenly on both sides of the band, so
/// neighbouring bands are one full padding apart and the outermost bands
/// keep half a padding to the range ends:
///
/// ```text
/// low                                                     high
///  |<- p/2 ->[  band 0  ]<- p ->[  band 1  ]<- p ->[  band 2  ]<- p/2 ->|
///  |<------- step ------>|
/// ```
///
/// # Examples
///
/// ```
/// use likeplot_layout::scale::BandScale;
///
/// let x = BandScale::new(["Teen", "Adult", "Senior"], [0.0, 500.0], 0.3)?;
/// assert!((x.bandwidth() - 116.666).abs() < 1e-3);
/// assert!((x.position("Teen").unwrap() - 25.0).abs() < 1e-9);
/// assert_eq!(x.position("Unknown"), None);
/// # Ok::<(), likeplot_layout::scale::ScaleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range: [f64; 2],
    padding: f64,
    step: f64,
}

impl BandScale {
    /// Builds a band scale over `domain` mapped onto `[low, high]`.
    ///
    /// Repeated domain values keep their first position. A reversed range
    /// (`low > high`) lays the bands out from right to left.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidPadding`] unless `0 <= padding < 1`.
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I, S>(domain: I, range: [f64; 2], padding: f64) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..1.0).contains(&padding) {
            return Err(ScaleError::InvalidPadding { padding });
        }
        let domain = domain.into_iter().map(Into::into).collect::<IndexSet<_>>();
        let step = if domain.is_empty() {
            0.0
        } else {
            (range[1] - range[0]).abs() / domain.len() as f64
        };
        Ok(Self {
            domain,
            range,
            padding,
            step,
        })
    }

    /// Builds a band scale that subdivides a band `outer_bandwidth` wide.
    ///
    /// The result maps onto `[0, outer_bandwidth]`, so positions are
    /// relative to the outer band's left edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_layout::scale::BandScale;
    ///
    /// let inner = BandScale::nested(["Image", "Video"], 200.0, 0.2)?;
    /// assert_eq!(inner.range(), [0.0, 200.0]);
    /// assert_eq!(inner.step(), 100.0);
    /// # Ok::<(), likeplot_layout::scale::ScaleError>(())
    /// ```
    pub fn nested<I, S>(inner_domain: I, outer_bandwidth: f64, padding: f64) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(inner_domain, [0.0, outer_bandwidth], padding)
    }

    /// Left edge of the band for `category`, or `None` if it is not in the domain.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.get_index_of(category)?;
        let [low, high] = self.range;
        let slot = if high < low {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(low.min(high) + self.step * (slot as f64) + self.step * self.padding / 2.0)
    }

    /// Horizontal center of the band for `category`.
    #[must_use]
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|x| x + self.bandwidth() / 2.0)
    }

    /// Width of each band, i.e. the step minus its padding.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    /// Distance between the left edges of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn domain(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.domain.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_bandwidth_formula() {
        let scale = BandScale::new(["a", "b", "c"], [0.0, 500.0], 0.3).unwrap();
        let expected = (500.0 / 3.0) * (1.0 - 0.3);
        assert!((scale.bandwidth() - expected).abs() < EPS);
        assert!((scale.bandwidth() - 116.67).abs() < 0.01);
    }

    #[test]
    fn test_left_edges_strictly_increase() {
        let domain = ["18-24", "25-34", "35-44", "45-54", "55+"];
        let scale = BandScale::new(domain, [50.0, 550.0], 0.3).unwrap();
        let edges = domain
            .iter()
            .map(|c| scale.position(c).unwrap())
            .collect::<Vec<_>>();
        for pair in edges.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!((pair[1] - pair[0] - scale.step()).abs() < EPS);
        }
    }

    #[test]
    fn test_half_padding_at_outer_edges() {
        let scale = BandScale::new(["a", "b"], [0.0, 100.0], 0.2).unwrap();
        assert!((scale.position("a").unwrap() - 5.0).abs() < EPS);
        let last_right = scale.position("b").unwrap() + scale.bandwidth();
        assert!((100.0 - last_right - 5.0).abs() < EPS);
    }

    #[test]
    fn test_zero_padding_bands_touch() {
        let scale = BandScale::new(["Mon", "Tue", "Wed", "Thu"], [50.0, 550.0], 0.0).unwrap();
        assert_eq!(scale.position("Mon"), Some(50.0));
        assert_eq!(scale.position("Tue"), Some(175.0));
        assert_eq!(scale.bandwidth(), 125.0);
        assert_eq!(scale.center("Mon"), Some(112.5));
    }

    #[test]
    fn test_duplicates_keep_first_slot() {
        let scale = BandScale::new(["a", "b", "a"], [0.0, 100.0], 0.0).unwrap();
        assert_eq!(scale.domain().len(), 2);
        assert_eq!(scale.position("a"), Some(0.0));
        assert_eq!(scale.position("b"), Some(50.0));
    }

    #[test]
    fn test_reversed_range() {
        let scale = BandScale::new(["a", "b"], [100.0, 0.0], 0.0).unwrap();
        assert_eq!(scale.position("a"), Some(50.0));
        assert_eq!(scale.position("b"), Some(0.0));
    }

    #[test]
    fn test_empty_domain() {
        let scale = BandScale::new(Vec::<String>::new(), [0.0, 100.0], 0.1).unwrap();
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.position("a"), None);
    }

    #[test]
    fn test_invalid_padding() {
        for padding in [-0.1, 1.0, 1.5, f64::NAN] {
            let err = BandScale::new(["a"], [0.0, 1.0], padding).unwrap_err();
            assert!(matches!(err, ScaleError::InvalidPadding { .. }));
        }
    }

    #[test]
    fn test_nested_from_bandwidth_alone() {
        let inner = BandScale::nested(["Image", "Link", "Video"], 90.0, 0.2).unwrap();
        assert_eq!(inner.range(), [0.0, 90.0]);
        assert!((inner.step() - 30.0).abs() < EPS);
        assert!((inner.bandwidth() - 24.0).abs() < EPS);
        assert!((inner.position("Image").unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_nested_fits_inside_outer_band() {
        let outer = BandScale::new(["f", "i", "l", "t"], [50.0, 550.0], 0.2).unwrap();
        let inner = BandScale::nested(["img", "link", "video"], outer.bandwidth(), 0.2).unwrap();
        for o in outer.domain() {
            let left = outer.position(o).unwrap();
            for i in inner.domain() {
                let x = left + inner.position(i).unwrap();
                assert!(x >= left);
                assert!(x + inner.bandwidth() <= left + outer.bandwidth() + EPS);
            }
        }
    }
}
