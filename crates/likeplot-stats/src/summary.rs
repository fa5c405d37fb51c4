use serde::{Deserialize, Serialize};

use crate::quantile;

/// Error returned when a sample cannot be summarized.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SummaryError {
    #[display("cannot summarize an empty group")]
    EmptyGroup,
    #[display("value #{index} is not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },
}

/// The five-number summary of a sample: min, first quartile, median,
/// third quartile and max.
///
/// Quartiles use linear interpolation between closest ranks
/// (see [`quantile::quantile_sorted`]), so for every summary
/// `min <= q1 <= median <= q3 <= max` holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// The smallest value in the sample.
    pub min: f64,
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile.
    pub median: f64,
    /// The 75th percentile.
    pub q3: f64,
    /// The largest value in the sample.
    pub max: f64,
}

impl FiveNumberSummary {
    /// Computes the summary from unsorted values.
    ///
    /// The values are collected and sorted internally.
    ///
    /// # Errors
    ///
    /// * [`SummaryError::EmptyGroup`] - if `values` yields nothing
    /// * [`SummaryError::NonFinite`] - if any value is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// # use likeplot_stats::summary::{FiveNumberSummary, SummaryError};
    /// let summary = FiveNumberSummary::new([30.0, 10.0, 20.0]).unwrap();
    /// assert_eq!(summary.q1, 15.0);
    /// assert_eq!(summary.q3, 25.0);
    ///
    /// assert_eq!(FiveNumberSummary::new([]), Err(SummaryError::EmptyGroup));
    /// ```
    pub fn new<I>(values: I) -> Result<Self, SummaryError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SummaryError::NonFinite { index, value });
        }
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes the summary from pre-sorted, finite values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, SummaryError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (&min, &max) = sorted_values
            .first()
            .zip(sorted_values.last())
            .ok_or(SummaryError::EmptyGroup)?;

        Ok(Self {
            min,
            q1: quantile::quantile_sorted(sorted_values, 0.25),
            median: quantile::quantile_sorted(sorted_values, 0.5),
            q3: quantile::quantile_sorted(sorted_values, 0.75),
            max,
        })
    }

    /// A summary of a single observation.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            min: value,
            q1: value,
            median: value,
            q3: value,
            max: value,
        }
    }

    /// The interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// The five values in ascending order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}
