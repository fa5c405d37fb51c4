//! Descriptive statistics for the likeplot charts.
//!
//! This crate provides the numeric core behind the boxplot:
//!
//! - **Quantiles**: linear-interpolation quantile estimation (the R-7 method)
//! - **Five-number summaries**: min, first quartile, median, third quartile, max
//! - **Category grouping**: ordered group-by preserving first occurrence
//!
//! # Modules
//!
//! - [`quantile`]: Quantile estimation over sorted samples
//! - [`summary`]: Five-number summaries with input validation
//! - [`grouping`]: Insertion-ordered grouping of observations by category
//!
//! # Examples
//!
//! ## Computing a five-number summary
//!
//! ```
//! use likeplot_stats::summary::FiveNumberSummary;
//!
//! let summary = FiveNumberSummary::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
//! assert_eq!(summary.min, 1.0);
//! assert_eq!(summary.q1, 2.75);
//! assert_eq!(summary.median, 4.5);
//! assert_eq!(summary.q3, 6.25);
//! assert_eq!(summary.max, 8.0);
//! ```
//!
//! ## Summarizing observations per category
//!
//! ```
//! use likeplot_stats::grouping::CategoryGrouping;
//!
//! let rows = [("Teen", 10.0), ("Adult", 4.0), ("Teen", 20.0), ("Teen", 30.0)];
//! let groups = CategoryGrouping::group_by(rows, |(k, _)| *k, |(_, v)| *v);
//! let summaries = groups.summarize().unwrap();
//!
//! let keys = summaries.keys().copied().collect::<Vec<_>>();
//! assert_eq!(keys, ["Teen", "Adult"]);
//! assert_eq!(summaries.get(&"Teen").unwrap().q1, 15.0);
//! ```

pub mod grouping;
pub mod quantile;
pub mod summary;
