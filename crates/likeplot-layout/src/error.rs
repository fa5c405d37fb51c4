use likeplot_stats::grouping::GroupSummaryError;

use crate::scale::ScaleError;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LayoutError {
    #[display("no observations to lay out")]
    EmptyDataset,
    #[display("observation #{index} has a non-finite value ({value})")]
    InvalidInput { index: usize, value: f64 },
    #[display("category '{category}' is missing from its scale")]
    UnknownCategory { category: String },
    #[display("chart frame {width}x{height} leaves no room for the plot area")]
    InvalidFrame { width: f64, height: f64 },
    #[display("{_0}")]
    #[from]
    Scale(ScaleError),
    #[display("{_0}")]
    #[from]
    Summary(GroupSummaryError),
}
