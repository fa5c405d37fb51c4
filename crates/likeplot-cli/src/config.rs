//! Chart configuration.
//!
//! Every section falls back to its defaults, so a configuration file only
//! needs the values it overrides.

use std::path::Path;

use likeplot_layout::{
    chart::{boxplot::BoxplotStyle, grouped_bar::GroupedBarStyle, line::LineStyle},
    frame::ChartFrame,
};
use serde::{Deserialize, Serialize};

use crate::util;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub frame: ChartFrame,
    pub boxplot: BoxplotStyle,
    pub barplot: GroupedBarStyle,
    pub lineplot: LineStyle,
}

impl ChartConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => util::read_json(path),
            None => Ok(Self::default()),
        }
    }
}
