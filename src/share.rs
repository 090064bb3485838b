//! Axis sharing between panels.
//!
//! Sharing does not change geometry. It tells the caller which panel each
//! axis should be linked to and which tick labels become redundant.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::constraint::{ConfigurationError, Grid};

/// Which panels share an axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShareAxes {
    /// Every panel shares with the top-left panel.
    #[default]
    All,
    /// Panels in a row share with the first panel of the row.
    Row,
    /// Panels in a column share with the top panel of the column.
    Col,
    /// No sharing.
    None,
}

impl ShareAxes {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Row => "row",
            Self::Col => "col",
            Self::None => "none",
        }
    }

    /// Row-major index of the panel that `(row, col)` links to, if any.
    fn reference(&self, grid: Grid, row: u32, col: u32) -> Option<usize> {
        let target = match self {
            Self::All => 0,
            Self::Row => grid.index(row, 0),
            Self::Col => grid.index(0, col),
            Self::None => return None,
        };
        (target != grid.index(row, col)).then_some(target)
    }
}

impl From<bool> for ShareAxes {
    fn from(share: bool) -> Self {
        if share { Self::All } else { Self::None }
    }
}

impl fmt::Display for ShareAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareAxes {
    type Err = ConfigurationError;

    /// Accepts the mode names plus `true`/`false`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "true" => Ok(Self::All),
            "row" => Ok(Self::Row),
            "col" => Ok(Self::Col),
            "none" | "false" => Ok(Self::None),
            _ => Err(ConfigurationError::UnsupportedShareMode(s.to_string())),
        }
    }
}

/// How one panel's axes are linked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelSharing {
    /// Row-major index of the panel whose x axis this one follows.
    pub x_with: Option<usize>,
    /// Row-major index of the panel whose y axis this one follows.
    pub y_with: Option<usize>,
    /// Whether x tick labels should be drawn.
    pub x_tick_labels: bool,
    /// Whether y tick labels should be drawn.
    pub y_tick_labels: bool,
}

/// Sharing for every panel of `grid`, row-major.
///
/// X tick labels are kept only on the bottom row when columns share x, and
/// y tick labels only on the first column when rows share y.
pub fn share_plan(grid: Grid, sharex: ShareAxes, sharey: ShareAxes) -> Vec<PanelSharing> {
    let mut plan = Vec::with_capacity(grid.cells());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let hide_x = matches!(sharex, ShareAxes::All | ShareAxes::Col) && row + 1 < grid.rows;
            let hide_y = matches!(sharey, ShareAxes::All | ShareAxes::Row) && col > 0;
            plan.push(PanelSharing {
                x_with: sharex.reference(grid, row, col),
                y_with: sharey.reference(grid, row, col),
                x_tick_labels: !hide_x,
                y_tick_labels: !hide_y,
            });
        }
    }
    plan
}
