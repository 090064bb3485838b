//! Parsed keyword arguments, before defaults are applied.

use crate::colorbar::{Colorbar, ColorbarLocation, ColorbarMode};
use crate::constraint::{ConfigurationError, Facets, Grid, InternalPad, Padding, SizeConstraint};
use crate::share::ShareAxes;

/// Parsed figure keywords. Every field is optional.
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`to_facets()`](Self::to_facets).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct FacetArgs {
    /// Number of panel rows (`rows`). Default: 1.
    pub rows: Option<u32>,
    /// Number of panel columns (`cols`). Default: 1.
    pub cols: Option<u32>,
    /// Figure width in inches (`width`).
    pub width: Option<f64>,
    /// Figure height in inches (`height`).
    pub height: Option<f64>,
    /// Panel height over panel width (`aspect`).
    pub aspect: Option<f64>,
    /// `top_pad`.
    pub top_pad: Option<f64>,
    /// `bottom_pad`.
    pub bottom_pad: Option<f64>,
    /// `left_pad`.
    pub left_pad: Option<f64>,
    /// `right_pad`.
    pub right_pad: Option<f64>,
    /// `internal_pad`, a scalar or `horizontal,vertical`.
    pub internal_pad: Option<InternalPad>,
    /// `cbar_mode`.
    pub cbar_mode: Option<ColorbarMode>,
    /// `cbar_location`.
    pub cbar_location: Option<ColorbarLocation>,
    /// Colorbar thickness (`cbar_size`).
    pub cbar_size: Option<f64>,
    /// `cbar_pad`.
    pub cbar_pad: Option<f64>,
    /// `cbar_short_side_pad`.
    pub cbar_short_side_pad: Option<f64>,
    /// `sharex`.
    pub sharex: Option<ShareAxes>,
    /// `sharey`.
    pub sharey: Option<ShareAxes>,
}

impl FacetArgs {
    /// Create empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in defaults and build a figure configuration.
    ///
    /// Size fields go through
    /// [`SizeConstraint::from_options_or_default`], so zero or one size field
    /// is completed from the defaults and three is an error.
    pub fn to_facets(&self) -> Result<Facets, ConfigurationError> {
        let size = SizeConstraint::from_options_or_default(self.width, self.height, self.aspect)?;

        let defaults = Padding::default();
        let padding = Padding {
            top: self.top_pad.unwrap_or(defaults.top),
            bottom: self.bottom_pad.unwrap_or(defaults.bottom),
            left: self.left_pad.unwrap_or(defaults.left),
            right: self.right_pad.unwrap_or(defaults.right),
            internal: self.internal_pad.unwrap_or(defaults.internal),
        };

        let colorbar = Colorbar::new(
            self.cbar_mode.unwrap_or_default(),
            self.cbar_location.unwrap_or_default(),
        )
        .thickness(self.cbar_size.unwrap_or(Colorbar::DEFAULT_THICKNESS))
        .pad(self.cbar_pad.unwrap_or(Colorbar::DEFAULT_PAD))
        .short_side_pad(
            self.cbar_short_side_pad
                .unwrap_or(Colorbar::DEFAULT_SHORT_SIDE_PAD),
        );

        Ok(Facets {
            grid: Grid::new(self.rows.unwrap_or(1), self.cols.unwrap_or(1)),
            size,
            padding,
            colorbar,
            sharex: self.sharex.unwrap_or_default(),
            sharey: self.sharey.unwrap_or_default(),
        })
    }
}
