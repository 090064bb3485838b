//! Colorbar placement.
//!
//! A [`Colorbar`] pairs a [`ColorbarMode`] (how many colorbars, attached to
//! what) with a [`ColorbarLocation`] (which side). Every mode reserves
//! `thickness + pad` inches next to whatever it is attached to; the solver
//! adds that reservation to the width or height budget before sizing panels.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::constraint::{ConfigurationError, Frame, Grid, Rect, non_negative};

/// How many colorbars are drawn and what each one spans.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorbarMode {
    /// No colorbars.
    #[default]
    None,
    /// One colorbar spanning the whole grid along the chosen side.
    Single,
    /// One colorbar per row (left/right) or per column (top/bottom) on the
    /// outer edge of the grid.
    Edge,
    /// One colorbar attached to every panel.
    Each,
}

impl ColorbarMode {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Edge => "edge",
            Self::Each => "each",
        }
    }
}

impl fmt::Display for ColorbarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorbarMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "edge" => Ok(Self::Edge),
            "each" => Ok(Self::Each),
            _ => Err(ConfigurationError::UnsupportedColorbarMode(s.to_string())),
        }
    }
}

/// Side of the grid, row, column or panel that a colorbar sits on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorbarLocation {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl ColorbarLocation {
    /// Left and right colorbars take space from the figure width.
    pub const fn consumes_width(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Top and bottom colorbars take space from the figure height.
    pub const fn consumes_height(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for ColorbarLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorbarLocation {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ConfigurationError::UnsupportedColorbarLocation(
                s.to_string(),
            )),
        }
    }
}

/// Colorbar mode, location and sizes in inches.
///
/// ```
/// use facetgrid::{Colorbar, ColorbarLocation, ColorbarMode};
///
/// let cb = Colorbar::edge(ColorbarLocation::Top).thickness(0.2).pad(0.1);
/// assert_eq!(cb.mode, ColorbarMode::Edge);
/// assert!((cb.allocation() - 0.3).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Colorbar {
    pub mode: ColorbarMode,
    pub location: ColorbarLocation,
    /// Colorbar thickness, perpendicular to the side it sits on.
    pub thickness: f64,
    /// Gap between the colorbar and the panels it belongs to.
    pub pad: f64,
    /// Inset at both ends of the colorbar's long side.
    pub short_side_pad: f64,
}

impl Default for Colorbar {
    fn default() -> Self {
        Self::none()
    }
}

impl Colorbar {
    pub const DEFAULT_THICKNESS: f64 = 0.125;
    pub const DEFAULT_PAD: f64 = 0.5;
    pub const DEFAULT_SHORT_SIDE_PAD: f64 = 0.0;

    /// Given mode and location with default sizes.
    pub const fn new(mode: ColorbarMode, location: ColorbarLocation) -> Self {
        Self {
            mode,
            location,
            thickness: Self::DEFAULT_THICKNESS,
            pad: Self::DEFAULT_PAD,
            short_side_pad: Self::DEFAULT_SHORT_SIDE_PAD,
        }
    }

    /// No colorbars.
    pub const fn none() -> Self {
        Self::new(ColorbarMode::None, ColorbarLocation::Right)
    }

    /// One colorbar spanning the grid.
    pub const fn single(location: ColorbarLocation) -> Self {
        Self::new(ColorbarMode::Single, location)
    }

    /// One colorbar per outer row or column.
    pub const fn edge(location: ColorbarLocation) -> Self {
        Self::new(ColorbarMode::Edge, location)
    }

    /// One colorbar per panel.
    pub const fn each(location: ColorbarLocation) -> Self {
        Self::new(ColorbarMode::Each, location)
    }

    /// Set the thickness.
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the gap to the panels.
    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// Set the inset at both ends of the long side.
    pub fn short_side_pad(mut self, short_side_pad: f64) -> Self {
        self.short_side_pad = short_side_pad;
        self
    }

    /// Space one colorbar reserves, `thickness + pad`. Zero without colorbars.
    pub fn allocation(&self) -> f64 {
        match self.mode {
            ColorbarMode::None => 0.0,
            _ => self.thickness + self.pad,
        }
    }

    /// Total width reserved across the figure.
    pub fn allocation_width(&self, grid: Grid) -> f64 {
        if !self.location.consumes_width() {
            return 0.0;
        }
        match self.mode {
            ColorbarMode::None => 0.0,
            ColorbarMode::Single | ColorbarMode::Edge => self.allocation(),
            ColorbarMode::Each => f64::from(grid.cols) * self.allocation(),
        }
    }

    /// Total height reserved across the figure.
    pub fn allocation_height(&self, grid: Grid) -> f64 {
        if !self.location.consumes_height() {
            return 0.0;
        }
        match self.mode {
            ColorbarMode::None => 0.0,
            ColorbarMode::Single | ColorbarMode::Edge => self.allocation(),
            ColorbarMode::Each => f64::from(grid.rows) * self.allocation(),
        }
    }

    /// Number of colorbars drawn for `grid`.
    pub fn count(&self, grid: Grid) -> usize {
        match self.mode {
            ColorbarMode::None => 0,
            ColorbarMode::Single => 1,
            ColorbarMode::Edge if self.location.consumes_width() => grid.rows as usize,
            ColorbarMode::Edge => grid.cols as usize,
            ColorbarMode::Each => grid.cells(),
        }
    }

    /// Check sizes. Ignored entirely when the mode is [`ColorbarMode::None`].
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.mode == ColorbarMode::None {
            return Ok(());
        }
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(ConfigurationError::NonPositiveThickness {
                value: self.thickness,
            });
        }
        non_negative("cbar_pad", self.pad)?;
        non_negative("cbar_short_side_pad", self.short_side_pad)?;
        Ok(())
    }

    /// Extra width of each grid tile beyond the panel.
    pub(crate) fn tile_extra_width(&self) -> f64 {
        match self.mode {
            ColorbarMode::Each if self.location.consumes_width() => self.allocation(),
            _ => 0.0,
        }
    }

    /// Extra height of each grid tile beyond the panel.
    pub(crate) fn tile_extra_height(&self) -> f64 {
        match self.mode {
            ColorbarMode::Each if self.location.consumes_height() => self.allocation(),
            _ => 0.0,
        }
    }

    /// Shift of the whole grid past grid-level colorbars on the left or bottom.
    pub(crate) fn grid_offset(&self) -> (f64, f64) {
        match (self.mode, self.location) {
            (ColorbarMode::Single | ColorbarMode::Edge, ColorbarLocation::Left) => {
                (self.allocation(), 0.0)
            }
            (ColorbarMode::Single | ColorbarMode::Edge, ColorbarLocation::Bottom) => {
                (0.0, self.allocation())
            }
            _ => (0.0, 0.0),
        }
    }

    /// Shift of a panel inside its tile past its own left or bottom colorbar.
    pub(crate) fn panel_offset(&self) -> (f64, f64) {
        match (self.mode, self.location) {
            (ColorbarMode::Each, ColorbarLocation::Left) => (self.allocation(), 0.0),
            (ColorbarMode::Each, ColorbarLocation::Bottom) => (0.0, self.allocation()),
            _ => (0.0, 0.0),
        }
    }

    /// Figure-relative colorbar rects for a solved frame.
    pub(crate) fn rects(&self, frame: &Frame) -> Result<Vec<Rect>, ConfigurationError> {
        let grid = frame.grid;
        let p = &frame.padding;
        let t = self.thickness;
        let mut bars = Vec::with_capacity(self.count(grid));

        match self.mode {
            ColorbarMode::None => {}
            ColorbarMode::Single => {
                let (w, h) = (frame.inner_width(), frame.inner_height());
                bars.push(match self.location {
                    ColorbarLocation::Bottom => (p.left, p.bottom, w, t),
                    ColorbarLocation::Top => (p.left, frame.figure_height - p.top - t, w, t),
                    ColorbarLocation::Right => (frame.figure_width - p.right - t, p.bottom, t, h),
                    ColorbarLocation::Left => (p.left, p.bottom, t, h),
                });
            }
            ColorbarMode::Edge if self.location.consumes_height() => {
                let y = match self.location {
                    ColorbarLocation::Top => frame.figure_height - p.top - t,
                    _ => p.bottom,
                };
                for col in 0..grid.cols {
                    let (x, _) = frame.tile(0, col);
                    bars.push((x, y, frame.tile_width, t));
                }
            }
            ColorbarMode::Edge => {
                let x = match self.location {
                    ColorbarLocation::Right => frame.figure_width - p.right - t,
                    _ => p.left,
                };
                for row in 0..grid.rows {
                    let (_, y) = frame.tile(row, 0);
                    bars.push((x, y, t, frame.tile_height));
                }
            }
            ColorbarMode::Each => {
                let (tw, th) = (frame.tile_width, frame.tile_height);
                for row in 0..grid.rows {
                    for col in 0..grid.cols {
                        let (x, y) = frame.tile(row, col);
                        bars.push(match self.location {
                            ColorbarLocation::Bottom => (x, y, tw, t),
                            ColorbarLocation::Top => (x, y + th - t, tw, t),
                            ColorbarLocation::Right => (x + tw - t, y, t, th),
                            ColorbarLocation::Left => (x, y, t, th),
                        });
                    }
                }
            }
        }

        bars.into_iter()
            .map(|(x, y, w, h)| self.inset(x, y, w, h).map(|(x, y, w, h)| frame.relative(x, y, w, h)))
            .collect()
    }

    /// Shorten the long side by `short_side_pad` at both ends.
    fn inset(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<(f64, f64, f64, f64), ConfigurationError> {
        let s = self.short_side_pad;
        let inset = if self.location.consumes_height() {
            (x + s, y, w - 2.0 * s, h)
        } else {
            (x, y + s, w, h - 2.0 * s)
        };
        let long = if self.location.consumes_height() {
            inset.2
        } else {
            inset.3
        };
        if long > 0.0 {
            Ok(inset)
        } else {
            Err(ConfigurationError::ColorbarTooShort { extent: long })
        }
    }
}
