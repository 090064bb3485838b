//! Layout solving for regular grids of plot panels.
//!
//! Computes the figure size and the figure-relative rectangle of every panel
//! and colorbar from a grid shape, absolute padding in inches, a size
//! constraint and a colorbar placement. Closed-form arithmetic only: each
//! constraint mode is one branch of algebra, there is no iteration.
//!
//! # Example
//!
//! ```
//! use facetgrid::{Colorbar, ColorbarLocation, Facets, Padding};
//!
//! let layout = Facets::new(1, 3)
//!     .width_aspect(8.0, 0.618)
//!     .padding(Padding::uniform(0.5).internal(0.5))
//!     .colorbar(Colorbar::single(ColorbarLocation::Bottom))
//!     .compute()
//!     .unwrap();
//!
//! // (8.0 - 0.5 - 0.5 - 2 × 0.5) / 3
//! assert!((layout.panel_width - 2.0).abs() < 1e-9);
//! // 0.5 + 0.5 + 1.236 + 0.5 + 0.125
//! assert!((layout.figure_height - 2.861).abs() < 1e-9);
//! assert_eq!(layout.colorbars.len(), 1);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::colorbar::Colorbar;
use crate::share::{PanelSharing, ShareAxes, share_plan};

/// Shape of the panel grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    /// Number of panel rows. Row 0 is the top of the figure.
    pub rows: u32,
    /// Number of panel columns. Column 0 is the left of the figure.
    pub cols: u32,
}

impl Grid {
    /// Create a grid of `rows × cols` panels.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// A single panel.
    pub const fn single() -> Self {
        Self::new(1, 1)
    }

    /// Number of cells.
    pub const fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major index of `(row, col)`.
    pub const fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// `(row, col)` of a row-major index, or `None` if the index is outside the grid.
    pub const fn position(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.cells() {
            return None;
        }
        let cols = self.cols as usize;
        Some(((index / cols) as u32, (index % cols) as u32))
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigurationError::ZeroGridDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Gap between adjacent panels, in inches.
///
/// Built from a scalar (same gap on both axes) or from a
/// `(horizontal, vertical)` pair. The pair order is fixed: the first value
/// separates columns, the second separates rows.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InternalPad {
    /// Gap between adjacent columns.
    pub horizontal: f64,
    /// Gap between adjacent rows.
    pub vertical: f64,
}

impl InternalPad {
    /// Different gaps between columns and between rows.
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The same gap on both axes.
    pub const fn uniform(pad: f64) -> Self {
        Self::new(pad, pad)
    }
}

impl Default for InternalPad {
    fn default() -> Self {
        Self::uniform(Padding::DEFAULT_INTERNAL)
    }
}

impl From<f64> for InternalPad {
    fn from(pad: f64) -> Self {
        Self::uniform(pad)
    }
}

impl From<(f64, f64)> for InternalPad {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::new(horizontal, vertical)
    }
}

/// Absolute padding around and between panels, in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    /// Space between the top of the figure and the top row.
    pub top: f64,
    /// Space between the bottom of the figure and the bottom row.
    pub bottom: f64,
    /// Space between the left of the figure and the first column.
    pub left: f64,
    /// Space between the right of the figure and the last column.
    pub right: f64,
    /// Space between panels.
    pub internal: InternalPad,
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_OUTER)
    }
}

impl Padding {
    /// Default outer padding on every side.
    pub const DEFAULT_OUTER: f64 = 0.25;
    /// Default gap between panels.
    pub const DEFAULT_INTERNAL: f64 = 0.33;

    /// No padding anywhere.
    pub const fn zero() -> Self {
        Self {
            top: 0.0,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
            internal: InternalPad::uniform(0.0),
        }
    }

    /// The same outer padding on all four sides, default internal padding.
    pub const fn uniform(outer: f64) -> Self {
        Self {
            top: outer,
            bottom: outer,
            left: outer,
            right: outer,
            internal: InternalPad::uniform(Self::DEFAULT_INTERNAL),
        }
    }

    /// Set the top padding.
    pub fn top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Set the bottom padding.
    pub fn bottom(mut self, bottom: f64) -> Self {
        self.bottom = bottom;
        self
    }

    /// Set the left padding.
    pub fn left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    /// Set the right padding.
    pub fn right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }

    /// Set the gap between panels, from a scalar or a `(horizontal, vertical)` pair.
    pub fn internal(mut self, internal: impl Into<InternalPad>) -> Self {
        self.internal = internal.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        non_negative("top_pad", self.top)?;
        non_negative("bottom_pad", self.bottom)?;
        non_negative("left_pad", self.left)?;
        non_negative("right_pad", self.right)?;
        non_negative("internal_pad.horizontal", self.internal.horizontal)?;
        non_negative("internal_pad.vertical", self.internal.vertical)?;
        Ok(())
    }
}

/// Which two of figure width, figure height and panel aspect are fixed.
///
/// The third quantity is derived. Aspect is always `height / width` of a
/// single panel, never of the whole figure.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeConstraint {
    /// Fixed figure width and panel aspect; figure height is derived.
    WidthAspect { width: f64, aspect: f64 },
    /// Fixed figure height and panel aspect; figure width is derived.
    HeightAspect { height: f64, aspect: f64 },
    /// Fixed figure width and height; panel aspect is derived.
    WidthHeight { width: f64, height: f64 },
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self::WidthAspect {
            width: Self::DEFAULT_WIDTH,
            aspect: Self::DEFAULT_ASPECT,
        }
    }
}

impl SizeConstraint {
    /// Figure width substituted when no width can be derived from the caller's fields.
    pub const DEFAULT_WIDTH: f64 = 8.0;
    /// Panel aspect substituted when only one size field is given.
    pub const DEFAULT_ASPECT: f64 = 0.618;

    /// Fix figure width and panel aspect.
    pub const fn width_aspect(width: f64, aspect: f64) -> Self {
        Self::WidthAspect { width, aspect }
    }

    /// Fix figure height and panel aspect.
    pub const fn height_aspect(height: f64, aspect: f64) -> Self {
        Self::HeightAspect { height, aspect }
    }

    /// Fix figure width and height.
    pub const fn width_height(width: f64, height: f64) -> Self {
        Self::WidthHeight { width, height }
    }

    /// Build from three optional fields, exactly two of which must be present.
    pub fn from_options(
        width: Option<f64>,
        height: Option<f64>,
        aspect: Option<f64>,
    ) -> Result<Self, ConfigurationError> {
        let size = match (width, height, aspect) {
            (Some(width), None, Some(aspect)) => Self::WidthAspect { width, aspect },
            (None, Some(height), Some(aspect)) => Self::HeightAspect { height, aspect },
            (Some(width), Some(height), None) => Self::WidthHeight { width, height },
            _ => {
                let given = [width, height, aspect]
                    .iter()
                    .filter(|v| v.is_some())
                    .count();
                return Err(ConfigurationError::SizeFieldCount { given });
            }
        };
        size.validate()?;
        Ok(size)
    }

    /// Like [`from_options`](Self::from_options), but fills in
    /// [`DEFAULT_WIDTH`](Self::DEFAULT_WIDTH) and
    /// [`DEFAULT_ASPECT`](Self::DEFAULT_ASPECT) when fewer than two fields
    /// are given.
    ///
    /// - nothing → default width and aspect
    /// - only width, or only height → default aspect
    /// - only aspect → default width
    ///
    /// All three fields together are still an error.
    pub fn from_options_or_default(
        width: Option<f64>,
        height: Option<f64>,
        aspect: Option<f64>,
    ) -> Result<Self, ConfigurationError> {
        let (width, height, aspect) = match (width, height, aspect) {
            (None, None, None) => (Some(Self::DEFAULT_WIDTH), None, Some(Self::DEFAULT_ASPECT)),
            (Some(w), None, None) => (Some(w), None, Some(Self::DEFAULT_ASPECT)),
            (None, Some(h), None) => (None, Some(h), Some(Self::DEFAULT_ASPECT)),
            (None, None, Some(a)) => (Some(Self::DEFAULT_WIDTH), None, Some(a)),
            given => given,
        };
        Self::from_options(width, height, aspect)
    }

    /// Fixed figure width, if this constraint fixes it.
    pub fn width(&self) -> Option<f64> {
        match *self {
            Self::WidthAspect { width, .. } | Self::WidthHeight { width, .. } => Some(width),
            Self::HeightAspect { .. } => None,
        }
    }

    /// Fixed figure height, if this constraint fixes it.
    pub fn height(&self) -> Option<f64> {
        match *self {
            Self::HeightAspect { height, .. } | Self::WidthHeight { height, .. } => Some(height),
            Self::WidthAspect { .. } => None,
        }
    }

    /// Fixed panel aspect, if this constraint fixes it.
    pub fn aspect(&self) -> Option<f64> {
        match *self {
            Self::WidthAspect { aspect, .. } | Self::HeightAspect { aspect, .. } => Some(aspect),
            Self::WidthHeight { .. } => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::WidthAspect { .. } => "width-and-aspect",
            Self::HeightAspect { .. } => "height-and-aspect",
            Self::WidthHeight { .. } => "width-and-height",
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        match *self {
            Self::WidthAspect { width, aspect } => {
                positive("width", width)?;
                positive("aspect", aspect)?;
            }
            Self::HeightAspect { height, aspect } => {
                positive("height", height)?;
                positive("aspect", aspect)?;
            }
            Self::WidthHeight { width, height } => {
                positive("width", width)?;
                positive("height", height)?;
            }
        }
        Ok(())
    }
}

/// Complete figure configuration.
///
/// Bundles the grid, size constraint, padding, colorbar placement and axis
/// sharing, each defaulting to the documented constants.
///
/// # Example
///
/// ```
/// use facetgrid::{Colorbar, ColorbarLocation, Facets};
///
/// let layout = Facets::new(2, 2)
///     .width_height(8.0, 7.0)
///     .internal_pad((0.25, 0.5))
///     .colorbar(Colorbar::each(ColorbarLocation::Right))
///     .compute()
///     .unwrap();
///
/// assert_eq!(layout.panels.len(), 4);
/// assert_eq!(layout.colorbars.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Facets {
    pub grid: Grid,
    pub size: SizeConstraint,
    pub padding: Padding,
    pub colorbar: Colorbar,
    pub sharex: ShareAxes,
    pub sharey: ShareAxes,
}

impl Default for Grid {
    fn default() -> Self {
        Self::single()
    }
}

impl Facets {
    /// A `rows × cols` grid with every other setting at its default.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            ..Self::default()
        }
    }

    /// A single-panel figure.
    pub fn single() -> Self {
        Self::new(1, 1)
    }

    /// Set the size constraint.
    pub fn size(mut self, size: SizeConstraint) -> Self {
        self.size = size;
        self
    }

    /// Fix figure width and panel aspect.
    pub fn width_aspect(self, width: f64, aspect: f64) -> Self {
        self.size(SizeConstraint::width_aspect(width, aspect))
    }

    /// Fix figure height and panel aspect.
    pub fn height_aspect(self, height: f64, aspect: f64) -> Self {
        self.size(SizeConstraint::height_aspect(height, aspect))
    }

    /// Fix figure width and height.
    pub fn width_height(self, width: f64, height: f64) -> Self {
        self.size(SizeConstraint::width_height(width, height))
    }

    /// Replace all padding.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set only the gap between panels.
    pub fn internal_pad(mut self, internal: impl Into<InternalPad>) -> Self {
        self.padding.internal = internal.into();
        self
    }

    /// Set colorbar placement.
    pub fn colorbar(mut self, colorbar: Colorbar) -> Self {
        self.colorbar = colorbar;
        self
    }

    /// Set x and y axis sharing.
    pub fn share(mut self, sharex: ShareAxes, sharey: ShareAxes) -> Self {
        self.sharex = sharex;
        self.sharey = sharey;
        self
    }

    /// Solve the layout.
    pub fn compute(&self) -> Result<Layout, ConfigurationError> {
        solve(self.grid, &self.padding, self.size, &self.colorbar)
    }

    /// Axis sharing for each panel, row-major.
    pub fn share_plan(&self) -> Vec<PanelSharing> {
        share_plan(self.grid, self.sharex, self.sharey)
    }
}

/// Axis-aligned rectangle in figure-relative coordinates.
///
/// `(0, 0)` is the bottom-left corner of the figure, `(1, 1)` the top-right.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// `[left, bottom, width, height]`, the order plotting libraries take.
    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.bottom, self.width, self.height]
    }

    /// Whether the interiors of two rects intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.bottom < other.top()
            && other.bottom < self.top()
    }

    /// Slack allowed on unit-square edges for accumulated rounding.
    pub const EDGE_TOLERANCE: f64 = 1e-12;

    /// Whether this rect lies inside the unit square, up to
    /// [`EDGE_TOLERANCE`](Self::EDGE_TOLERANCE).
    pub fn is_within_unit(&self) -> bool {
        let eps = Self::EDGE_TOLERANCE;
        self.left >= -eps
            && self.bottom >= -eps
            && self.right() <= 1.0 + eps
            && self.top() <= 1.0 + eps
    }

    /// Scale to inches on a figure of the given size.
    pub fn in_inches(&self, figure_width: f64, figure_height: f64) -> Rect {
        Rect {
            left: self.left * figure_width,
            bottom: self.bottom * figure_height,
            width: self.width * figure_width,
            height: self.height * figure_height,
        }
    }
}

/// Solved figure layout.
///
/// Figure and panel sizes are in inches; rectangles are figure-relative.
/// Every panel has the same size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Grid the layout was solved for.
    pub grid: Grid,
    /// Figure width in inches.
    pub figure_width: f64,
    /// Figure height in inches.
    pub figure_height: f64,
    /// Width of each panel in inches.
    pub panel_width: f64,
    /// Height of each panel in inches.
    pub panel_height: f64,
    /// One rect per panel, row-major, row 0 at the top.
    pub panels: Vec<Rect>,
    /// Colorbar rects. Order depends on the colorbar mode:
    /// by column for top/bottom edge colorbars, by row for left/right edge
    /// colorbars, row-major for per-panel colorbars.
    pub colorbars: Vec<Rect>,
}

impl Layout {
    /// Panel aspect ratio (`panel_height / panel_width`).
    pub fn aspect(&self) -> f64 {
        self.panel_height / self.panel_width
    }

    /// Figure size `(width, height)` in inches.
    pub fn figure_size(&self) -> (f64, f64) {
        (self.figure_width, self.figure_height)
    }

    /// Rect of the panel at `(row, col)`.
    pub fn panel(&self, row: u32, col: u32) -> Option<&Rect> {
        if row >= self.grid.rows || col >= self.grid.cols {
            return None;
        }
        self.panels.get(self.grid.index(row, col))
    }
}

/// Which extent of a panel a check refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}

/// A figure configuration that cannot be laid out.
///
/// Returned before any rectangle is computed; a layout is either complete or
/// not produced at all.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Grid has zero rows or zero columns.
    #[error("grid must have at least one row and one column, got {rows}×{cols}")]
    ZeroGridDimension { rows: u32, cols: u32 },
    /// Not exactly two of width, height and aspect were given.
    #[error("exactly two of width, height, and aspect must be given, got {given}")]
    SizeFieldCount { given: usize },
    /// A width, height or aspect is zero, negative or not finite.
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositiveSize { field: &'static str, value: f64 },
    /// A padding value is negative or not finite.
    #[error("{field} must be a non-negative finite length, got {value}")]
    NegativeLength { field: &'static str, value: f64 },
    /// Colorbar thickness is zero, negative or not finite.
    #[error("colorbar thickness must be positive, got {value}")]
    NonPositiveThickness { value: f64 },
    /// Padding and colorbars use up the whole figure along one axis.
    #[error("padding and colorbars leave a panel {dimension} of {extent} in")]
    NonPositivePanel { dimension: Dimension, extent: f64 },
    /// A derived figure width or height is too large to represent.
    #[error("derived figure {dimension} of {extent} in is not finite")]
    FigureOverflow { dimension: Dimension, extent: f64 },
    /// The short-side pad is at least half the length of a colorbar.
    #[error("short-side pad leaves a colorbar length of {extent} in")]
    ColorbarTooShort { extent: f64 },
    /// Colorbar mode text not recognized.
    #[error("unsupported colorbar mode {0:?}, expected none|single|edge|each")]
    UnsupportedColorbarMode(String),
    /// Colorbar location text not recognized.
    #[error("unsupported colorbar location {0:?}, expected left|right|top|bottom")]
    UnsupportedColorbarLocation(String),
    /// Axis sharing text not recognized.
    #[error("unsupported axis sharing {0:?}, expected all|row|col|none")]
    UnsupportedShareMode(String),
}

/// Solve a grid layout.
///
/// Fails if any input is out of range or if the padding and colorbar
/// allocation leave no room for the panels.
pub fn solve(
    grid: Grid,
    padding: &Padding,
    size: SizeConstraint,
    colorbar: &Colorbar,
) -> Result<Layout, ConfigurationError> {
    solve_checked(grid, padding, size, colorbar).inspect_err(|err| {
        tracing::debug!(
            rows = grid.rows,
            cols = grid.cols,
            constraint = size.name(),
            error = %err,
            "rejected facet configuration"
        );
    })
}

fn solve_checked(
    grid: Grid,
    padding: &Padding,
    size: SizeConstraint,
    colorbar: &Colorbar,
) -> Result<Layout, ConfigurationError> {
    grid.validate()?;
    padding.validate()?;
    size.validate()?;
    colorbar.validate()?;

    let horizontal = Budget {
        near: padding.left,
        far: padding.right,
        count: grid.cols,
        gap: padding.internal.horizontal,
        extra: colorbar.allocation_width(grid),
    };
    let vertical = Budget {
        near: padding.bottom,
        far: padding.top,
        count: grid.rows,
        gap: padding.internal.vertical,
        extra: colorbar.allocation_height(grid),
    };

    let (figure_width, figure_height, panel_width, panel_height) = match size {
        SizeConstraint::WidthAspect { width, aspect } => {
            let pw = panel_extent(Dimension::Width, horizontal.panel_for(width))?;
            let ph = panel_extent(Dimension::Height, aspect * pw)?;
            let height = figure_extent(Dimension::Height, vertical.total_for(ph))?;
            (width, height, pw, ph)
        }
        SizeConstraint::HeightAspect { height, aspect } => {
            let ph = panel_extent(Dimension::Height, vertical.panel_for(height))?;
            let pw = panel_extent(Dimension::Width, ph / aspect)?;
            let width = figure_extent(Dimension::Width, horizontal.total_for(pw))?;
            (width, height, pw, ph)
        }
        SizeConstraint::WidthHeight { width, height } => {
            let pw = panel_extent(Dimension::Width, horizontal.panel_for(width))?;
            let ph = panel_extent(Dimension::Height, vertical.panel_for(height))?;
            (width, height, pw, ph)
        }
    };
    debug_assert!(closes(horizontal.total_for(panel_width), figure_width));
    debug_assert!(closes(vertical.total_for(panel_height), figure_height));

    let (origin_x, origin_y) = colorbar.grid_offset();
    let frame = Frame {
        grid,
        padding: *padding,
        figure_width,
        figure_height,
        tile_width: panel_width + colorbar.tile_extra_width(),
        tile_height: panel_height + colorbar.tile_extra_height(),
        origin_x: padding.left + origin_x,
        origin_y: padding.bottom + origin_y,
    };

    let (dx, dy) = colorbar.panel_offset();
    let mut panels = Vec::with_capacity(grid.cells());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let (x, y) = frame.tile(row, col);
            panels.push(frame.relative(x + dx, y + dy, panel_width, panel_height));
        }
    }
    let colorbars = colorbar.rects(&frame)?;

    tracing::debug!(
        rows = grid.rows,
        cols = grid.cols,
        constraint = size.name(),
        figure_width,
        figure_height,
        panel_width,
        panel_height,
        colorbars = colorbars.len(),
        "solved facet layout"
    );

    Ok(Layout {
        grid,
        figure_width,
        figure_height,
        panel_width,
        panel_height,
        panels,
        colorbars,
    })
}

// ============================================================================
// Internal geometry
// ============================================================================

/// One axis of the figure: `near + far + count·panel + (count − 1)·gap + extra`.
#[derive(Copy, Clone, Debug)]
struct Budget {
    near: f64,
    far: f64,
    count: u32,
    gap: f64,
    /// Colorbar allocation along this axis.
    extra: f64,
}

impl Budget {
    fn fixed(&self) -> f64 {
        self.near + self.far + f64::from(self.count - 1) * self.gap + self.extra
    }

    /// Panel extent that makes the axis add up to `total`.
    fn panel_for(&self, total: f64) -> f64 {
        (total - self.fixed()) / f64::from(self.count)
    }

    /// Axis total for a given panel extent.
    fn total_for(&self, panel: f64) -> f64 {
        f64::from(self.count) * panel + self.fixed()
    }
}

fn panel_extent(dimension: Dimension, extent: f64) -> Result<f64, ConfigurationError> {
    if extent.is_finite() && extent > 0.0 {
        Ok(extent)
    } else {
        Err(ConfigurationError::NonPositivePanel { dimension, extent })
    }
}

fn figure_extent(dimension: Dimension, extent: f64) -> Result<f64, ConfigurationError> {
    if extent.is_finite() {
        Ok(extent)
    } else {
        Err(ConfigurationError::FigureOverflow { dimension, extent })
    }
}

fn closes(total: f64, expected: f64) -> bool {
    (total - expected).abs() <= 1e-9 * expected.max(1.0)
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NonPositiveSize { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NegativeLength { field, value })
    }
}

/// Solved figure geometry in inches, shared by panel and colorbar placement.
///
/// A tile is one grid cell: the panel plus, for per-panel colorbars, the
/// colorbar and its pad.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Frame {
    pub(crate) grid: Grid,
    pub(crate) padding: Padding,
    pub(crate) figure_width: f64,
    pub(crate) figure_height: f64,
    pub(crate) tile_width: f64,
    pub(crate) tile_height: f64,
    /// Left edge of column 0.
    pub(crate) origin_x: f64,
    /// Bottom edge of the last row.
    pub(crate) origin_y: f64,
}

impl Frame {
    /// Bottom-left corner of the tile at `(row, col)`, row 0 at the top.
    pub(crate) fn tile(&self, row: u32, col: u32) -> (f64, f64) {
        let x = self.origin_x + f64::from(col) * (self.tile_width + self.padding.internal.horizontal);
        let y = self.origin_y
            + f64::from(self.grid.rows - 1 - row) * (self.tile_height + self.padding.internal.vertical);
        (x, y)
    }

    /// Figure width inside the outer padding.
    pub(crate) fn inner_width(&self) -> f64 {
        self.figure_width - self.padding.left - self.padding.right
    }

    /// Figure height inside the outer padding.
    pub(crate) fn inner_height(&self) -> f64 {
        self.figure_height - self.padding.top - self.padding.bottom
    }

    /// Convert an inch rectangle to figure-relative coordinates.
    pub(crate) fn relative(&self, x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            left: x / self.figure_width,
            bottom: y / self.figure_height,
            width: width / self.figure_width,
            height: height / self.figure_height,
        }
    }
}
