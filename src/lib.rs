//! Exact physical-unit layout of plot panel grids and their colorbars.
//!
//! Given a grid shape, absolute padding in inches, two of figure width,
//! figure height and panel aspect, and a colorbar placement, computes the
//! figure size and the figure-relative rectangle of every panel and colorbar.
//! Pure geometry: nothing is drawn, `no_std` compatible with `alloc`.
//!
//! # Modules
//!
//! - [`constraint`]: grid, padding, size constraints and the layout solver
//! - [`colorbar`]: colorbar modes, locations and their space allocation
//! - [`share`]: axis sharing and tick label visibility per panel
//! - `query` (feature `query`): `key=value&...` configuration strings
//! - `svg` (feature `svg`): SVG preview of a solved layout

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod colorbar;
pub mod constraint;
pub mod share;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use colorbar::{Colorbar, ColorbarLocation, ColorbarMode};
pub use constraint::{
    ConfigurationError, Dimension, Facets, Grid, InternalPad, Layout, Padding, Rect,
    SizeConstraint, solve,
};
pub use share::{PanelSharing, ShareAxes, share_plan};
