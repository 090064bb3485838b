//! Figure configuration from `key=value&...` strings.
//!
//! Parses strings like `rows=2&cols=3&width=8&aspect=0.618&cbar_mode=each`
//! into [`FacetArgs`], the raw keyword record, and from there into a
//! [`Facets`](crate::Facets) ready to solve.
//!
//! # Example
//!
//! ```
//! use facetgrid::query;
//!
//! let result = query::parse("rows=2&cols=3&width=8&aspect=0.618&cbar_mode=each");
//! assert!(result.warnings.is_empty());
//!
//! let layout = result.args
//!     .to_facets()
//!     .expect("valid configuration")
//!     .compute()
//!     .expect("valid layout");
//!
//! assert_eq!(layout.panels.len(), 6);
//! assert_eq!(layout.colorbars.len(), 6);
//! ```
//!
//! Parsing never fails. Unknown keys, repeated keys and unparseable values
//! are reported as [`ParseWarning`]s; range errors surface later from
//! [`FacetArgs::to_facets`] or [`Facets::compute`](crate::Facets::compute).

mod args;
mod parse;

pub use args::FacetArgs;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a configuration string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed keyword arguments.
    pub args: FacetArgs,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from configuration string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a configuration string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (args, warnings) = parse::parse_query(query);
    ParseResult { args, warnings }
}
