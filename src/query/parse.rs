//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use super::ParseWarning;
use super::args::FacetArgs;
use crate::constraint::InternalPad;

/// Parse a configuration string into arguments + warnings.
pub(crate) fn parse_query(query: &str) -> (FacetArgs, Vec<ParseWarning>) {
    let mut args = FacetArgs::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(key.trim(), value.trim(), &mut args, &mut warnings);
    }

    (args, warnings)
}

const NUMBER: &str = "expected a number";
const COUNT: &str = "expected a non-negative integer";

fn dispatch_key(key: &str, value: &str, args: &mut FacetArgs, warnings: &mut Vec<ParseWarning>) {
    let mut w = Setter { value, warnings };
    match key {
        // Grid
        "rows" => w.set(&mut args.rows, "rows", value.parse().ok(), COUNT),
        "cols" => w.set(&mut args.cols, "cols", value.parse().ok(), COUNT),

        // Size
        "width" => w.set(&mut args.width, "width", parse_f64(value), NUMBER),
        "height" => w.set(&mut args.height, "height", parse_f64(value), NUMBER),
        "aspect" => w.set(&mut args.aspect, "aspect", parse_f64(value), NUMBER),

        // Padding
        "top_pad" => w.set(&mut args.top_pad, "top_pad", parse_f64(value), NUMBER),
        "bottom_pad" => w.set(&mut args.bottom_pad, "bottom_pad", parse_f64(value), NUMBER),
        "left_pad" => w.set(&mut args.left_pad, "left_pad", parse_f64(value), NUMBER),
        "right_pad" => w.set(&mut args.right_pad, "right_pad", parse_f64(value), NUMBER),
        "internal_pad" => w.set(
            &mut args.internal_pad,
            "internal_pad",
            parse_internal_pad(value),
            "expected a number or horizontal,vertical",
        ),

        // Colorbar
        "cbar_mode" => w.set(
            &mut args.cbar_mode,
            "cbar_mode",
            parse_enum(value),
            "expected none|single|edge|each",
        ),
        "cbar_location" => w.set(
            &mut args.cbar_location,
            "cbar_location",
            parse_enum(value),
            "expected left|right|top|bottom",
        ),
        "cbar_size" => w.set(&mut args.cbar_size, "cbar_size", parse_f64(value), NUMBER),
        "cbar_pad" => w.set(&mut args.cbar_pad, "cbar_pad", parse_f64(value), NUMBER),
        "cbar_short_side_pad" => w.set(
            &mut args.cbar_short_side_pad,
            "cbar_short_side_pad",
            parse_f64(value),
            NUMBER,
        ),

        // Sharing
        "sharex" => w.set(
            &mut args.sharex,
            "sharex",
            parse_enum(value),
            "expected all|row|col|none|true|false",
        ),
        "sharey" => w.set(
            &mut args.sharey,
            "sharey",
            parse_enum(value),
            "expected all|row|col|none|true|false",
        ),

        _ => w.warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Writes parsed values into their fields and records warnings for one pair.
struct Setter<'a> {
    value: &'a str,
    warnings: &'a mut Vec<ParseWarning>,
}

impl Setter<'_> {
    /// Set a field, warning on duplicate or on an unparseable value.
    ///
    /// An invalid value leaves any earlier valid value in place.
    fn set<T>(
        &mut self,
        field: &mut Option<T>,
        key: &'static str,
        parsed: Option<T>,
        reason: &'static str,
    ) {
        let Some(v) = parsed else {
            self.warnings.push(ParseWarning::ValueInvalid {
                key,
                value: String::from(self.value),
                reason,
            });
            return;
        };
        if field.is_some() {
            self.warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(self.value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

fn parse_enum<T: FromStr>(s: &str) -> Option<T> {
    s.parse::<T>().ok()
}

/// `0.3` or `0.25,0.5`; the pair is horizontal then vertical.
fn parse_internal_pad(s: &str) -> Option<InternalPad> {
    match s.split_once(',') {
        Some((h, v)) => Some(InternalPad::new(
            parse_f64(h.trim())?,
            parse_f64(v.trim())?,
        )),
        None => parse_f64(s).map(InternalPad::uniform),
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
