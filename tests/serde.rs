//! Serialized form of figure configurations and layouts.

#![cfg(feature = "serde")]

use facetgrid::*;

#[test]
fn facets_round_trip() {
    let facets = Facets::new(2, 3)
        .width_aspect(8.0, 0.5)
        .internal_pad((0.25, 0.5))
        .colorbar(Colorbar::each(ColorbarLocation::Top).short_side_pad(0.25))
        .share(ShareAxes::Col, ShareAxes::None);

    let json = serde_json::to_string(&facets).unwrap();
    let back: Facets = serde_json::from_str(&json).unwrap();
    assert_eq!(back, facets);
}

#[test]
fn enums_serialize_lowercase() {
    let json = serde_json::to_value(Colorbar::edge(ColorbarLocation::Bottom)).unwrap();
    assert_eq!(json["mode"], "edge");
    assert_eq!(json["location"], "bottom");

    let json = serde_json::to_value(SizeConstraint::height_aspect(4.0, 0.5)).unwrap();
    assert_eq!(json["height_aspect"]["height"], 4.0);
}

#[test]
fn missing_fields_take_defaults() {
    let facets: Facets =
        serde_json::from_str(r#"{"grid": {"rows": 2, "cols": 2}, "colorbar": {"mode": "single"}}"#)
            .unwrap();
    assert_eq!(facets.grid, Grid::new(2, 2));
    assert_eq!(facets.padding, Padding::default());
    assert_eq!(facets.colorbar, Colorbar::single(ColorbarLocation::Right));
    assert_eq!(facets.sharex, ShareAxes::All);
}

#[test]
fn layout_serializes_rects() {
    let layout = Facets::new(1, 2)
        .colorbar(Colorbar::single(ColorbarLocation::Bottom))
        .compute()
        .unwrap();
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["panels"].as_array().unwrap().len(), 2);
    assert_eq!(json["colorbars"].as_array().unwrap().len(), 1);

    let back: Layout = serde_json::from_value(json).unwrap();
    assert_eq!(back.panels.len(), 2);
    assert!((back.figure_height - layout.figure_height).abs() < 1e-9);
    assert!((back.panels[1].left - layout.panels[1].left).abs() < 1e-9);
}

#[test]
fn partial_padding_keeps_other_defaults() {
    let facets: Facets = serde_json::from_str(r#"{"padding": {"left": 1.0}}"#).unwrap();
    assert_eq!(facets.padding, Padding::default().left(1.0));

    let facets: Facets =
        serde_json::from_str(r#"{"padding": {"internal": {"vertical": 0.5}}}"#).unwrap();
    assert_eq!(
        facets.padding.internal,
        InternalPad::new(InternalPad::default().horizontal, 0.5)
    );
    assert_eq!(facets.padding.top, Padding::default().top);
}
