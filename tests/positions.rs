//! Panel and colorbar positions over every colorbar mode, location, grid
//! shape and size constraint.
//!
//! Expected bounds are derived independently of the solver's internals: the
//! tile extent comes from the figure size the layout reports, and each
//! mode/location combination has its own closed-form expectation. All
//! mismatches are collected and reported together.

use facetgrid::*;

const TOP: f64 = 0.25;
const BOTTOM: f64 = 0.25;
const LEFT: f64 = 0.25;
const RIGHT: f64 = 0.25;
const H_PAD: f64 = 0.25;
const V_PAD: f64 = 0.5;
const ASPECT: f64 = 0.5;
const HEIGHT: f64 = 7.0;
const WIDTH: f64 = 8.0;
const SHORT_SIDE: f64 = 0.25;
const CBAR_PAD: f64 = 0.25;
const THICKNESS: f64 = 0.125;
const CB: f64 = THICKNESS + CBAR_PAD;

const MODES: [ColorbarMode; 4] = [
    ColorbarMode::None,
    ColorbarMode::Single,
    ColorbarMode::Edge,
    ColorbarMode::Each,
];
const LOCATIONS: [ColorbarLocation; 4] = [
    ColorbarLocation::Bottom,
    ColorbarLocation::Right,
    ColorbarLocation::Top,
    ColorbarLocation::Left,
];
const GRIDS: [(u32, u32); 5] = [(1, 1), (1, 2), (2, 1), (2, 2), (5, 3)];
const CONSTRAINTS: [SizeConstraint; 3] = [
    SizeConstraint::width_aspect(WIDTH, ASPECT),
    SizeConstraint::height_aspect(HEIGHT, ASPECT),
    SizeConstraint::width_height(WIDTH, HEIGHT),
];

#[derive(Copy, Clone, Debug)]
struct Case {
    mode: ColorbarMode,
    location: ColorbarLocation,
    rows: u32,
    cols: u32,
    size: SizeConstraint,
}

impl Case {
    fn all() -> Vec<Case> {
        let mut cases = Vec::new();
        for mode in MODES {
            for location in LOCATIONS {
                for (rows, cols) in GRIDS {
                    for size in CONSTRAINTS {
                        cases.push(Case {
                            mode,
                            location,
                            rows,
                            cols,
                            size,
                        });
                    }
                }
            }
        }
        cases
    }

    fn facets(&self) -> Facets {
        Facets::new(self.rows, self.cols)
            .size(self.size)
            .padding(
                Padding::zero()
                    .top(TOP)
                    .bottom(BOTTOM)
                    .left(LEFT)
                    .right(RIGHT)
                    .internal((H_PAD, V_PAD)),
            )
            .colorbar(
                Colorbar::new(self.mode, self.location)
                    .thickness(THICKNESS)
                    .pad(CBAR_PAD)
                    .short_side_pad(SHORT_SIDE),
            )
    }
}

/// Grid-level geometry shared by the expectations, all in inches.
struct Geometry {
    width: f64,
    height: f64,
    rows: u32,
    cols: u32,
}

impl Geometry {
    fn tile_width(&self, left: f64, right: f64) -> f64 {
        (self.width - left - right - f64::from(self.cols - 1) * H_PAD) / f64::from(self.cols)
    }

    fn tile_height(&self, bottom: f64, top: f64) -> f64 {
        (self.height - bottom - top - f64::from(self.rows - 1) * V_PAD) / f64::from(self.rows)
    }

    fn bounds(&self, x: f64, y: f64, w: f64, h: f64) -> [f64; 4] {
        [x / self.width, y / self.height, w / self.width, h / self.height]
    }

    /// `(row counted from the bottom, col)` for each panel in row-major order.
    fn cells(&self) -> Vec<(u32, u32)> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (self.rows - 1 - row, col)))
            .collect()
    }
}

/// Outer pads after reserving room for a grid-level colorbar.
fn grid_pads(case: &Case) -> (f64, f64, f64, f64) {
    let (mut left, mut right, mut bottom, mut top) = (LEFT, RIGHT, BOTTOM, TOP);
    if matches!(case.mode, ColorbarMode::Single | ColorbarMode::Edge) {
        match case.location {
            ColorbarLocation::Left => left += CB,
            ColorbarLocation::Right => right += CB,
            ColorbarLocation::Bottom => bottom += CB,
            ColorbarLocation::Top => top += CB,
        }
    }
    (left, right, bottom, top)
}

fn expected_panels(case: &Case, g: &Geometry) -> Vec<[f64; 4]> {
    let (left, right, bottom, top) = grid_pads(case);
    let tw = g.tile_width(left, right);
    let th = g.tile_height(bottom, top);

    g.cells()
        .into_iter()
        .map(|(row, col)| {
            let x = left + f64::from(col) * (H_PAD + tw);
            let y = bottom + f64::from(row) * (V_PAD + th);
            if case.mode != ColorbarMode::Each {
                return g.bounds(x, y, tw, th);
            }
            match case.location {
                ColorbarLocation::Bottom => g.bounds(x, y + CB, tw, th - CB),
                ColorbarLocation::Top => g.bounds(x, y, tw, th - CB),
                ColorbarLocation::Right => g.bounds(x, y, tw - CB, th),
                ColorbarLocation::Left => g.bounds(x + CB, y, tw - CB, th),
            }
        })
        .collect()
}

fn expected_colorbars(case: &Case, g: &Geometry) -> Vec<[f64; 4]> {
    let (w, h) = (g.width, g.height);
    let s = SHORT_SIDE;
    let t = THICKNESS;
    match case.mode {
        ColorbarMode::None => Vec::new(),
        ColorbarMode::Single => vec![match case.location {
            ColorbarLocation::Bottom => g.bounds(LEFT + s, BOTTOM, w - LEFT - RIGHT - 2.0 * s, t),
            ColorbarLocation::Right => g.bounds(w - t - RIGHT, BOTTOM + s, t, h - TOP - BOTTOM - 2.0 * s),
            ColorbarLocation::Top => g.bounds(LEFT + s, h - t - TOP, w - LEFT - RIGHT - 2.0 * s, t),
            ColorbarLocation::Left => g.bounds(LEFT, BOTTOM + s, t, h - TOP - BOTTOM - 2.0 * s),
        }],
        ColorbarMode::Edge => {
            let tw = g.tile_width(LEFT, RIGHT);
            let th = g.tile_height(BOTTOM, TOP);
            let per_col = |y: f64| -> Vec<[f64; 4]> {
                (0..g.cols)
                    .map(|col| {
                        let x = LEFT + f64::from(col) * (H_PAD + tw) + s;
                        g.bounds(x, y, tw - 2.0 * s, t)
                    })
                    .collect()
            };
            let per_row = |x: f64| -> Vec<[f64; 4]> {
                (0..g.rows)
                    .rev()
                    .map(|row| {
                        let y = BOTTOM + f64::from(row) * (V_PAD + th) + s;
                        g.bounds(x, y, t, th - 2.0 * s)
                    })
                    .collect()
            };
            match case.location {
                ColorbarLocation::Bottom => per_col(BOTTOM),
                ColorbarLocation::Top => per_col(h - t - TOP),
                ColorbarLocation::Right => per_row(w - t - RIGHT),
                ColorbarLocation::Left => per_row(LEFT),
            }
        }
        ColorbarMode::Each => {
            let tw = g.tile_width(LEFT, RIGHT);
            let th = g.tile_height(BOTTOM, TOP);
            g.cells()
                .into_iter()
                .map(|(row, col)| {
                    let x = LEFT + f64::from(col) * (H_PAD + tw);
                    let y = BOTTOM + f64::from(row) * (V_PAD + th);
                    match case.location {
                        ColorbarLocation::Bottom => g.bounds(x + s, y, tw - 2.0 * s, t),
                        ColorbarLocation::Top => g.bounds(x + s, y + th - t, tw - 2.0 * s, t),
                        ColorbarLocation::Right => g.bounds(x + tw - t, y + s, t, th - 2.0 * s),
                        ColorbarLocation::Left => g.bounds(x, y + s, t, th - 2.0 * s),
                    }
                })
                .collect()
        }
    }
}

fn close(a: &[f64; 4], b: &[f64; 4]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
}

fn check_rects(label: &str, case: &Case, actual: &[Rect], expected: &[[f64; 4]], failures: &mut Vec<String>) {
    if actual.len() != expected.len() {
        failures.push(format!(
            "{case:?}: {} {label} rects, expected {}",
            actual.len(),
            expected.len()
        ));
        return;
    }
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if !close(&a.to_array(), e) {
            failures.push(format!("{case:?}: {label} {i} at {:?}, expected {e:?}", a.to_array()));
        }
    }
}

#[test]
fn parametric_positions() {
    let mut failures = vec![];
    for case in Case::all() {
        let layout = match case.facets().compute() {
            Ok(layout) => layout,
            Err(err) => {
                failures.push(format!("{case:?}: unexpected error {err}"));
                continue;
            }
        };
        let g = Geometry {
            width: layout.figure_width,
            height: layout.figure_height,
            rows: case.rows,
            cols: case.cols,
        };
        check_rects("panel", &case, &layout.panels, &expected_panels(&case, &g), &mut failures);
        check_rects("colorbar", &case, &layout.colorbars, &expected_colorbars(&case, &g), &mut failures);
    }
    assert!(
        failures.is_empty(),
        "{} position failures:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn parametric_size_and_aspect() {
    let mut failures = vec![];
    for case in Case::all() {
        let Ok(layout) = case.facets().compute() else {
            failures.push(format!("{case:?}: unexpected error"));
            continue;
        };
        let (fw, fh) = layout.figure_size();
        match case.size {
            SizeConstraint::WidthAspect { width, aspect } => {
                if (fw - width).abs() > 1e-9 || (layout.aspect() - aspect).abs() > 1e-9 {
                    failures.push(format!("{case:?}: width {fw}, aspect {}", layout.aspect()));
                }
            }
            SizeConstraint::HeightAspect { height, aspect } => {
                if (fh - height).abs() > 1e-9 || (layout.aspect() - aspect).abs() > 1e-9 {
                    failures.push(format!("{case:?}: height {fh}, aspect {}", layout.aspect()));
                }
            }
            SizeConstraint::WidthHeight { width, height } => {
                if (fw - width).abs() > 1e-9 || (fh - height).abs() > 1e-9 {
                    failures.push(format!("{case:?}: figure {fw}×{fh}"));
                }
            }
        }

        // Every panel has the solved size and the expected aspect in inches.
        for (i, panel) in layout.panels.iter().enumerate() {
            let inches = panel.in_inches(fw, fh);
            if (inches.width - layout.panel_width).abs() > 1e-9
                || (inches.height - layout.panel_height).abs() > 1e-9
            {
                failures.push(format!("{case:?}: panel {i} is {inches:?}"));
            }
        }
    }
    assert!(failures.is_empty(), "Size failures:\n{}", failures.join("\n"));
}

#[test]
fn parametric_containment_and_overlap() {
    let mut failures = vec![];
    for case in Case::all() {
        let Ok(layout) = case.facets().compute() else {
            failures.push(format!("{case:?}: unexpected error"));
            continue;
        };
        let all: Vec<&Rect> = layout.panels.iter().chain(&layout.colorbars).collect();
        for r in &all {
            if !r.is_within_unit() {
                failures.push(format!("{case:?}: {r:?} outside the figure"));
            }
        }
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                if a.overlaps(b) {
                    failures.push(format!("{case:?}: {a:?} overlaps {b:?}"));
                }
            }
        }
    }
    assert!(failures.is_empty(), "Overlap failures:\n{}", failures.join("\n"));
}

#[test]
fn parametric_colorbar_counts() {
    for case in Case::all() {
        let layout = case.facets().compute().unwrap();
        let cells = (case.rows * case.cols) as usize;
        let expected = match (case.mode, case.location.consumes_width()) {
            (ColorbarMode::None, _) => 0,
            (ColorbarMode::Single, _) => 1,
            (ColorbarMode::Edge, true) => case.rows as usize,
            (ColorbarMode::Edge, false) => case.cols as usize,
            (ColorbarMode::Each, _) => cells,
        };
        assert_eq!(layout.colorbars.len(), expected, "{case:?}");
        assert_eq!(layout.panels.len(), cells, "{case:?}");
    }
}

#[test]
fn edge_matches_single_on_degenerate_axis() {
    // A one-row grid with edge colorbars on the right has exactly one
    // colorbar, identical to the single-mode one.
    for size in CONSTRAINTS {
        let base = Case {
            mode: ColorbarMode::Edge,
            location: ColorbarLocation::Right,
            rows: 1,
            cols: 3,
            size,
        };
        let single = Case {
            mode: ColorbarMode::Single,
            ..base
        };
        let edge = base.facets().compute().unwrap();
        let single = single.facets().compute().unwrap();
        assert_eq!(edge.colorbars.len(), 1);
        assert!(close(&edge.colorbars[0].to_array(), &single.colorbars[0].to_array()));
        assert_eq!(edge.panels, single.panels);
    }
}

#[test]
fn budget_closes_for_each_colorbars() {
    let layout = Facets::new(3, 4)
        .width_aspect(10.0, 0.75)
        .internal_pad((0.2, 0.3))
        .colorbar(Colorbar::each(ColorbarLocation::Right).thickness(0.1).pad(0.05))
        .compute()
        .unwrap();
    let horizontal = 0.25 + 0.25 + 4.0 * layout.panel_width + 3.0 * 0.2 + 4.0 * 0.15;
    let vertical = 0.25 + 0.25 + 3.0 * layout.panel_height + 2.0 * 0.3;
    assert!((horizontal - layout.figure_width).abs() < 1e-9);
    assert!((vertical - layout.figure_height).abs() < 1e-9);
}
