//! SVG preview of a solved layout.
//!
//! Draws the figure to scale with every panel and colorbar as a labelled
//! rectangle, under a title giving the figure and panel size in inches.
//!
//! # Example
//!
//! ```
//! use facetgrid::{Colorbar, ColorbarLocation, Facets, svg::render_layout_svg};
//!
//! let layout = Facets::new(2, 3)
//!     .colorbar(Colorbar::edge(ColorbarLocation::Bottom))
//!     .compute()
//!     .unwrap();
//!
//! let svg = render_layout_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::constraint::{Layout, Rect};

/// Maximum pixel width of the drawn figure.
const MAX_FIGURE_W: f64 = 600.0;
/// Maximum pixel height of the drawn figure.
const MAX_FIGURE_H: f64 = 400.0;
/// Horizontal margin.
const MARGIN_X: f64 = 20.0;
/// Top margin above the title.
const MARGIN_TOP: f64 = 10.0;
/// Height of the title and annotation lines.
const LABEL_H: f64 = 22.0;
/// Bottom margin.
const MARGIN_BOTTOM: f64 = 20.0;

/// Render a complete SVG document previewing `layout`.
pub fn render_layout_svg(layout: &Layout) -> String {
    let scale = scale_to_fit(layout.figure_width, layout.figure_height);
    let fig_w = layout.figure_width * scale;
    let fig_h = layout.figure_height * scale;
    let total_w = fig_w.max(MAX_FIGURE_W / 2.0) + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + 2.0 * LABEL_H + fig_h + MARGIN_BOTTOM;
    let fig_x = (total_w - fig_w) / 2.0;
    let fig_y = MARGIN_TOP + 2.0 * LABEL_H;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .cell { font-size: 10px; fill: #1d3f5e; }
  .figure { fill: #f4f4f4; stroke: #999; stroke-width: 1; }
  .panel { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .colorbar { fill: #e7a44b; stroke: #b36f12; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .cell { fill: #dce9f5; }
    .figure { fill: #2d2d2d; stroke: #555; }
    .panel { fill: #3a72a4; stroke: #5a9fd4; }
    .colorbar { fill: #9a6420; stroke: #d08b35; }
  }
</style>
"##);

    let center_x = total_w / 2.0;
    let title = format!(
        "Figure  {:.3} × {:.3} in  ({}×{} grid)",
        layout.figure_width, layout.figure_height, layout.grid.rows, layout.grid.cols
    );
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&title)
    ));
    svg.push('\n');

    let annotation = format!(
        "panel {:.3} × {:.3} in, {} colorbar{}",
        layout.panel_width,
        layout.panel_height,
        layout.colorbars.len(),
        if layout.colorbars.len() == 1 { "" } else { "s" }
    );
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + LABEL_H + 12.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{fig_x:.1}" y="{fig_y:.1}" width="{fig_w:.1}" height="{fig_h:.1}" class="figure"/>"#
    ));
    svg.push('\n');

    let place = |r: &Rect| {
        // Figure-relative y runs upward; SVG y runs downward.
        (
            fig_x + r.left * fig_w,
            fig_y + (1.0 - r.top()) * fig_h,
            r.width * fig_w,
            r.height * fig_h,
        )
    };

    for (i, panel) in layout.panels.iter().enumerate() {
        let (x, y, w, h) = place(panel);
        let Some((row, col)) = layout.grid.position(i) else {
            continue;
        };
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="panel"><title>panel ({row}, {col})</title></rect>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="cell" text-anchor="middle">({row},{col})</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0
        ));
        svg.push('\n');
    }

    for (i, bar) in layout.colorbars.iter().enumerate() {
        let (x, y, w, h) = place(bar);
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="colorbar"><title>colorbar {i}</title></rect>"#
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Pixels per inch that fit the figure inside the maximum drawing area.
fn scale_to_fit(width: f64, height: f64) -> f64 {
    (MAX_FIGURE_W / width).min(MAX_FIGURE_H / height)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
