// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `refline_demo`.
//!
//! The comparison-line core returns the full projected path uncut; applying
//! the clip region is the renderer's job, so each chart scopes a `clipPath`
//! to the plot's inner bounds and clips line and label against it.

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use refline::{ComparisonLine, HeuristicTextMeasurer, ScaleSpec};

/// One chart in the demo report.
pub(crate) struct ChartConfig<'a> {
    pub(crate) title: &'a str,
    /// Full chart viewport, including margins.
    pub(crate) view: Rect,
    /// Plot area / clip region.
    pub(crate) inner: Rect,
    pub(crate) x: ScaleSpec,
    pub(crate) y: ScaleSpec,
    /// A data series in data units, drawn for visual comparison.
    pub(crate) series: &'a [Point],
    pub(crate) lines: &'a [ComparisonLine],
}

pub(crate) fn render_chart(uid: usize, cfg: &ChartConfig<'_>) -> String {
    let view = cfg.view;
    let inner = cfg.inner;
    let x_scale = cfg.x.instantiate((inner.x0, inner.x1));
    let y_scale = cfg.y.instantiate((inner.y1, inner.y0));

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));
    out.push('\n');

    // Clip region scoped per chart, like the uid-suffixed ids the interactive
    // renderer generates.
    out.push_str(&format!(
        r#"<defs><clipPath id="plot-{uid}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        inner.x0,
        inner.y0,
        inner.width(),
        inner.height()
    ));
    out.push('\n');

    out.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="white" stroke="#999" stroke-width="1"/>"##,
        inner.x0,
        inner.y0,
        inner.width(),
        inner.height()
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"<text x="{}" y="{}" font-size="14" text-anchor="middle" fill="#333">{}</text>"##,
        inner.center().x,
        view.y0 + 18.0,
        escape_xml(cfg.title)
    ));
    out.push('\n');

    if !cfg.series.is_empty() {
        let mut path = BezPath::new();
        for (i, p) in cfg.series.iter().enumerate() {
            let pt = (x_scale.map(p.x), y_scale.map(p.y));
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        out.push_str(&format!(
            r##"<path d="{}" fill="none" stroke="#3578b8" stroke-width="1.5" clip-path="url(#plot-{uid})"/>"##,
            path.to_svg()
        ));
        out.push('\n');
    }

    for line in cfg.lines {
        let placed = line.place(&cfg.x, &cfg.y, inner, &HeuristicTextMeasurer);
        if placed.path.elements().is_empty() {
            continue;
        }
        let stroke = line.stroke();
        out.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}""#,
            placed.path.to_svg(),
            css_color(&stroke.brush),
            stroke.stroke_width
        ));
        if !stroke.dash.is_empty() {
            let dash: Vec<String> = stroke.dash.iter().map(|d| format!("{d}")).collect();
            out.push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(" ")));
        }
        out.push_str(&format!(r#" clip-path="url(#plot-{uid})"/>"#));
        out.push('\n');

        if let Some(label) = placed.label {
            out.push_str(&format!(
                r##"<text x="{}" y="{}" font-size="{}" text-anchor="middle" fill="#999" transform="rotate({} {} {})" clip-path="url(#plot-{uid})">{}</text>"##,
                label.pos.x,
                label.pos.y - 4.0,
                line.font_size(),
                label.angle,
                label.pos.x,
                label.pos.y,
                escape_xml(&label.text)
            ));
            out.push('\n');
        }
    }

    out.push_str("</svg>\n");
    out
}

fn css_color(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => {
            let c = color.to_rgba8();
            format!("rgba({},{},{},{:.3})", c.r, c.g, c.b, f64::from(c.a) / 255.0)
        }
        _ => String::from("black"),
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
