// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison-line demos for `refline`.
//!
//! Renders a handful of charts with comparison lines into a single HTML
//! report. Run with `RUST_LOG=refline=debug` to watch the sampler and placer
//! at work.

mod svg;

use kurbo::{Point, Rect};
use refline::{ComparisonLine, ComparisonLineSpec, ScaleSpec};
use tracing_subscriber::EnvFilter;

use crate::svg::ChartConfig;

const VIEW: Rect = Rect::new(0.0, 0.0, 420.0, 300.0);
const INNER: Rect = Rect::new(40.0, 30.0, 400.0, 270.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sections = vec![
        linear_demo(),
        log_x_demo(),
        discontinuity_demo(),
    ];

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>refline demo</title></head><body>\n");
    for (title, svg) in &sections {
        html.push_str(&format!("<h2>{title}</h2>\n{svg}\n"));
    }
    html.push_str("</body></html>\n");

    let out = "refline_demo.html";
    std::fs::write(out, html).expect("write demo report");
    println!("wrote {out}");
}

fn compile(spec: ComparisonLineSpec) -> ComparisonLine {
    spec.compile().expect("demo expressions are well-formed")
}

/// `y = 2x + 1` over plain linear axes, labeled.
fn linear_demo() -> (String, String) {
    let x = ScaleSpec::linear((0.0, 10.0));
    let y = ScaleSpec::linear((0.0, 30.0));
    let series: Vec<Point> = (0..=40)
        .map(|i| {
            let sx = f64::from(i) * 0.25;
            Point::new(sx, 0.3 * sx * sx)
        })
        .collect();
    let lines = [
        compile(
            ComparisonLineSpec::new()
                .with_expression("2*x+1")
                .with_label("double"),
        ),
        compile(ComparisonLineSpec::new().with_expression("x").with_label("y=x")),
    ];
    let cfg = ChartConfig {
        title: "Linear axes",
        view: VIEW,
        inner: INNER,
        x,
        y,
        series: &series,
        lines: &lines,
    };
    ("Linear axes".into(), svg::render_chart(1, &cfg))
}

/// `y = log(x)` over a log x axis; sampling is even in `ln x`.
fn log_x_demo() -> (String, String) {
    let x = ScaleSpec::log((1.0, 100.0));
    let y = ScaleSpec::linear((-5.0, 5.0));
    let series: Vec<Point> = (0..=40)
        .map(|i| {
            let sx = 10.0_f64.powf(f64::from(i) * 0.05);
            Point::new(sx, sx.ln() - 1.0 + 0.5 * (sx / 20.0).sin())
        })
        .collect();
    let lines = [compile(
        ComparisonLineSpec::new()
            .with_expression("log(x)")
            .with_label("ln x"),
    )];
    let cfg = ChartConfig {
        title: "Log x axis",
        view: VIEW,
        inner: INNER,
        x,
        y,
        series: &series,
        lines: &lines,
    };
    ("Log x axis".into(), svg::render_chart(2, &cfg))
}

/// `y = 1/x` across a sign change: the sample at x = 0 is dropped, the rest
/// of the line survives.
fn discontinuity_demo() -> (String, String) {
    let x = ScaleSpec::linear((-5.0, 5.0));
    let y = ScaleSpec::linear((-10.0, 10.0));
    let lines = [compile(
        ComparisonLineSpec::new()
            .with_expression("1/x")
            .with_label("1/x")
            .with_samples(101),
    )];
    let cfg = ChartConfig {
        title: "Discontinuity",
        view: VIEW,
        inner: INNER,
        x,
        y,
        series: &[],
        lines: &lines,
    };
    ("Discontinuity".into(), svg::render_chart(3, &cfg))
}
