// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end placement scenarios: spec -> compile -> sample -> place.

extern crate std;

use alloc::vec::Vec;

use kurbo::{PathEl, Point, Rect};

use crate::measure::HeuristicTextMeasurer;
use crate::{ComparisonLineSpec, ScaleSpec};

fn path_points(els: &[PathEl]) -> Vec<Point> {
    els.iter()
        .map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => *p,
            other => panic!("comparison lines only use straight segments, got {other:?}"),
        })
        .collect()
}

fn assert_point_close(a: Point, b: Point) {
    let eps = 1e-9;
    assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
    assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
}

#[test]
fn linear_line_with_label_end_to_end() {
    let inner = Rect::new(0.0, 0.0, 100.0, 100.0);
    let x = ScaleSpec::linear((0.0, 10.0));
    let y = ScaleSpec::linear((0.0, 30.0));
    let line = ComparisonLineSpec::new()
        .with_expression("2*x+1")
        .with_label("double")
        .with_samples(101)
        .compile()
        .unwrap();
    let out = line.place(&x, &y, inner, &HeuristicTextMeasurer);

    let pts = path_points(out.path.elements());
    assert_eq!(pts.len(), 101);
    // Path passes through the pixel projections of (0, 1) and (10, 21).
    // x maps [0, 10] -> [0, 100]; y maps [0, 30] -> [100, 0] (inverted).
    assert_point_close(pts[0], Point::new(0.0, 100.0 - 1.0 / 30.0 * 100.0));
    assert_point_close(pts[100], Point::new(100.0, 100.0 - 21.0 / 30.0 * 100.0));

    let label = out.label.expect("all samples are visible, label expected");
    assert_eq!(label.text, "double");
    // The whole path is one straight segment, so the angle matches the
    // projection of the domain endpoints no matter which points survive the
    // in-bounds filter.
    let expected = f64::atan2(
        (100.0 - 21.0 / 30.0 * 100.0) - (100.0 - 1.0 / 30.0 * 100.0),
        100.0 - 0.0,
    )
    .to_degrees();
    assert!((label.angle - expected).abs() < 1e-9);
    // The anchor is the middle visible point: the sample at x = 5. Only the
    // points on the bounds edges are candidates for filtering, so the middle
    // index lands on the same sample regardless of edge treatment.
    assert_point_close(label.pos, Point::new(50.0, 100.0 - 11.0 / 30.0 * 100.0));
}

#[test]
fn log_axis_line_end_to_end() {
    let inner = Rect::new(0.0, 0.0, 200.0, 100.0);
    let x = ScaleSpec::log((1.0, 100.0));
    let y = ScaleSpec::linear((-5.0, 5.0));
    let line = ComparisonLineSpec::new()
        .with_expression("log(x)")
        .compile()
        .unwrap();

    let points = line.points(&x, &y);
    assert_eq!(points.len(), crate::DEFAULT_SAMPLES);
    let step = points[1].x.ln() - points[0].x.ln();
    for pair in points.windows(2) {
        assert!(pair[0].x > 0.0);
        let d = pair[1].x.ln() - pair[0].x.ln();
        assert!((d - step).abs() < 1e-9, "log-x sampling must be even in ln x");
    }

    let out = line.place(&x, &y, inner, &HeuristicTextMeasurer);
    assert_eq!(path_points(out.path.elements()).len(), points.len());
    assert!(out.label.is_none(), "no label requested");
}

#[test]
fn discontinuity_drops_only_the_undefined_sample() {
    let x = ScaleSpec::linear((-5.0, 5.0));
    let y = ScaleSpec::linear((-1000.0, 1000.0));
    let line = ComparisonLineSpec::new()
        .with_expression("1/x")
        .with_samples(101)
        .compile()
        .unwrap();
    let points = line.points(&x, &y);
    // The sample at x = 0 is undefined; its neighbours survive.
    assert_eq!(points.len(), 100);
    assert!(points.iter().any(|p| (p.x - 0.1).abs() < 1e-9));
    assert!(points.iter().any(|p| (p.x + 0.1).abs() < 1e-9));
}

#[test]
fn empty_config_is_a_no_op_for_any_axes() {
    let inner = Rect::new(10.0, 10.0, 250.0, 150.0);
    let line = ComparisonLineSpec::new().compile().unwrap();
    for (x, y) in [
        (ScaleSpec::linear((0.0, 1.0)), ScaleSpec::linear((0.0, 1.0))),
        (ScaleSpec::log((1.0, 10.0)), ScaleSpec::log((1.0, 10.0))),
    ] {
        let out = line.place(&x, &y, inner, &HeuristicTextMeasurer);
        assert!(out.path.elements().is_empty());
        assert!(out.label.is_none());
    }
}

#[test]
fn recomputation_is_idempotent() {
    let inner = Rect::new(0.0, 0.0, 100.0, 100.0);
    let x = ScaleSpec::linear((0.0, 10.0));
    let y = ScaleSpec::linear((0.0, 30.0));
    let line = ComparisonLineSpec::new()
        .with_expression("x^2/3")
        .with_label("quadratic")
        .compile()
        .unwrap();
    let a = line.place(&x, &y, inner, &HeuristicTextMeasurer);
    let b = line.place(&x, &y, inner, &HeuristicTextMeasurer);
    assert_eq!(path_points(a.path.elements()), path_points(b.path.elements()));
    assert_eq!(a.label, b.label);
}
