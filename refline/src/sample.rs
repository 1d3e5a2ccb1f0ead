// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison-line sampling.
//!
//! Traces `y = f(x)` across the visible x-domain as an ordered sequence of
//! data-space points. Sample positions adapt to the x scale kind: even in `x`
//! for linear axes, even in `ln x` for log axes so curvature near the low end
//! of the domain is resolved. Work is bounded by the sample count regardless
//! of how wide the domain is.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::expr::Expression;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::log::{debug, warn};
use crate::scale::ScaleSpec;

/// Default number of sample positions across the x-domain.
///
/// Enough for a visually smooth polyline at chart sizes; the comparison line
/// is drawn with straight segments, so extra density buys nothing.
pub const DEFAULT_SAMPLES: usize = 120;

/// Samples `expr` across the x-domain, in data units.
///
/// Points whose `y` is undefined, non-finite, outside the y-domain, or
/// non-positive under a log y scale are dropped; neighbouring samples are
/// unaffected. The output is ordered by increasing `x` and is recomputed
/// fresh on every call.
pub fn generate_comparison_points(
    expr: &Expression,
    x: &ScaleSpec,
    y: &ScaleSpec,
    samples: usize,
) -> Vec<Point> {
    if samples == 0 {
        return Vec::new();
    }
    let (x0, x1) = x.domain();
    let (y0, y1) = y.domain();
    if x.is_log() && x0 <= 0.0 {
        // Inadmissible log domain; excluded rather than clamped.
        warn!(x0, x1, "non-positive domain on a log x scale, skipping line");
        return Vec::new();
    }

    let mut points = Vec::with_capacity(samples);
    let last = (samples - 1).max(1) as f64;
    for i in 0..samples {
        let t = i as f64 / last;
        let sx = if x.is_log() {
            let l0 = x0.ln();
            let l1 = x1.ln();
            (l0 + t * (l1 - l0)).exp()
        } else {
            x0 + t * (x1 - x0)
        };
        let Some(sy) = expr.eval(sx) else {
            continue;
        };
        if sy < y0.min(y1) || sy > y0.max(y1) {
            continue;
        }
        if y.is_log() && sy <= 0.0 {
            continue;
        }
        points.push(Point::new(sx, sy));
    }
    debug!(
        kept = points.len(),
        samples, "sampled comparison-line points"
    );
    points
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_samples_lie_on_the_line() {
        let expr = Expression::parse("2*x+1").unwrap();
        let x = ScaleSpec::linear((0.0, 10.0));
        let y = ScaleSpec::linear((0.0, 30.0));
        let points = generate_comparison_points(&expr, &x, &y, 101);
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], Point::new(0.0, 1.0));
        for p in &points {
            assert!((p.y - (2.0 * p.x + 1.0)).abs() < 1e-9);
        }
        let last = points.last().unwrap();
        assert!((last.x - 10.0).abs() < 1e-9);
        assert!((last.y - 21.0).abs() < 1e-9);
    }

    #[test]
    fn log_x_samples_are_even_in_log_space() {
        let expr = Expression::parse("log(x)").unwrap();
        let x = ScaleSpec::log((1.0, 100.0));
        let y = ScaleSpec::linear((-5.0, 5.0));
        let points = generate_comparison_points(&expr, &x, &y, 100);
        assert_eq!(points.len(), 100);
        let step = points[1].x.ln() - points[0].x.ln();
        for pair in points.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert!(pair[0].x > 0.0);
            let d = pair[1].x.ln() - pair[0].x.ln();
            assert!((d - step).abs() < 1e-9);
        }
        // Denser near the low end than even-in-x sampling would be.
        let linear_step = (100.0 - 1.0) / 99.0;
        assert!(points[1].x - points[0].x < linear_step);
    }

    #[test]
    fn undefined_samples_are_dropped_individually() {
        let expr = Expression::parse("1/x").unwrap();
        let x = ScaleSpec::linear((-5.0, 5.0));
        let y = ScaleSpec::linear((-1000.0, 1000.0));
        // 101 even samples over [-5, 5] hit x = 0 exactly.
        let points = generate_comparison_points(&expr, &x, &y, 101);
        assert_eq!(points.len(), 100);
        assert!(points.iter().all(|p| p.x != 0.0));
        for pair in points.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn out_of_domain_y_values_are_dropped() {
        let expr = Expression::parse("x").unwrap();
        let x = ScaleSpec::linear((0.0, 10.0));
        let y = ScaleSpec::linear((0.0, 5.0));
        let points = generate_comparison_points(&expr, &x, &y, 11);
        assert_eq!(points.len(), 6); // y in 0..=5
        assert!(points.iter().all(|p| p.y <= 5.0));
    }

    #[test]
    fn log_y_scale_drops_non_positive_values() {
        let expr = Expression::parse("x").unwrap();
        let x = ScaleSpec::linear((-5.0, 5.0));
        let y = ScaleSpec::log((1e-6, 10.0));
        let points = generate_comparison_points(&expr, &x, &y, 101);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.y > 0.0));
    }

    #[test]
    fn zero_samples_yield_no_points() {
        let expr = Expression::parse("x").unwrap();
        let x = ScaleSpec::linear((0.0, 1.0));
        let y = ScaleSpec::linear((0.0, 1.0));
        assert!(generate_comparison_points(&expr, &x, &y, 0).is_empty());
    }
}
