// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison-line projection and label placement.
//!
//! Takes the sampled data-space points, projects them through the axis scales
//! into pixel space, builds the polyline path, and (when a label was asked
//! for) picks an anchor and rotation angle along the segment that is visible
//! inside the plot's inner bounds.
//!
//! The path is returned uncut; clipping it to the plot area is the renderer's
//! job (a clip region, not point filtering).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::{Brush, Color};

use crate::expr::{Expression, ParseError};
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::log::debug;
use crate::measure::{Size, TextMeasurer};
use crate::sample::{DEFAULT_SAMPLES, generate_comparison_points};
use crate::scale::{ScaleContinuous, ScaleSpec};

/// Stroke styling for a comparison line.
#[derive(Clone, Debug)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixel units.
    pub stroke_width: f64,
    /// Dash pattern in pixel units; empty means solid.
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: Vec::new(),
        }
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: impl IntoIterator<Item = f64>) -> Self {
        self.dash = dash.into_iter().collect();
        self
    }
}

impl Default for StrokeStyle {
    /// The classic comparison-line look: light gray, thin, short dashes.
    fn default() -> Self {
        Self::solid(Color::from_rgba8(204, 204, 204, 230), 1.0).with_dash([2.0, 2.0])
    }
}

/// A placed label: anchor position, rotation, and estimated extent.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    /// Anchor position in pixel units.
    pub pos: Point,
    /// Rotation angle in degrees, following the visible segment's direction.
    pub angle: f64,
    /// The label text.
    pub text: String,
    /// Estimated text extent at the configured font size.
    pub size: Size,
}

/// The projected comparison line: path geometry plus an optional label.
#[derive(Clone, Debug, Default)]
pub struct PlacedComparisonLine {
    /// Polyline through the projected points; empty when there are no points.
    pub path: BezPath,
    /// Label placement, when a label was requested and any point is visible.
    pub label: Option<PlacedLabel>,
}

/// Projects data-space points into a pixel-space polyline.
///
/// Straight segments only, no smoothing, so the comparison line stays
/// visually distinct from data series. Zero points produce an empty path.
pub fn project_path(
    points: &[Point],
    x_scale: &ScaleContinuous,
    y_scale: &ScaleContinuous,
) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.iter().enumerate() {
        let pt = (x_scale.map(p.x), y_scale.map(p.y));
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path
}

/// Places a label along the part of the line that is visible in `inner`.
///
/// The anchor is the middle element of the in-bounds point sequence (not the
/// geometric midpoint), and the angle follows the overall direction between
/// the first and last visible points. Returns `None` when nothing is visible.
pub fn place_label(
    points: &[Point],
    x_scale: &ScaleContinuous,
    y_scale: &ScaleContinuous,
    inner: Rect,
    text: &str,
    font_size: f64,
    measurer: &dyn TextMeasurer,
) -> Option<PlacedLabel> {
    let visible: Vec<Point> = points
        .iter()
        .map(|p| Point::new(x_scale.map(p.x), y_scale.map(p.y)))
        .filter(|p| inner.contains(*p))
        .collect();
    debug!(visible = visible.len(), total = points.len(), "placing label");
    if visible.is_empty() {
        return None;
    }

    let anchor = visible[visible.len() / 2];
    let first = visible[0];
    let last = visible[visible.len() - 1];
    // With a single visible point first == last and the angle degenerates to 0.
    let angle = (last.y - first.y).atan2(last.x - first.x).to_degrees();
    Some(PlacedLabel {
        pos: anchor,
        angle,
        text: String::from(text),
        size: measurer.measure(text, font_size),
    })
}

/// Projects the line and places its label in one pass.
///
/// `label` is ignored when empty; a requested label is still omitted when no
/// projected point falls inside `inner` (the line itself is unaffected).
pub fn place(
    points: &[Point],
    x_scale: &ScaleContinuous,
    y_scale: &ScaleContinuous,
    inner: Rect,
    label: Option<&str>,
    font_size: f64,
    measurer: &dyn TextMeasurer,
) -> PlacedComparisonLine {
    let path = project_path(points, x_scale, y_scale);
    let label = label
        .filter(|text| !text.is_empty() && !points.is_empty())
        .and_then(|text| place_label(points, x_scale, y_scale, inner, text, font_size, measurer));
    PlacedComparisonLine { path, label }
}

/// Editor-facing configuration for one comparison line.
///
/// This is re-evaluated on every render; recomputation is idempotent for
/// identical inputs. Compile it once per edit with
/// [`ComparisonLineSpec::compile`] so malformed expressions surface exactly
/// once, not per sample.
#[derive(Clone, Debug, Default)]
pub struct ComparisonLineSpec {
    /// The `y = f(x)` expression; absent or blank means "no line".
    pub expression: Option<String>,
    /// Optional label drawn along the visible segment.
    pub label: Option<String>,
    /// Stroke styling for the renderer.
    pub stroke: StrokeStyle,
    /// Label font size in pixel units (0 picks the default of 12).
    pub font_size: f64,
    /// Sample count across the x-domain (0 picks [`DEFAULT_SAMPLES`]).
    pub samples: usize,
}

impl ComparisonLineSpec {
    /// Creates an empty spec (draws nothing until an expression is set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `y = f(x)` expression.
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the sample count.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Validates the expression and returns the compiled line.
    ///
    /// This is the only place a [`ParseError`] can surface; everything after
    /// compilation degrades to "nothing drawn" or "no label" instead of
    /// failing.
    pub fn compile(&self) -> Result<ComparisonLine, ParseError> {
        let expr = match self.expression.as_deref() {
            None => None,
            Some(text) if text.trim().is_empty() => None,
            Some(text) => Some(Expression::parse(text)?),
        };
        Ok(ComparisonLine {
            expr,
            label: self.label.clone(),
            stroke: self.stroke.clone(),
            font_size: if self.font_size > 0.0 {
                self.font_size
            } else {
                12.0
            },
            samples: if self.samples > 0 {
                self.samples
            } else {
                DEFAULT_SAMPLES
            },
        })
    }
}

/// A compiled comparison line, ready to be placed against axes and bounds.
#[derive(Clone, Debug)]
pub struct ComparisonLine {
    expr: Option<Expression>,
    label: Option<String>,
    stroke: StrokeStyle,
    font_size: f64,
    samples: usize,
}

impl ComparisonLine {
    /// Samples the line across the axis domains, in data units.
    pub fn points(&self, x: &ScaleSpec, y: &ScaleSpec) -> Vec<Point> {
        match &self.expr {
            Some(expr) => generate_comparison_points(expr, x, y, self.samples),
            None => Vec::new(),
        }
    }

    /// Samples, projects, and places the line within `inner`.
    ///
    /// The axis pixel ranges span `inner`, with the y range inverted because
    /// screen y grows downward.
    pub fn place(
        &self,
        x: &ScaleSpec,
        y: &ScaleSpec,
        inner: Rect,
        measurer: &dyn TextMeasurer,
    ) -> PlacedComparisonLine {
        let x_scale = x.instantiate((inner.x0, inner.x1));
        let y_scale = y.instantiate((inner.y1, inner.y0));
        let points = self.points(x, y);
        place(
            &points,
            &x_scale,
            &y_scale,
            inner,
            self.label.as_deref(),
            self.font_size,
            measurer,
        )
    }

    /// Stroke styling for the renderer.
    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// Label font size in pixel units.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}
