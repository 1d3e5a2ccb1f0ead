// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison-line overlays for charts.
//!
//! A *comparison line* is a user-supplied reference curve (`y = f(x)`, e.g.
//! `"2*x+1"` or `"log(x)"`) drawn over a data chart. This crate implements the
//! placement core as plain, pure functions:
//! - **Scales** map data values into screen coordinates (linear or log).
//! - **Expressions** are parsed once and evaluated per sample; domain
//!   violations drop samples instead of failing the line.
//! - **Sampling** traces the curve across the visible x-domain, spacing
//!   samples evenly in `x` or in `ln x` depending on the scale kind.
//! - **Placement** projects the samples into a path and picks a label anchor
//!   and rotation angle along the visible segment.
//!
//! Rendering (stroking the path, applying the clip region, drawing the label)
//! is downstream; the returned path is never cut to the plot bounds here.
//! Everything is recomputed fresh per call, so callers can re-invoke on every
//! input change with no state to invalidate.

#![no_std]

extern crate alloc;

mod comparison_line;
#[cfg(test)]
mod comparison_tests;
mod expr;
#[cfg(not(feature = "std"))]
mod float;
mod log;
mod measure;
mod sample;
mod scale;

pub use comparison_line::{
    ComparisonLine, ComparisonLineSpec, PlacedComparisonLine, PlacedLabel, StrokeStyle, place,
    place_label, project_path,
};
pub use expr::{Expression, ParseError};
pub use measure::{HeuristicTextMeasurer, Size, TextMeasurer};
pub use sample::{DEFAULT_SAMPLES, generate_comparison_points};
pub use scale::{
    ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleLog, ScaleLogSpec, ScaleSpec,
};
