// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for label placement.
//!
//! The placed label reports an estimated extent so the renderer can reserve
//! room (or decline to draw) before any text shaping has happened. Shaping and
//! layout live downstream; callers with a real text backend can plug it in
//! here, everyone else gets [`HeuristicTextMeasurer`].

/// A width/height pair in the same coordinate system as the placed marks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixel units.
    pub width: f64,
    /// Height in pixel units.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A minimal text measurement interface used by label placement.
pub trait TextMeasurer {
    /// Returns the estimated extent of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        Size::new(0.6 * font_size * text.chars().count() as f64, font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let m = HeuristicTextMeasurer;
        let short = m.measure("y=x", 12.0);
        let long = m.measure("double the baseline", 12.0);
        assert!(long.width > short.width);
        assert_eq!(short.height, 12.0);
    }
}
