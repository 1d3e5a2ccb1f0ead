// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! These types provide the coordinate mapping behavior the placement core
//! needs: a *spec* describes an axis (domain + kind, no pixel range yet), and
//! instantiating it against a range produces the concrete forward transform.
//!
//! Invariants are owned by the chart layout that supplies the descriptors:
//! `domain.0 < domain.1`, and log domains strictly positive. Inadmissible
//! inputs map to the range start rather than panicking; the sampler excludes
//! them before projection.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous log scale.
    Log(ScaleLogSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLogSpec> for ScaleSpec {
    fn from(value: ScaleLogSpec) -> Self {
        Self::Log(value)
    }
}

impl ScaleSpec {
    /// Shorthand for a linear spec over `domain`.
    pub fn linear(domain: (f64, f64)) -> Self {
        Self::Linear(ScaleLinearSpec::new(domain))
    }

    /// Shorthand for a base-10 log spec over `domain`.
    pub fn log(domain: (f64, f64)) -> Self {
        Self::Log(ScaleLogSpec::new(domain))
    }

    /// Returns the configured domain (as authored).
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.domain,
            Self::Log(s) => s.domain,
        }
    }

    /// Returns true for log scales.
    pub fn is_log(&self) -> bool {
        matches!(self, Self::Log(_))
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleContinuous {
        match self {
            Self::Linear(s) => ScaleContinuous::Linear(s.instantiate(range)),
            Self::Log(s) => ScaleContinuous::Log(s.instantiate(range)),
        }
    }
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_min(),
            Self::Log(s) => s.domain_min(),
        }
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_max(),
            Self::Log(s) => s.domain_max(),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

/// Specification for a log scale (domain + base, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLogSpec {
    /// Domain in data units (must be positive).
    pub domain: (f64, f64),
    /// Log base (default 10).
    pub base: f64,
}

impl ScaleLog {
    /// Creates a new log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Values at or below zero are not representable on a log scale and map
    /// to the range start; callers filter them out beforehand.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleLogSpec {
    /// Creates a new log scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain, base: 10.0 }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLog {
        ScaleLog::new(self.domain, range).with_base(self.base)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        assert!((s.map(0.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 100.0).abs() < 1e-9);
        assert!((s.map(5.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn linear_scale_supports_inverted_ranges() {
        // Screen y grows downward, so y axes typically invert the range.
        let s = ScaleLinear::new((0.0, 30.0), (100.0, 0.0));
        assert!((s.map(0.0) - 100.0).abs() < 1e-9);
        assert!((s.map(30.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 5.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_rejects_non_positive_values() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(-5.0), 0.0);
    }

    #[test]
    fn spec_instantiation_matches_direct_construction() {
        let spec = ScaleSpec::log((1.0, 1000.0));
        let s = spec.instantiate((0.0, 300.0));
        assert!((s.map(10.0) - 100.0).abs() < 1e-9);
        assert!(spec.is_log());
        assert_eq!(spec.domain(), (1.0, 1000.0));
    }
}
