//! One-compartment pharmacokinetic model
//!
//! # Mathematical Background
//!
//! The compartment balance
//!
//! ```text
//! V·dC/dt = u(t) − Q·C(t)
//! ```
//!
//! rearranges to the first-order linear ODE dC/dt = (u(t) − Q·C)/V, which
//! the fixed-step integrators march directly. The exact solution follows
//! from the integrating factor e^(k·t) with k = Q/V:
//!
//! ```text
//! C(t) = e^(−k·t) · ( C₀ + ∫₀ᵗ u(s)/V · e^(k·s) ds )
//! ```
//!
//! The integral is evaluated with the composite trapezoid rule on the
//! simulation grid, accumulated incrementally across steps.

use crate::pharmacokinetics::DosingRegimen;
use crate::problem::OdeProblem;

/// One-compartment model: volume, clearance and a dosing schedule
#[derive(Debug, Clone, Copy)]
pub struct OneCompartmentModel {
    /// Effective plasma volume V (L)
    pub volume: f64,

    /// Metabolic elimination rate Q (L/h)
    pub clearance: f64,

    /// Administration schedule driving u(t)
    pub regimen: DosingRegimen,
}

impl OneCompartmentModel {
    /// Elimination constant k = Q/V (1/h)
    pub fn elimination_constant(&self) -> f64 {
        self.clearance / self.volume
    }

    /// Exact concentration series on a uniform time grid
    ///
    /// Integrating-factor solution with the convolution integral
    /// accumulated by the trapezoid rule over the grid itself, so the
    /// reference series lives on exactly the points the numerical methods
    /// visit.
    pub fn exact_solution(&self, times: &[f64], c0: f64) -> Vec<f64> {
        if times.is_empty() {
            return Vec::new();
        }

        let k = self.elimination_constant();
        let g = |s: f64| self.regimen.input_rate(s) / self.volume * (k * s).exp();

        let mut series = Vec::with_capacity(times.len());
        series.push(c0);

        let mut integral = 0.0;
        for i in 1..times.len() {
            let dt = times[i] - times[i - 1];
            integral += 0.5 * dt * (g(times[i - 1]) + g(times[i]));
            series.push((-k * times[i]).exp() * (c0 + integral));
        }

        series
    }
}

impl OdeProblem for OneCompartmentModel {
    fn rhs(&self, t: f64, c: f64) -> f64 {
        (self.regimen.input_rate(t) - self.clearance * c) / self.volume
    }

    fn name(&self) -> &str {
        "One-compartment pharmacokinetics"
    }

    fn description(&self) -> Option<&str> {
        Some("V·dC/dt = u(t) − Q·C(t) with route-dependent administration rate u")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
