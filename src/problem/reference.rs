//! Reference problems with known closed-form solutions
//!
//! These problems anchor the accuracy tests and benchmarks: each one carries
//! an analytical solution, so the deviation of any numerical trajectory can
//! be measured exactly.

use crate::problem::{OdeProblem, TaylorExpansion};

// =================================================================================================
// y' = 1 + y/x
// =================================================================================================

/// The reference problem y' = 1 + y/x
///
/// With the initial condition y(1) = 0 the exact solution is y = x·ln(x).
///
/// # Well-posedness
///
/// ∂f/∂y = 1/x is continuous and bounded on any interval [a, b] with a > 0,
/// so f is Lipschitz in y with constant K = 1/a. On [1, 5] that gives K = 1:
/// perturbing the initial condition by ε changes the solution by at most
/// e^{K(b−a)}·ε.
///
/// # Taylor derivatives
///
/// Along the solution curve (substituting y' back in):
///
/// ```text
/// y'    = 1 + y/x
/// y''   = 1/x
/// y'''  = -1/x²
/// y'''' = 2/x³
/// ```
///
/// The higher derivatives happen to depend on x only — a property of this
/// particular equation, not of the trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct XLogX;

impl OdeProblem for XLogX {
    fn rhs(&self, x: f64, y: f64) -> f64 {
        1.0 + y / x
    }

    fn name(&self) -> &str {
        "y' = 1 + y/x"
    }

    fn exact(&self, x: f64) -> Option<f64> {
        Some(x * x.ln())
    }

    fn taylor(&self) -> Option<&dyn TaylorExpansion> {
        Some(self)
    }

    fn description(&self) -> Option<&str> {
        Some("Linear ODE with exact solution y = x·ln(x) for y(1) = 0")
    }
}

impl TaylorExpansion for XLogX {
    fn dy(&self, x: f64, y: f64) -> f64 {
        1.0 + y / x
    }

    fn d2y(&self, x: f64, _y: f64) -> f64 {
        1.0 / x
    }

    fn d3y(&self, x: f64, _y: f64) -> f64 {
        -1.0 / (x * x)
    }

    fn d4y(&self, x: f64, _y: f64) -> f64 {
        2.0 / (x * x * x)
    }
}

// =================================================================================================
// y' = -k·y
// =================================================================================================

/// Exponential decay y' = -k·y
///
/// Analytical solution: y(x) = y₀·e^(−k·x) for y(0) = y₀. Stores the initial
/// value so that `exact` is self-contained.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialDecay {
    /// Decay rate k in y' = -k·y
    pub rate: f64,

    /// Initial value y(0)
    pub initial: f64,
}

impl ExponentialDecay {
    /// Create a decay problem with initial value y(0) = 1
    pub fn new(rate: f64) -> Self {
        Self { rate, initial: 1.0 }
    }
}

impl OdeProblem for ExponentialDecay {
    fn rhs(&self, _x: f64, y: f64) -> f64 {
        -self.rate * y
    }

    fn name(&self) -> &str {
        "Exponential decay"
    }

    fn exact(&self, x: f64) -> Option<f64> {
        Some(self.initial * (-self.rate * x).exp())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
