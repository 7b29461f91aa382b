//! ODE problem traits and types
//!
//! This module defines the core API for initial-value problems:
//! - `OdeProblem`: trait for all scalar first-order ODE problems
//! - `TaylorExpansion`: optional extension trait supplying hand-derived
//!   higher derivatives for Taylor-series integrators
//! - Reference problems with known closed-form solutions

mod reference;

pub use reference::{ExponentialDecay, XLogX};

// =================================================================================================
// ODE Problem Trait
// =================================================================================================

/// Trait for scalar first-order initial-value problems
///
/// # Responsibility
/// Evaluates the right-hand side of y' = f(x, y) at a given point.
/// Does NOT advance the solution (that's the integrator's job).
///
/// The problem provides the "equation", the integrator provides the
/// "method" used to march it forward.
///
/// # Stability
/// This trait is STABLE since v0.1.0 and will NEVER be modified.
/// Extensions use separate optional traits (see [`TaylorExpansion`]).
///
/// # Failure convention
/// `rhs` returns a plain `f64`. Domain violations inside the equation
/// (division by zero, logarithm of a non-positive value) surface as NaN
/// or infinity; integrators validate every step and abort with a
/// descriptive error naming the step. The problem itself performs no
/// input validation beyond what the arithmetic enforces.
pub trait OdeProblem: Send + Sync {
    /// Evaluate the right-hand side f(x, y) of y' = f(x, y)
    fn rhs(&self, x: f64, y: f64) -> f64;

    /// Name of the problem (used in result metadata and logging)
    fn name(&self) -> &str;

    /// Closed-form solution y(x), when one is known
    ///
    /// Used by the analysis layer to compute error records. Problems
    /// without an analytical solution return `None` (the default).
    fn exact(&self, _x: f64) -> Option<f64> {
        None
    }

    /// Hand-derived Taylor expansion of this problem, when supplied
    ///
    /// Taylor-series integrators of order k need the closed-form
    /// derivatives y'', …, y⁽ᵏ⁾ of the specific ODE. They are never
    /// produced by automatic differentiation; a problem opts in by
    /// implementing [`TaylorExpansion`] and overriding this hook:
    ///
    /// ```rust,ignore
    /// fn taylor(&self) -> Option<&dyn TaylorExpansion> {
    ///     Some(self)
    /// }
    /// ```
    fn taylor(&self) -> Option<&dyn TaylorExpansion> {
        None
    }

    /// Description of the problem (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Taylor Expansion Trait (optional extension)
// =================================================================================================

/// Hand-derived total derivatives of y along a specific ODE
///
/// For y' = f(x, y) the total derivatives y'', y''', y'''' are obtained by
/// differentiating f along the solution curve. They must be derived by hand
/// for each problem; there is no generic fallback.
///
/// All four orders are required — an integrator of order k reads only the
/// first k of them.
pub trait TaylorExpansion {
    /// y'(x, y) — identical to the problem's right-hand side
    fn dy(&self, x: f64, y: f64) -> f64;

    /// y''(x, y)
    fn d2y(&self, x: f64, y: f64) -> f64;

    /// y'''(x, y)
    fn d3y(&self, x: f64, y: f64) -> f64;

    /// y''''(x, y)
    fn d4y(&self, x: f64, y: f64) -> f64;
}
