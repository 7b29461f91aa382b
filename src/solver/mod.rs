//! Fixed-step numerical integrators
//!
//! This module provides traits and implementations for fixed-step ODE
//! integration. An integrator applies a numerical scheme to advance the
//! initial-value problem defined by an [`Ivp`] across the grid described
//! by an [`IntegrationConfig`].
//!
//! # Core Concepts
//!
//! The architecture separates concerns into three layers:
//!
//! 1. **Ivp** — WHAT to solve: the ODE problem plus its initial condition.
//!
//! 2. **IntegrationConfig** — HOW to discretize: span and step count,
//!    from which the fixed step h is derived.
//!
//! 3. **StepIntegrator** — the numerical method itself, independent of
//!    any particular equation.
//!
//! This separation allows:
//! - The same integrator for different problems
//! - Different integrators for the same IVP (method comparison)
//! - Flexible configuration without code changes
//!
//! # Available Methods
//!
//! | Method | Order | Evaluations/step |
//! |--------|-------|------------------|
//! | [`EulerIntegrator`] | 1 | 1 |
//! | [`TaylorIntegrator`] (k ∈ {2,3,4}) | k | k derivative evaluations |
//! | [`MidpointIntegrator`] (RK2) | 2 | 2 |
//! | [`ModifiedEulerIntegrator`] | 2 | 2 |
//! | [`HeunThreeStageIntegrator`] | 3 | 3 |
//! | [`Rk4Integrator`] | 4 | 4 |
//!
//! # Error Handling
//!
//! All integrators return `Result<Trajectory, String>`. Common errors:
//! - Invalid configuration (non-positive span, zero steps)
//! - Invalid initial condition (non-finite x₀ or y₀)
//! - Numerical instability (NaN or infinity at some step)
//! - Missing prerequisites (Taylor derivatives not supplied)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod ivp;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{IntegrationConfig, StepIntegrator, Trajectory};

pub use ivp::Ivp;

pub use methods::{
    EulerIntegrator, HeunThreeStageIntegrator, MidpointIntegrator, ModifiedEulerIntegrator,
    Rk4Integrator, TaylorIntegrator,
};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate an ordinate value for numerical issues
///
/// Checks that a freshly computed value is neither NaN nor infinite. NaN
/// arises from 0/0 or domain violations inside the right-hand side
/// (logarithm of a non-positive value); infinity indicates overflow or
/// division by zero. Either one means the step — and every step after it —
/// is meaningless, so integration aborts immediately.
///
/// # Arguments
///
/// * `value` - Freshly computed ordinate w_{i+1}
/// * `method` - Integrator name (for error reporting)
/// * `step` - Step index that produced the value
pub(crate) fn validate_value(value: f64, method: &str, step: usize) -> Result<(), String> {
    if value.is_nan() {
        return Err(format!(
            "NaN detected in {} at step {}. This indicates numerical instability \
             or a domain violation in the problem's right-hand side. \
             Try reducing the step size (increase the steps parameter).",
            method, step
        ));
    }

    if value.is_infinite() {
        return Err(format!(
            "Infinity detected in {} at step {}. This indicates numerical overflow. \
             Try reducing the step size or check the problem for division by zero.",
            method, step
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
