//! Classical fourth-order Runge-Kutta integrator
//!
//! # Mathematical Background
//!
//! RK4 combines four slope estimates per step with Simpson's-rule weights:
//!
//! ```text
//! k₁ = f(x_i, w_i)
//! k₂ = f(x_i + h/2, w_i + h/2·k₁)
//! k₃ = f(x_i + h/2, w_i + h/2·k₂)
//! k₄ = f(x_i + h, w_i + h·k₃)
//!
//! w_{i+1} = w_i + h/6·(k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: fourth-order accurate (global error O(h⁴))
//! - **Local truncation error**: O(h⁵) per step
//! - **Cost**: 4 function evaluations per step
//! - **Stability**: allows roughly 2.8× larger steps than Euler for the
//!   same linear stability bound
//!
//! # Comparison with Euler
//!
//! | Method | Order | Evals/step | Error at h = 0.01 |
//! |--------|-------|------------|-------------------|
//! | Euler  | 1     | 1          | ~1e-2             |
//! | RK4    | 4     | 4          | ~1e-8             |
//!
//! Halving h reduces RK4's global error by a factor of 16. For non-stiff
//! problems with fixed steps, RK4 is the standard choice.

use log::debug;

use crate::solver::{validate_value, IntegrationConfig, Ivp, StepIntegrator, Trajectory};

// =================================================================================================
// RK4 Integrator
// =================================================================================================

/// Classical fourth-order Runge-Kutta fixed-step integrator
///
/// # Algorithm
///
/// For each step:
/// - **Stage 1**: slope at the interval start
/// - **Stage 2**: slope at the midpoint, reached via an Euler half-step
///   along k₁
/// - **Stage 3**: slope at the midpoint again, via a half-step along k₂
/// - **Stage 4**: slope at the interval end, via a full step along k₃
/// - **Update**: weighted average with weights 1/6, 2/6, 2/6, 1/6 —
///   Simpson's quadrature applied to the slope
///
/// # Example
///
/// ```rust
/// use numlab_rs::problem::XLogX;
/// use numlab_rs::solver::{Ivp, IntegrationConfig, Rk4Integrator, StepIntegrator};
///
/// let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
/// let config = IntegrationConfig::new(4.0, 100);
///
/// let result = Rk4Integrator::new().integrate(&ivp, &config).unwrap();
///
/// let exact = 5.0_f64 * 5.0_f64.ln();
/// assert!((result.final_value - exact).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4Integrator;

impl Rk4Integrator {
    /// Create a new RK4 integrator
    ///
    /// # Example
    ///
    /// ```rust
    /// use numlab_rs::solver::{Rk4Integrator, StepIntegrator};
    ///
    /// let integrator = Rk4Integrator::new();
    /// assert_eq!(integrator.name(), "Runge-Kutta 4 (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl StepIntegrator for Rk4Integrator {
    fn integrate(&self, ivp: &Ivp, config: &IntegrationConfig) -> Result<Trajectory, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        ivp.validate()?;

        // ====== Step 2: Setup ======

        let h = config.step_size();

        debug!(
            "{}: integrating '{}' with h = {}, {} steps",
            self.name(),
            ivp.problem_name(),
            h,
            config.steps
        );

        let mut w = ivp.y0;
        let mut abscissas = Vec::with_capacity(config.steps + 1);
        let mut ordinates = Vec::with_capacity(config.steps + 1);
        abscissas.push(ivp.x0);
        ordinates.push(w);

        // ====== Step 3: Integration ======

        for step in 0..config.steps {
            let x = ivp.x0 + h * step as f64;

            // ====== RK4 Stages ======

            // Stage 1: slope at the beginning of the interval
            let k1 = ivp.problem.rhs(x, w);

            // Stage 2: slope at the midpoint, via an Euler half-step along k₁
            let k2 = ivp.problem.rhs(x + h / 2.0, w + (h / 2.0) * k1);

            // Stage 3: slope at the midpoint, via a half-step along k₂
            let k3 = ivp.problem.rhs(x + h / 2.0, w + (h / 2.0) * k2);

            // Stage 4: slope at the end, via a full step along k₃
            let k4 = ivp.problem.rhs(x + h, w + h * k3);

            // ====== RK4 Update ======

            // Simpson's-rule weights: endpoints 1/6, midpoints 2/6
            w += (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

            ordinates.push(w);
            abscissas.push(ivp.x0 + (step as f64 + 1.0) * h);

            validate_value(w, self.name(), step + 1)?;
        }

        // ====== Step 4: Build Result ======

        let mut result = Trajectory::new(abscissas, ordinates, w);

        result.add_metadata("integrator", self.name());
        result.add_metadata("steps", &config.steps.to_string());
        result.add_metadata("h", &h.to_string());
        result.add_metadata("function evaluations", &(4 * config.steps).to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Runge-Kutta 4 (RK4)"
    }

    fn order(&self) -> usize {
        4
    }
}

// =================================================================================================
// Tests
// =================================================================================================
