//! Forward Euler integrator
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit scheme for an
//! initial-value problem
//!
//! ```text
//! y' = f(x, y),    y(x₀) = y₀
//! ```
//!
//! The solution estimate is advanced over one fixed step h by
//!
//! ```text
//! w_{i+1} = w_i + h·f(x_i, w_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error O(h))
//! - **Local truncation error**: O(h²) per step
//! - **Cost**: 1 function evaluation per step
//! - **Stability**: conditionally stable; needs small h
//!
//! # When to Use
//!
//! - Prototyping and baseline comparisons
//! - Non-stiff problems with relaxed accuracy requirements
//!
//! For anything accuracy-sensitive, prefer [`Rk4Integrator`](super::Rk4Integrator).

use log::debug;

use crate::solver::{validate_value, IntegrationConfig, Ivp, StepIntegrator, Trajectory};

// =================================================================================================
// Forward Euler Integrator
// =================================================================================================

/// Forward Euler fixed-step integrator
///
/// Implements the simplest explicit scheme:
/// w_{i+1} = w_i + h·f(x_i, w_i)
///
/// # Algorithm
///
/// 1. Start with w₀ = y₀
/// 2. For each step i = 0, 1, …, N−1:
///    - Evaluate the slope f(x_i, w_i)
///    - Update: w_{i+1} = w_i + h·f(x_i, w_i)
///    - Store the point and validate it
/// 3. Return the complete trajectory
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h²) per step
/// - **Global error**: O(h) after N = span/h steps
/// - Halving h halves the final error (first-order convergence)
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Create a new Forward Euler integrator
    ///
    /// # Example
    ///
    /// ```rust
    /// use numlab_rs::solver::{EulerIntegrator, StepIntegrator};
    ///
    /// let integrator = EulerIntegrator::new();
    /// assert_eq!(integrator.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl StepIntegrator for EulerIntegrator {
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

        // Preallocate exact capacity to avoid reallocation during the march
        let mut abscissas = Vec::with_capacity(config.steps + 1);
        let mut ordinates = Vec::with_capacity(config.steps + 1);

        abscissas.push(ivp.x0);
        ordinates.push(w);

        // ====== Step 3: Integration ======

        for step in 0..config.steps {
            let x = ivp.x0 + h * step as f64;

            // w_{i+1} = w_i + h·f(x_i, w_i)
            w += h * ivp.problem.rhs(x, w);

            ordinates.push(w);

            // Abscissas are computed directly from the index rather than by
            // accumulating x += h: 0.4 is not exactly representable in
            // binary, and after N additions the drift reaches O(N·ε). The
            // direct product keeps the final abscissa at x₀ + span to
            // machine epsilon.
            abscissas.push(ivp.x0 + (step as f64 + 1.0) * h);

            validate_value(w, self.name(), step + 1)?;
        }

        // ====== Step 4: Build Result ======

        let mut result = Trajectory::new(abscissas, ordinates, w);

        result.add_metadata("integrator", self.name());
        result.add_metadata("steps", &config.steps.to_string());
        result.add_metadata("h", &h.to_string());
        result.add_metadata("span", &config.span.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }

    fn order(&self) -> usize {
        1
    }
}

// =================================================================================================
// Tests
// =================================================================================================
