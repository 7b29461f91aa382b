//! Three-stage Heun-type integrator
//!
//! # Mathematical Background
//!
//! A three-stage rule sampling the slope at x_i, x_i + h/3 and x_i + 2h/3:
//!
//! ```text
//! k₁ = (h/3)·f(x_i, w_i)
//! k₂ = (2h/3)·f(x_i + h/3, w_i + k₁)
//! w_{i+1} = w_i + (h/4)·(f(x_i, w_i) + 3·f(x_i + 2h/3, w_i + k₂))
//! ```
//!
//! Note that k₁ and k₂ already include their h factors.
//!
//! # Caveat
//!
//! These coefficients follow the three-stage formulation found in course
//! handouts, NOT the textbook two-stage Heun method (which is the explicit
//! trapezoid, implemented here as
//! [`ModifiedEulerIntegrator`](super::ModifiedEulerIntegrator)). The rule
//! is kept verbatim; it achieves third-order accuracy on smooth problems.

use log::debug;

use crate::solver::{validate_value, IntegrationConfig, Ivp, StepIntegrator, Trajectory};

/// Three-stage Heun-type fixed-step integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct HeunThreeStageIntegrator;

impl HeunThreeStageIntegrator {
    /// Create a new three-stage Heun integrator
    pub fn new() -> Self {
        Self
    }
}

impl StepIntegrator for HeunThreeStageIntegrator {
    fn integrate(&self, ivp: &Ivp, config: &IntegrationConfig) -> Result<Trajectory, String> {
        config.validate()?;
        ivp.validate()?;

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

        for step in 0..config.steps {
            let x = ivp.x0 + h * step as f64;

            // k₁ and k₂ carry their h factors, per the handout formulation
            let slope_start = ivp.problem.rhs(x, w);
            let k1 = (h / 3.0) * slope_start;
            let k2 = (2.0 * h / 3.0) * ivp.problem.rhs(x + h / 3.0, w + k1);

            w += (h / 4.0) * (slope_start + 3.0 * ivp.problem.rhs(x + 2.0 * h / 3.0, w + k2));

            ordinates.push(w);
            abscissas.push(ivp.x0 + (step as f64 + 1.0) * h);

            validate_value(w, self.name(), step + 1)?;
        }

        let mut result = Trajectory::new(abscissas, ordinates, w);
        result.add_metadata("integrator", self.name());
        result.add_metadata("steps", &config.steps.to_string());
        result.add_metadata("h", &h.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Heun (3-stage)"
    }

    fn order(&self) -> usize {
        3
    }
}

// =================================================================================================
// Tests
// =================================================================================================
