//! Explicit midpoint integrator (second-order Runge-Kutta)
//!
//! Advances the solution using the slope sampled at the interval midpoint:
//!
//! ```text
//! k₁ = f(x_i, w_i)
//! k₂ = f(x_i + h/2, w_i + h/2·k₁)
//! w_{i+1} = w_i + h·k₂
//! ```
//!
//! Second-order accurate at the cost of two evaluations per step.

use log::debug;

use crate::solver::{validate_value, IntegrationConfig, Ivp, StepIntegrator, Trajectory};

/// Explicit midpoint (RK2) fixed-step integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointIntegrator;

impl MidpointIntegrator {
    /// Create a new midpoint integrator
    pub fn new() -> Self {
        Self
    }
}

impl StepIntegrator for MidpointIntegrator {
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

            // Half Euler step to the midpoint, then take the midpoint slope
            let k1 = ivp.problem.rhs(x, w);
            let k2 = ivp.problem.rhs(x + h / 2.0, w + (h / 2.0) * k1);
            w += h * k2;

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
        "Explicit midpoint (RK2)"
    }

    fn order(&self) -> usize {
        2
    }
}

// =================================================================================================
// Tests
// =================================================================================================
