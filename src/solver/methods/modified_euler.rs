//! Modified Euler integrator (explicit trapezoid)
//!
//! A predictor-corrector pair: a plain Euler step predicts the next value,
//! and the update averages the slopes at both interval endpoints:
//!
//! ```text
//! w* = w_i + h·f(x_i, w_i)                        (predictor)
//! w_{i+1} = w_i + h/2·(f(x_i, w_i) + f(x_{i+1}, w*))   (corrector)
//! ```
//!
//! Equivalent to applying the trapezoid quadrature rule to the slope;
//! second-order accurate.

use log::debug;

use crate::solver::{validate_value, IntegrationConfig, Ivp, StepIntegrator, Trajectory};

/// Modified Euler (explicit trapezoid) fixed-step integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedEulerIntegrator;

impl ModifiedEulerIntegrator {
    /// Create a new modified Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl StepIntegrator for ModifiedEulerIntegrator {
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
            let x_next = ivp.x0 + (step as f64 + 1.0) * h;

            // Predictor: plain Euler estimate of w_{i+1}
            let slope_start = ivp.problem.rhs(x, w);
            let predicted = w + h * slope_start;

            // Corrector: average the slopes at both endpoints
            let slope_end = ivp.problem.rhs(x_next, predicted);
            w += (h / 2.0) * (slope_start + slope_end);

            ordinates.push(w);
            abscissas.push(x_next);

            validate_value(w, self.name(), step + 1)?;
        }

        let mut result = Trajectory::new(abscissas, ordinates, w);
        result.add_metadata("integrator", self.name());
        result.add_metadata("steps", &config.steps.to_string());
        result.add_metadata("h", &h.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Modified Euler"
    }

    fn order(&self) -> usize {
        2
    }
}

// =================================================================================================
// Tests
// =================================================================================================
