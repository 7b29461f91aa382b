//! Taylor-series integrators of order 2, 3 and 4
//!
//! # Mathematical Background
//!
//! The Taylor method of order k advances the solution with the truncated
//! Taylor expansion
//!
//! ```text
//! w_{i+1} = w_i + h·y'(x_i, w_i) + h²/2!·y''(x_i, w_i) + … + hᵏ/k!·y⁽ᵏ⁾(x_i, w_i)
//! ```
//!
//! where y'', y''', y'''' are the total derivatives of y along the specific
//! ODE, derived by hand. Problems opt in by implementing
//! [`TaylorExpansion`](crate::problem::TaylorExpansion); the integrator
//! refuses problems that do not supply the expansion.
//!
//! # Characteristics
//!
//! - **Order**: k ∈ {2, 3, 4}, chosen at construction
//! - **Cost**: k derivative evaluations per step
//! - **Limitation**: per-problem derivative bookkeeping; RK methods reach
//!   the same order from f alone

use log::debug;

use crate::solver::{validate_value, IntegrationConfig, Ivp, StepIntegrator, Trajectory};

// =================================================================================================
// Taylor Integrator
// =================================================================================================

/// Taylor-series integrator of a fixed order
///
/// # Example
///
/// ```rust
/// use numlab_rs::problem::XLogX;
/// use numlab_rs::solver::{Ivp, IntegrationConfig, StepIntegrator, TaylorIntegrator};
///
/// let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
/// let config = IntegrationConfig::new(4.0, 10);
///
/// let result = TaylorIntegrator::order4().integrate(&ivp, &config).unwrap();
/// let exact = 5.0_f64 * 5.0_f64.ln();
/// assert!((result.final_value - exact).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TaylorIntegrator {
    order: usize,
}

impl TaylorIntegrator {
    /// Create a Taylor integrator of the given order
    ///
    /// # Errors
    ///
    /// Only orders 2, 3 and 4 are supported; anything else is rejected.
    pub fn new(order: usize) -> Result<Self, String> {
        if !(2..=4).contains(&order) {
            return Err(format!(
                "Taylor integrator supports orders 2, 3 and 4, got {}",
                order
            ));
        }
        Ok(Self { order })
    }

    /// Second-order Taylor integrator
    pub fn order2() -> Self {
        Self { order: 2 }
    }

    /// Third-order Taylor integrator
    pub fn order3() -> Self {
        Self { order: 3 }
    }

    /// Fourth-order Taylor integrator
    pub fn order4() -> Self {
        Self { order: 4 }
    }
}

impl StepIntegrator for TaylorIntegrator {
    fn integrate(&self, ivp: &Ivp, config: &IntegrationConfig) -> Result<Trajectory, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        ivp.validate()?;

        // Taylor methods are the one family with a prerequisite beyond f
        let taylor = ivp.problem.taylor().ok_or_else(|| {
            format!(
                "{} requires closed-form derivatives, but problem '{}' does not supply them",
                self.name(),
                ivp.problem_name()
            )
        })?;

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

            // Truncated expansion: h·y' + h²/2·y'' (+ h³/6·y''' + h⁴/24·y'''')
            let mut increment = h * taylor.dy(x, w) + (h * h / 2.0) * taylor.d2y(x, w);
            if self.order >= 3 {
                increment += (h * h * h / 6.0) * taylor.d3y(x, w);
            }
            if self.order >= 4 {
                increment += (h * h * h * h / 24.0) * taylor.d4y(x, w);
            }

            w += increment;

            ordinates.push(w);
            abscissas.push(ivp.x0 + (step as f64 + 1.0) * h);

            validate_value(w, self.name(), step + 1)?;
        }

        // ====== Step 4: Build Result ======

        let mut result = Trajectory::new(abscissas, ordinates, w);
        result.add_metadata("integrator", self.name());
        result.add_metadata("order", &self.order.to_string());
        result.add_metadata("steps", &config.steps.to_string());
        result.add_metadata("h", &h.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        match self.order {
            2 => "Taylor order 2",
            3 => "Taylor order 3",
            _ => "Taylor order 4",
        }
    }

    fn order(&self) -> usize {
        self.order
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ExponentialDecay, XLogX};

    #[test]
    fn test_taylor_order_validation() {
        assert!(TaylorIntegrator::new(2).is_ok());
        assert!(TaylorIntegrator::new(3).is_ok());
        assert!(TaylorIntegrator::new(4).is_ok());

        assert!(TaylorIntegrator::new(1).is_err());
        assert!(TaylorIntegrator::new(5).is_err());
    }

    #[test]
    fn test_taylor_names() {
        assert_eq!(TaylorIntegrator::order2().name(), "Taylor order 2");
        assert_eq!(TaylorIntegrator::order3().name(), "Taylor order 3");
        assert_eq!(TaylorIntegrator::order4().name(), "Taylor order 4");
        assert_eq!(TaylorIntegrator::order3().order(), 3);
    }

    #[test]
    fn test_taylor_rejects_problem_without_expansion() {
        // ExponentialDecay implements OdeProblem but not TaylorExpansion
        let ivp = Ivp::new(Box::new(ExponentialDecay::new(0.1)), 0.0, 1.0);
        let config = IntegrationConfig::new(1.0, 10);

        let result = TaylorIntegrator::order2().integrate(&ivp, &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not supply"));
    }

    #[test]
    fn test_taylor_accuracy_improves_with_order() {
        // On the reference IVP, each extra expansion term must tighten the
        // final error for the same h
        let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
        let config = IntegrationConfig::new(4.0, 10);
        let exact = 5.0 * 5.0_f64.ln();

        let error2 = (TaylorIntegrator::order2()
            .integrate(&ivp, &config)
            .unwrap()
            .final_value
            - exact)
            .abs();
        let error3 = (TaylorIntegrator::order3()
            .integrate(&ivp, &config)
            .unwrap()
            .final_value
            - exact)
            .abs();
        let error4 = (TaylorIntegrator::order4()
            .integrate(&ivp, &config)
            .unwrap()
            .final_value
            - exact)
            .abs();

        assert!(error3 < error2, "order 3 ({}) not better than order 2 ({})", error3, error2);
        assert!(error4 < error3, "order 4 ({}) not better than order 3 ({})", error4, error3);
    }

    #[test]
    fn test_taylor2_second_order_convergence() {
        let integrator = TaylorIntegrator::order2();
        let exact = 5.0 * 5.0_f64.ln();

        let mut errors = Vec::new();
        for &steps in &[50usize, 100, 200] {
            let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
            let config = IntegrationConfig::new(4.0, steps);
            let result = integrator.integrate(&ivp, &config).unwrap();
            errors.push((result.final_value - exact).abs());
        }

        // error(h/2) ≈ error(h)/4 for a second-order method
        for i in 0..errors.len() - 1 {
            let ratio = errors[i] / errors[i + 1];
            assert!(
                ratio > 3.2 && ratio < 4.8,
                "Convergence ratio {} not second-order",
                ratio
            );
        }
    }

    #[test]
    fn test_taylor_trajectory_shape() {
        let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
        let config = IntegrationConfig::new(4.0, 10);

        let result = TaylorIntegrator::order4().integrate(&ivp, &config).unwrap();

        assert_eq!(result.len(), 11);
        assert!((result.abscissas[0] - 1.0).abs() < 1e-14);
        assert!((result.abscissas.last().unwrap() - 5.0).abs() < 1e-14);
        assert_eq!(result.metadata.get("order"), Some(&"4".to_string()));
    }
}
