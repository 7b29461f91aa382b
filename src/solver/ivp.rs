//! Initial-value problem definition
//!
//! An IVP combines an ODE problem with its starting condition.

use crate::problem::OdeProblem;

/// Initial-value problem
///
/// Defines a specific case to integrate:
/// - ODE problem (equation)
/// - Initial condition (x₀, y₀)
///
/// # Design
///
/// The same IVP can be integrated with different numerical methods.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use numlab_rs::problem::XLogX;
/// use numlab_rs::solver::{EulerIntegrator, Rk4Integrator, StepIntegrator, IntegrationConfig, Ivp};
///
/// let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
/// let config = IntegrationConfig::new(4.0, 100);
///
/// // Integrate the same problem with two methods
/// let coarse = EulerIntegrator::new().integrate(&ivp, &config).unwrap();
/// let fine = Rk4Integrator::new().integrate(&ivp, &config).unwrap();
/// ```
pub struct Ivp {
    /// ODE problem (equation)
    pub problem: Box<dyn OdeProblem>,

    /// Initial abscissa x₀
    pub x0: f64,

    /// Initial ordinate y(x₀)
    pub y0: f64,
}

impl Ivp {
    /// Create an initial-value problem
    pub fn new(problem: Box<dyn OdeProblem>, x0: f64, y0: f64) -> Self {
        Self { problem, x0, y0 }
    }

    /// Verify the initial condition is usable
    pub fn validate(&self) -> Result<(), String> {
        if !self.x0.is_finite() {
            return Err("Initial abscissa x0 must be finite".to_string());
        }
        if !self.y0.is_finite() {
            return Err("Initial ordinate y0 must be finite".to_string());
        }
        Ok(())
    }

    /// Get problem name
    pub fn problem_name(&self) -> &str {
        self.problem.name()
    }

    /// Exact solution at x, when the problem supplies one
    pub fn exact(&self, x: f64) -> Option<f64> {
        self.problem.exact(x)
    }
}

impl std::fmt::Debug for Ivp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ivp")
            .field("problem", &self.problem_name())
            .field("x0", &self.x0)
            .field("y0", &self.y0)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::XLogX;

    #[test]
    fn test_ivp_creation() {
        let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
        assert_eq!(ivp.problem_name(), "y' = 1 + y/x");
        assert!(ivp.validate().is_ok());
    }

    #[test]
    fn test_ivp_rejects_non_finite_start() {
        let ivp = Ivp::new(Box::new(XLogX), f64::NAN, 0.0);
        assert!(ivp.validate().is_err());

        let ivp = Ivp::new(Box::new(XLogX), 1.0, f64::INFINITY);
        assert!(ivp.validate().is_err());
    }

    #[test]
    fn test_ivp_exposes_exact_solution() {
        let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
        let y = ivp.exact(2.0).unwrap();
        assert!((y - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
    }
}
