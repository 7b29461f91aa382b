//! Helper functions for integration tests

use numlab_rs::problem::XLogX;
use numlab_rs::solver::{IntegrationConfig, Ivp, StepIntegrator};

/// The canonical reference IVP: y' = 1 + y/x on [1, 5] with y(1) = 0
///
/// Exact solution y = x·ln(x); the error of any method is measured against
/// y(5) = 5·ln(5).
pub fn xlogx_ivp() -> Ivp {
    Ivp::new(Box::new(XLogX), 1.0, 0.0)
}

/// Absolute error at the right endpoint x = 5 of the reference IVP
pub fn final_error(method: &dyn StepIntegrator, steps: usize) -> f64 {
    let ivp = xlogx_ivp();
    let config = IntegrationConfig::new(4.0, steps);
    let trajectory = method.integrate(&ivp, &config).unwrap();

    let exact = 5.0 * 5.0_f64.ln();
    (trajectory.final_value - exact).abs()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
