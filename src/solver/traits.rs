//! Integrator traits and types
//!
//! # Design Philosophy
//!
//! The solver layer mirrors the problem layer's separation of concerns:
//! - `IntegrationConfig` describes HOW the integration is discretized
//! - `Ivp` (in `ivp.rs`) describes WHAT is integrated
//! - `Trajectory` carries the computed solution plus metadata
//! - `StepIntegrator` is the stable interface every method implements
//!
//! # Stability Guarantee
//!
//! - `StepIntegrator` trait: STABLE since v0.1.0, will NEVER change
//! - Core structures: STABLE (fields won't be removed)

use std::collections::HashMap;

use crate::solver::Ivp;

// =================================================================================================
// Integration configuration
// =================================================================================================

/// Discretization parameters for a fixed-step integration
///
/// The grid is implicit: starting from the IVP's x₀, the integrator visits
/// x₀, x₀ + h, …, x₀ + span with h = span / steps. The grid is immutable
/// once the configuration is built.
///
/// # Examples
///
/// ```rust
/// use numlab_rs::solver::IntegrationConfig;
///
/// // Cover [x0, x0 + 4] in 10 steps → h = 0.4
/// let config = IntegrationConfig::new(4.0, 10);
/// assert!((config.step_size() - 0.4).abs() < 1e-12);
///
/// // Equivalent construction from an explicit step size
/// let config = IntegrationConfig::from_step(0.4, 10);
/// assert!((config.span - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IntegrationConfig {
    /// Total abscissa range covered, x_N − x₀
    pub span: f64,

    /// Number of steps N (the trajectory has N + 1 points)
    pub steps: usize,
}

impl IntegrationConfig {
    /// Create a configuration from total span and step count
    pub fn new(span: f64, steps: usize) -> Self {
        Self { span, steps }
    }

    /// Create a configuration from an explicit step size and step count
    pub fn from_step(step: f64, steps: usize) -> Self {
        Self {
            span: step * steps as f64,
            steps,
        }
    }

    /// Step size h = span / steps
    pub fn step_size(&self) -> f64 {
        self.span / self.steps as f64
    }

    /// Validate that parameters describe a usable grid
    pub fn validate(&self) -> Result<(), String> {
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err("Integration span must be positive and finite".to_string());
        }
        if self.steps == 0 {
            return Err("Step count must be greater than 0".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Trajectory (integration result)
// =================================================================================================

/// Computed solution of an initial-value problem
///
/// Holds the grid abscissas, the ordinate estimates w₀…w_N (index i
/// corresponding to x₀ + i·h), the final value, and string metadata for
/// diagnostics and reproducibility.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Grid abscissas x₀ … x_N
    pub abscissas: Vec<f64>,

    /// Computed ordinate values w₀ … w_N
    pub ordinates: Vec<f64>,

    /// Final ordinate value w_N (duplicated for convenience)
    pub final_value: f64,

    /// Method/run metadata (solver name, step size, …)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Create a trajectory from computed data
    pub fn new(abscissas: Vec<f64>, ordinates: Vec<f64>, final_value: f64) -> Self {
        Self {
            abscissas,
            ordinates,
            final_value,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored points (steps + 1)
    pub fn len(&self) -> usize {
        self.ordinates.len()
    }

    /// True when the trajectory holds no points
    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Pointwise absolute deviation from a closed-form solution
    ///
    /// Returns `None` when the problem supplies no exact solution.
    pub fn absolute_errors(&self, exact: impl Fn(f64) -> Option<f64>) -> Option<Vec<f64>> {
        self.abscissas
            .iter()
            .zip(self.ordinates.iter())
            .map(|(&x, &w)| exact(x).map(|y| (w - y).abs()))
            .collect()
    }
}

// =================================================================================================
// Step Integrator Trait
// =================================================================================================

/// Trait for fixed-step ODE integrators
///
/// # Contract
///
/// Given an initial-value problem and a discretization, `integrate` returns
/// a trajectory of steps + 1 ordinate values, index i corresponding to
/// x₀ + i·h. Each w_{i+1} is derived solely from (x_i, w_i, h) — methods
/// carry no history beyond the immediate predecessor.
///
/// # Errors
///
/// Implementations return `Err` with a descriptive message when:
/// - the configuration or IVP fails validation
/// - a step produces NaN or infinity (numerical instability or a domain
///   violation inside the problem's right-hand side)
/// - the method's prerequisites are missing (e.g. Taylor derivatives)
///
/// There is no retry or recovery; the caller chooses valid inputs.
pub trait StepIntegrator {
    /// Advance the IVP across the configured grid
    fn integrate(&self, ivp: &Ivp, config: &IntegrationConfig) -> Result<Trajectory, String>;

    /// Human-readable method name
    fn name(&self) -> &str;

    /// Global order of accuracy (1 for Euler, 4 for RK4, …)
    fn order(&self) -> usize;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_step_size() {
        let config = IntegrationConfig::new(4.0, 10);
        assert!((config.step_size() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_config_from_step_round_trips() {
        let config = IntegrationConfig::from_step(0.25, 16);
        assert!((config.span - 4.0).abs() < 1e-12);
        assert!((config.step_size() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_config_rejects_zero_steps() {
        let config = IntegrationConfig::new(1.0, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_negative_span() {
        let config = IntegrationConfig::new(-1.0, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_non_finite_span() {
        let config = IntegrationConfig::new(f64::NAN, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trajectory_metadata() {
        let mut trajectory = Trajectory::new(vec![0.0, 1.0], vec![1.0, 2.0], 2.0);
        trajectory.add_metadata("integrator", "Test");

        assert_eq!(trajectory.len(), 2);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.metadata.get("integrator"), Some(&"Test".to_string()));
    }

    #[test]
    fn test_trajectory_absolute_errors() {
        // Trajectory of y = x with one point off by 0.5
        let trajectory = Trajectory::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.5, 2.0], 2.0);
        let errors = trajectory.absolute_errors(|x| Some(x)).unwrap();

        assert!((errors[0] - 0.0).abs() < 1e-12);
        assert!((errors[1] - 0.5).abs() < 1e-12);
        assert!((errors[2] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_trajectory_absolute_errors_without_exact() {
        let trajectory = Trajectory::new(vec![0.0, 1.0], vec![0.0, 1.0], 1.0);
        assert!(trajectory.absolute_errors(|_| None).is_none());
    }
}
