//! Side-by-side comparison of integration methods on one IVP
//!
//! The runner integrates a single initial-value problem with every
//! configured method and collects the trajectories — plus error records
//! against the problem's closed-form solution, when one exists — into a
//! [`ComparisonTable`]. The table is pure data: rendering it (CSV, console)
//! is the output layer's job.

use log::debug;

use crate::analysis::ErrorMetrics;
use crate::solver::{
    EulerIntegrator, HeunThreeStageIntegrator, IntegrationConfig, Ivp, MidpointIntegrator,
    ModifiedEulerIntegrator, Rk4Integrator, StepIntegrator, TaylorIntegrator,
};

// =================================================================================================
// Comparison table
// =================================================================================================

/// One method's column in a comparison table
#[derive(Debug, Clone)]
pub struct MethodColumn {
    /// Method name, used as the CSV column header
    pub method: String,

    /// Global order of accuracy
    pub order: usize,

    /// Computed ordinate values, one per grid point
    pub values: Vec<f64>,

    /// Deviation from the exact solution, when the problem supplies one
    pub errors: Option<ErrorMetrics>,
}

/// Trajectories of several methods over the same grid
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    /// Shared grid abscissas
    pub abscissas: Vec<f64>,

    /// Closed-form solution sampled on the grid, when available
    pub exact: Option<Vec<f64>>,

    /// One column per method, in configuration order
    pub columns: Vec<MethodColumn>,
}

impl ComparisonTable {
    /// Number of grid points (rows)
    pub fn rows(&self) -> usize {
        self.abscissas.len()
    }

    /// Look up a column by method name
    pub fn column(&self, method: &str) -> Option<&MethodColumn> {
        self.columns.iter().find(|c| c.method == method)
    }
}

// =================================================================================================
// Method comparison runner
// =================================================================================================

/// Runs a set of integrators on one IVP and tabulates the results
///
/// # Example
///
/// ```rust
/// use numlab_rs::analysis::MethodComparison;
/// use numlab_rs::problem::XLogX;
/// use numlab_rs::solver::{IntegrationConfig, Ivp};
///
/// let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
/// let config = IntegrationConfig::new(4.0, 10);
///
/// let table = MethodComparison::standard().run(&ivp, &config).unwrap();
///
/// assert_eq!(table.rows(), 11);
/// assert_eq!(table.columns.len(), 8);
/// // Exact column present: XLogX has a closed-form solution
/// assert!(table.exact.is_some());
/// ```
pub struct MethodComparison {
    methods: Vec<Box<dyn StepIntegrator>>,
}

impl MethodComparison {
    /// Create an empty comparison; add methods with [`with_method`](Self::with_method)
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    /// The full fixed-step family: Euler, Taylor 2–4, midpoint, modified
    /// Euler, 3-stage Heun and RK4
    ///
    /// Requires the problem to supply Taylor derivatives; for problems
    /// without them, assemble a custom set instead.
    pub fn standard() -> Self {
        Self::new()
            .with_method(Box::new(EulerIntegrator::new()))
            .with_method(Box::new(TaylorIntegrator::order2()))
            .with_method(Box::new(TaylorIntegrator::order3()))
            .with_method(Box::new(TaylorIntegrator::order4()))
            .with_method(Box::new(MidpointIntegrator::new()))
            .with_method(Box::new(ModifiedEulerIntegrator::new()))
            .with_method(Box::new(HeunThreeStageIntegrator::new()))
            .with_method(Box::new(Rk4Integrator::new()))
    }

    /// Add a method to the comparison (builder pattern)
    pub fn with_method(mut self, method: Box<dyn StepIntegrator>) -> Self {
        self.methods.push(method);
        self
    }

    /// Number of configured methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when no methods are configured
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Integrate the IVP with every configured method
    ///
    /// # Errors
    ///
    /// Fails when no methods are configured or when any single integration
    /// fails (invalid inputs, NaN/Inf mid-run, missing Taylor derivatives).
    /// A failed method fails the whole run — partial tables would silently
    /// misreport the comparison.
    pub fn run(&self, ivp: &Ivp, config: &IntegrationConfig) -> Result<ComparisonTable, String> {
        if self.methods.is_empty() {
            return Err("Method comparison requires at least one integrator".to_string());
        }
        config.validate()?;
        ivp.validate()?;

        let h = config.step_size();
        let abscissas: Vec<f64> = (0..=config.steps)
            .map(|i| ivp.x0 + i as f64 * h)
            .collect();

        // Exact column first: every method's errors measure against it
        let exact: Option<Vec<f64>> = abscissas
            .iter()
            .map(|&x| ivp.problem.exact(x))
            .collect();

        let mut columns = Vec::with_capacity(self.methods.len());
        for method in &self.methods {
            debug!("comparison: running {}", method.name());

            let trajectory = method.integrate(ivp, config)?;

            let errors = match &exact {
                Some(reference) => Some(ErrorMetrics::between(reference, &trajectory.ordinates)?),
                None => None,
            };

            columns.push(MethodColumn {
                method: method.name().to_string(),
                order: method.order(),
                values: trajectory.ordinates,
                errors,
            });
        }

        Ok(ComparisonTable {
            abscissas,
            exact,
            columns,
        })
    }
}

impl Default for MethodComparison {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
