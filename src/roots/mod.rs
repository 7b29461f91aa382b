//! Root finding and unimodal optimization
//!
//! Classical iterative methods for f(x) = 0 and for minimizing a unimodal
//! function, all sharing one stopping-criterion shape: an iteration cap OR
//! an error estimate falling below a tolerance.
//!
//! # Structured outcomes
//!
//! Every method returns a [`RootResult`] carrying a [`ConvergenceStatus`]
//! plus the full iterate history. Divergence (iterates exceeding a magnitude
//! threshold) and stalls (near-zero derivative or secant denominator) are
//! reported through the status — never through printed warnings — so the
//! caller decides how to react.
//!
//! # Available Methods
//!
//! | Method | Requires | Convergence |
//! |--------|----------|-------------|
//! | [`bisection`] | sign change on [a, b] | linear, guaranteed |
//! | [`fixed_point`] | contraction \|g'\| < 1 | linear |
//! | [`newton_raphson`] | derivative f' | quadratic |
//! | [`secant`] | two starting points | superlinear |
//! | [`golden_section_min`] | unimodal f on [a, b] | linear |
//!
//! # Example
//!
//! ```rust
//! use numlab_rs::roots::{bisection, newton_raphson, IterationConfig, ConvergenceStatus};
//!
//! // Critical point of f(x) = (1/2)x³ + e^(-x): solve f'(x) = 0 on [0, 2]
//! let df = |x: f64| 1.5 * x * x - (-x).exp();
//! let d2f = |x: f64| 3.0 * x + (-x).exp();
//!
//! let config = IterationConfig::new(1e-6, 100);
//! let bisect = bisection(&df, 0.0, 2.0, &config).unwrap();
//! let newton = newton_raphson(&df, &d2f, 1.0, &config).unwrap();
//!
//! assert_eq!(bisect.status, ConvergenceStatus::Converged);
//! assert!((bisect.value - newton.value).abs() < 2e-6);
//! ```

mod bracketing;
mod iterative;

pub use bracketing::{bisection, golden_section_min};
pub use iterative::{fixed_point, newton_raphson, secant};

// =================================================================================================
// Guards
// =================================================================================================

/// Magnitude beyond which an iterate is declared divergent
pub(crate) const DIVERGENCE_THRESHOLD: f64 = 1e10;

/// Denominators and derivatives smaller than this stall the iteration
pub(crate) const NEAR_ZERO_GUARD: f64 = 1e-10;

// =================================================================================================
// Iteration configuration
// =================================================================================================

/// Shared stopping criterion: error below tolerance OR iteration cap hit
#[derive(Debug, Clone, Copy)]
pub struct IterationConfig {
    /// Maximum acceptable error estimate
    pub tolerance: f64,

    /// Safety limit on iterations
    pub max_iterations: usize,
}

impl IterationConfig {
    /// Create a stopping criterion
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Validate that the criterion can terminate meaningfully
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("Tolerance must be positive and finite".to_string());
        }
        if self.max_iterations == 0 {
            return Err("Maximum iterations must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

// =================================================================================================
// Convergence status and result
// =================================================================================================

/// How an iteration loop terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    /// Error estimate fell below the tolerance
    Converged,

    /// Iterates exceeded the magnitude threshold, or the method stalled on
    /// a near-zero derivative/denominator
    Diverged,

    /// Iteration cap hit before the tolerance was reached
    MaxIterationsReached,
}

impl std::fmt::Display for ConvergenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvergenceStatus::Converged => write!(f, "converged"),
            ConvergenceStatus::Diverged => write!(f, "diverged"),
            ConvergenceStatus::MaxIterationsReached => write!(f, "max iterations reached"),
        }
    }
}

/// Outcome of a root-finding or minimization run
///
/// Always carries the last iterate and the partial history, even when the
/// run did not converge — the caller decides whether a diverged or capped
/// result is still usable.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// Final iterate (best estimate of the root or minimizer)
    pub value: f64,

    /// How the loop terminated
    pub status: ConvergenceStatus,

    /// Number of iterations performed
    pub iterations: usize,

    /// Error estimate at termination
    pub error: f64,

    /// Every iterate visited, in order
    pub history: Vec<f64>,
}

impl RootResult {
    /// True when the run converged within tolerance
    pub fn converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

// =================================================================================================
// Tests
// =================================================================================================
