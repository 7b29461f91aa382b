//! Numerical methods for advancing initial-value problems
//!
//! This module contains concrete implementations of the
//! [`StepIntegrator`](crate::solver::StepIntegrator) trait.
//!
//! # Architecture
//!
//! The separation between abstract integrator interface (`solver::traits`)
//! and concrete implementations (`solver::methods`) follows the Open-Closed
//! Principle:
//! - **Open** for extension: add new methods without modifying existing code
//! - **Closed** for modification: the `StepIntegrator` trait is stable
//!
//! # Available Methods
//!
//! All methods are explicit fixed-step schemes for non-stiff scalar ODEs.
//!
//! - **[`EulerIntegrator`]**: Forward Euler
//!   - Order: first-order O(h)
//!   - Cost: 1 evaluation per step
//!
//! - **[`TaylorIntegrator`]**: Taylor series of order 2, 3 or 4
//!   - Order: k (chosen at construction)
//!   - Requires the problem to supply closed-form derivatives via
//!     [`TaylorExpansion`](crate::problem::TaylorExpansion)
//!
//! - **[`MidpointIntegrator`]**: Explicit midpoint (RK2)
//!   - Order: second-order O(h²)
//!
//! - **[`ModifiedEulerIntegrator`]**: Explicit trapezoid (predictor-corrector)
//!   - Order: second-order O(h²)
//!
//! - **[`HeunThreeStageIntegrator`]**: Three-stage Heun-type rule
//!   - Order: third-order O(h³)
//!   - Uses the three-stage course-handout coefficients, not the textbook
//!     two-stage Heun method
//!
//! - **[`Rk4Integrator`]**: Classical fourth-order Runge-Kutta
//!   - Order: fourth-order O(h⁴)
//!   - Cost: 4 evaluations per step
//!
//! # Design Philosophy
//!
//! Each integrator is:
//! - **Self-contained**: no shared mutable state
//! - **Stateless**: reusable across integrations
//! - **Markov**: w_{i+1} depends only on (x_i, w_i, h)

mod euler;
mod taylor;
mod midpoint;
mod modified_euler;
mod heun;
mod rk4;

// Re-exports for convenience
pub use euler::EulerIntegrator;
pub use heun::HeunThreeStageIntegrator;
pub use midpoint::MidpointIntegrator;
pub use modified_euler::ModifiedEulerIntegrator;
pub use rk4::Rk4Integrator;
pub use taylor::TaylorIntegrator;
