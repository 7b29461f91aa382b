//! numlab-rs: Numerical Methods Framework
//!
//! A toolkit of classical numerical methods: a family of fixed-step ODE
//! step-integrators, natural and clamped cubic splines, root-finding and
//! optimization routines, finite-difference differentiation and quadrature
//! rules, and a one-compartment pharmacokinetics simulation layer.
//!
//! # Architecture
//!
//! numlab-rs is built on two core principles:
//!
//! 1. **Separation of Problems and Methods**
//!    - Problems define equations (what to solve)
//!    - Integrators provide numerical schemes (how to solve)
//!
//! 2. **Computation Separated from Presentation**
//!    - Numerical routines return trajectories, iterate histories and
//!      error metrics; they never print
//!    - Export and formatting live in their own layer ([`output`])
//!
//! # Quick Start
//!
//! ```rust
//! use numlab_rs::problem::XLogX;
//! use numlab_rs::solver::{Ivp, IntegrationConfig, StepIntegrator, Rk4Integrator};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Define the initial-value problem: y' = 1 + y/x, y(1) = 0
//! let ivp = Ivp::new(Box::new(XLogX), 1.0, 0.0);
//!
//! // 2. Configure the integration: span 4.0 covered in 10 steps (h = 0.4)
//! let config = IntegrationConfig::new(4.0, 10);
//!
//! // 3. Integrate
//! let integrator = Rk4Integrator::new();
//! let trajectory = integrator.integrate(&ivp, &config)?;
//!
//! // 4. Access results — exact solution is y = x·ln(x)
//! let exact = 5.0_f64 * 5.0_f64.ln();
//! assert!((trajectory.final_value - exact).abs() < 1e-2);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`problem`]: ODE problem traits and reference problems (equations)
//! - [`solver`]: Fixed-step integrators (methods)
//! - [`spline`]: Natural/clamped cubic spline interpolation
//! - [`roots`]: Root finding and unimodal optimization
//! - [`calculus`]: Numerical differentiation and quadrature
//! - [`analysis`]: Error metrics and multi-method comparison
//! - [`pharmacokinetics`]: One-compartment drug concentration simulation
//! - [`output`]: Result export (CSV)

pub mod problem;
pub mod solver;

pub mod spline;
pub mod roots;
pub mod calculus;
pub mod analysis;
pub mod pharmacokinetics;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use numlab_rs::prelude::*;
    //! ```
    pub use crate::analysis::{ComparisonTable, ErrorMetrics, MethodComparison};
    pub use crate::problem::{OdeProblem, TaylorExpansion, XLogX};
    pub use crate::solver::{
        EulerIntegrator, HeunThreeStageIntegrator, IntegrationConfig, Ivp, MidpointIntegrator,
        ModifiedEulerIntegrator, Rk4Integrator, StepIntegrator, TaylorIntegrator, Trajectory,
    };
    pub use crate::spline::{BoundaryCondition, CubicSpline};
}
