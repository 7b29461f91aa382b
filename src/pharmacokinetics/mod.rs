//! One-compartment pharmacokinetics simulation
//!
//! Models the plasma concentration C(t) of an administered drug with the
//! one-compartment ODE
//!
//! ```text
//! V·dC/dt = u(t) − Q·C(t)
//! ```
//!
//! where V is the effective plasma volume, Q the metabolic elimination
//! rate, and u(t) the administration rate determined by the dose route
//! (IV bolus, oral first-order absorption, or topical).
//!
//! The simulation layer runs the exact integrating-factor solution next to
//! Euler and RK4 trajectories and reports per-method error records. Request
//! and response types serialize to the JSON shape of the simulation API:
//! `t_max, dt, V, Q, dose, route, ka?, num_doses?, interval?` in;
//! time/exact/euler/runge_kutta series plus error metrics out.
//!
//! # Quick Start
//!
//! ```rust
//! use numlab_rs::pharmacokinetics::{simulate, DoseRoute, SimulationRequest};
//!
//! let request = SimulationRequest {
//!     t_max: 24.0,
//!     dt: 0.1,
//!     volume: 50.0,
//!     clearance: 20.0,
//!     dose: 650.0,
//!     route: DoseRoute::Oral,
//!     ka: Some(1.2),
//!     num_doses: 4,
//!     interval: 6.0,
//! };
//!
//! let output = simulate(&request).unwrap();
//! assert_eq!(output.time.len(), output.exact.len());
//! assert!(output.errors.runge_kutta.max_error <= output.errors.euler.max_error);
//! ```

mod dosing;
mod model;
mod simulate;

pub use dosing::{DoseRoute, DosingRegimen};
pub use model::OneCompartmentModel;
pub use simulate::{simulate, SimulationErrors, SimulationOutput, SimulationRequest};
