//! Numerical differentiation and quadrature
//!
//! Finite-difference derivative approximations and Newton-Cotes quadrature
//! rules, in simple (single-interval) and composite forms. All routines are
//! pure: they take the target function as a parameter and return values —
//! no printing, no hidden state.
//!
//! # Error-bound helpers
//!
//! The classical error bounds (M·h/2 for the forward difference,
//! (b−a)·h²/24·M for composite midpoint, …) need a bound M on some higher
//! derivative. [`max_abs_on_interval`](differentiation::max_abs_on_interval)
//! estimates one by dense sampling when an analytical bound is not at hand.

pub mod differentiation;
pub mod quadrature;

pub use differentiation::{
    backward_difference, central_difference, forward_difference, max_abs_on_interval,
    three_point_backward, three_point_forward,
};
pub use quadrature::{
    composite_midpoint, composite_simpson, composite_trapezoid, midpoint_rule, simpson_rule,
    trapezoid_rule,
};
