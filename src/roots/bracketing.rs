//! Bracketing methods: bisection and golden-section search
//!
//! Both methods shrink an interval known to contain the target (a sign
//! change for bisection, a unimodal minimum for golden section) and
//! converge unconditionally, if slowly.

use log::warn;

use crate::roots::{ConvergenceStatus, IterationConfig, RootResult};

// =================================================================================================
// Bisection
// =================================================================================================

/// Bisection method for f(x) = 0 on [a, b]
///
/// Repeatedly halves the interval, keeping the half where f changes sign.
/// Linear convergence, but guaranteed whenever f(a)·f(b) < 0.
///
/// If f does not change sign on [a, b] a warning is logged and the
/// iteration proceeds anyway — it may still land on a root, and the status
/// reports what actually happened.
///
/// # Errors
///
/// Rejects an invalid stopping criterion or a degenerate interval (a ≥ b).
pub fn bisection(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    config: &IterationConfig,
) -> Result<RootResult, String> {
    config.validate()?;
    if a >= b {
        return Err(format!("Invalid interval: a = {} must be below b = {}", a, b));
    }

    if f(a) * f(b) >= 0.0 {
        warn!(
            "bisection: f does not change sign on [{}, {}]; the method may not converge",
            a, b
        );
    }

    let (mut a, mut b) = (a, b);
    let mut iterations = 0;
    let mut error = (b - a).abs();
    let mut history = Vec::new();

    while iterations < config.max_iterations && error > config.tolerance {
        let midpoint = (a + b) / 2.0;
        history.push(midpoint);

        let f_mid = f(midpoint);

        // Residual already below tolerance: accept the midpoint
        if f_mid.abs() < config.tolerance {
            return Ok(RootResult {
                value: midpoint,
                status: ConvergenceStatus::Converged,
                iterations: iterations + 1,
                error,
                history,
            });
        }

        // Keep the half where the sign changes
        if f(a) * f_mid < 0.0 {
            b = midpoint;
        } else {
            a = midpoint;
        }

        error = (b - a).abs() / 2.0;
        iterations += 1;
    }

    let status = if error <= config.tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::MaxIterationsReached
    };

    // Final estimate is the centre of the remaining bracket
    let value = (a + b) / 2.0;
    history.push(value);

    Ok(RootResult {
        value,
        status,
        iterations,
        error,
        history,
    })
}

// =================================================================================================
// Golden-section search
// =================================================================================================

/// Golden-section search for the minimum of a unimodal f on [a, b]
///
/// Derivative-free: the interval shrinks by the golden ratio
/// φ = (√5 − 1)/2 ≈ 0.618 each iteration, reusing one interior evaluation
/// per step. The error estimate is the bracket width.
pub fn golden_section_min(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    config: &IterationConfig,
) -> Result<RootResult, String> {
    config.validate()?;
    if a >= b {
        return Err(format!("Invalid interval: a = {} must be below b = {}", a, b));
    }

    let phi = (5.0_f64.sqrt() - 1.0) / 2.0;

    let (mut a, mut b) = (a, b);
    let mut x1 = a + (1.0 - phi) * (b - a);
    let mut x2 = a + phi * (b - a);
    let mut f1 = f(x1);
    let mut f2 = f(x2);

    let mut iterations = 0;
    let mut error = (b - a).abs();
    let mut history = Vec::new();

    while iterations < config.max_iterations && error > config.tolerance {
        if f1 < f2 {
            // Minimum lies in [a, x2]
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = a + (1.0 - phi) * (b - a);
            f1 = f(x1);
        } else {
            // Minimum lies in [x1, b]
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = a + phi * (b - a);
            f2 = f(x2);
        }

        error = (b - a).abs();
        iterations += 1;
        history.push((a + b) / 2.0);
    }

    let status = if error <= config.tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::MaxIterationsReached
    };

    Ok(RootResult {
        value: (a + b) / 2.0,
        status,
        iterations,
        error,
        history,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
