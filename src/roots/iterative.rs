//! Open iterative methods: fixed point, Newton-Raphson, secant
//!
//! These methods iterate from one or two starting points without
//! maintaining a bracket. They converge faster than bisection when they
//! converge at all — divergence and stalls are reported through the
//! result's status.

use log::warn;

use crate::roots::{
    ConvergenceStatus, IterationConfig, RootResult, DIVERGENCE_THRESHOLD, NEAR_ZERO_GUARD,
};

// =================================================================================================
// Fixed-point iteration
// =================================================================================================

/// Fixed-point iteration x_{n+1} = g(x_n)
///
/// Finds a point with g(x) = x; a root problem f(x) = 0 must first be
/// rewritten as x = g(x). Converges linearly when |g'| < 1 near the fixed
/// point; iterates exceeding the divergence threshold (|x| > 1e10) end the
/// run with [`ConvergenceStatus::Diverged`].
pub fn fixed_point(
    g: &dyn Fn(f64) -> f64,
    x0: f64,
    config: &IterationConfig,
) -> Result<RootResult, String> {
    config.validate()?;
    if !x0.is_finite() {
        return Err("Starting point x0 must be finite".to_string());
    }

    let mut current = x0;
    let mut iterations = 0;
    let mut error = f64::INFINITY;
    let mut history = vec![current];

    while iterations < config.max_iterations && error > config.tolerance {
        let next = g(current);
        error = (next - current).abs();

        current = next;
        iterations += 1;
        history.push(current);

        if !current.is_finite() || current.abs() > DIVERGENCE_THRESHOLD {
            warn!("fixed_point: iterate {} diverged at iteration {}", current, iterations);
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Diverged,
                iterations,
                error,
                history,
            });
        }
    }

    let status = if error <= config.tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::MaxIterationsReached
    };

    Ok(RootResult {
        value: current,
        status,
        iterations,
        error,
        history,
    })
}

// =================================================================================================
// Newton-Raphson
// =================================================================================================

/// Newton-Raphson iteration x_{n+1} = x_n − f(x_n)/f'(x_n)
///
/// Quadratic convergence near a simple root, at the price of an explicit
/// derivative and sensitivity to the starting point. A derivative smaller
/// than the near-zero guard (1e-10) stalls the run with
/// [`ConvergenceStatus::Diverged`] rather than dividing by it.
pub fn newton_raphson(
    f: &dyn Fn(f64) -> f64,
    df: &dyn Fn(f64) -> f64,
    x0: f64,
    config: &IterationConfig,
) -> Result<RootResult, String> {
    config.validate()?;
    if !x0.is_finite() {
        return Err("Starting point x0 must be finite".to_string());
    }

    let mut current = x0;
    let mut iterations = 0;
    let mut error = f64::INFINITY;
    let mut history = vec![current];

    while iterations < config.max_iterations && error > config.tolerance {
        let fx = f(current);
        let dfx = df(current);

        if dfx.abs() < NEAR_ZERO_GUARD {
            warn!(
                "newton_raphson: derivative {} too small at x = {}, stopping",
                dfx, current
            );
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Diverged,
                iterations,
                error,
                history,
            });
        }

        let next = current - fx / dfx;
        error = (next - current).abs();

        current = next;
        iterations += 1;
        history.push(current);

        if !current.is_finite() || current.abs() > DIVERGENCE_THRESHOLD {
            warn!("newton_raphson: iterate {} diverged at iteration {}", current, iterations);
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Diverged,
                iterations,
                error,
                history,
            });
        }

        // Residual convergence: the root itself is already good enough
        if f(current).abs() < config.tolerance {
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Converged,
                iterations,
                error,
                history,
            });
        }
    }

    let status = if error <= config.tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::MaxIterationsReached
    };

    Ok(RootResult {
        value: current,
        status,
        iterations,
        error,
        history,
    })
}

// =================================================================================================
// Secant
// =================================================================================================

/// Secant iteration using two prior iterates
///
/// ```text
/// x_{n+1} = x_n − f(x_n)·(x_n − x_{n-1}) / (f(x_n) − f(x_{n-1}))
/// ```
///
/// Newton-Raphson with the derivative replaced by a finite difference
/// through the two most recent points — the one method in this module that
/// keeps history beyond the immediate predecessor. Superlinear convergence;
/// a near-zero denominator stalls the run with
/// [`ConvergenceStatus::Diverged`].
pub fn secant(
    f: &dyn Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    config: &IterationConfig,
) -> Result<RootResult, String> {
    config.validate()?;
    if !x0.is_finite() || !x1.is_finite() {
        return Err("Starting points x0 and x1 must be finite".to_string());
    }

    let mut previous = x0;
    let mut current = x1;
    let mut iterations = 0;
    let mut error = (x1 - x0).abs();
    let mut history = vec![previous, current];

    while iterations < config.max_iterations && error > config.tolerance {
        let f_prev = f(previous);
        let f_curr = f(current);

        let denominator = f_curr - f_prev;
        if denominator.abs() < NEAR_ZERO_GUARD {
            warn!(
                "secant: denominator {} too small at x = {}, stopping",
                denominator, current
            );
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Diverged,
                iterations,
                error,
                history,
            });
        }

        let next = current - f_curr * (current - previous) / denominator;
        error = (next - current).abs();

        previous = current;
        current = next;
        iterations += 1;
        history.push(current);

        if !current.is_finite() || current.abs() > DIVERGENCE_THRESHOLD {
            warn!("secant: iterate {} diverged at iteration {}", current, iterations);
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Diverged,
                iterations,
                error,
                history,
            });
        }

        if f(current).abs() < config.tolerance {
            return Ok(RootResult {
                value: current,
                status: ConvergenceStatus::Converged,
                iterations,
                error,
                history,
            });
        }
    }

    let status = if error <= config.tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::MaxIterationsReached
    };

    Ok(RootResult {
        value: current,
        status,
        iterations,
        error,
        history,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // First and second derivatives of f(x) = (1/2)x³ + e^(-x); f itself has
    // no real root, so the methods hunt the critical point f'(x) = 0
    fn cubic_exp_derivative(x: f64) -> f64 {
        1.5 * x * x - (-x).exp()
    }

    fn cubic_exp_second_derivative(x: f64) -> f64 {
        3.0 * x + (-x).exp()
    }

    #[test]
    fn test_newton_finds_sqrt_two() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let config = IterationConfig::new(1e-10, 50);

        let result = newton_raphson(&f, &df, 1.0, &config).unwrap();

        assert!(result.converged());
        assert!((result.value - 2.0_f64.sqrt()).abs() < 1e-9);
        // Quadratic convergence: far fewer iterations than bisection needs
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_newton_on_reference_derivative() {
        let config = IterationConfig::new(1e-10, 100);

        let result = newton_raphson(
            &cubic_exp_derivative,
            &cubic_exp_second_derivative,
            1.0,
            &config,
        )
        .unwrap();

        assert!(result.converged());
        assert!(cubic_exp_derivative(result.value).abs() < 1e-8);
    }

    #[test]
    fn test_newton_stalls_on_flat_derivative() {
        // f' is identically zero: the guard must trip immediately
        let f = |_x: f64| 1.0;
        let df = |_x: f64| 0.0;
        let config = IterationConfig::default();

        let result = newton_raphson(&f, &df, 1.0, &config).unwrap();

        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_secant_matches_newton() {
        let config = IterationConfig::new(1e-10, 100);

        let newton = newton_raphson(
            &cubic_exp_derivative,
            &cubic_exp_second_derivative,
            1.0,
            &config,
        )
        .unwrap();
        let secant_result = secant(&cubic_exp_derivative, 0.0, 1.0, &config).unwrap();

        assert!(secant_result.converged());
        assert!((secant_result.value - newton.value).abs() < 1e-8);
    }

    #[test]
    fn test_secant_history_keeps_both_seeds() {
        let f = |x: f64| x * x - 2.0;
        let config = IterationConfig::new(1e-10, 50);

        let result = secant(&f, 1.0, 2.0, &config).unwrap();

        assert!((result.history[0] - 1.0).abs() < 1e-12);
        assert!((result.history[1] - 2.0).abs() < 1e-12);
        assert!(result.converged());
    }

    #[test]
    fn test_secant_stalls_on_flat_function() {
        let f = |_x: f64| 1.0;
        let result = secant(&f, 0.0, 1.0, &IterationConfig::default()).unwrap();
        assert_eq!(result.status, ConvergenceStatus::Diverged);
    }

    #[test]
    fn test_fixed_point_converges_on_contraction() {
        // g(x) = cos(x) contracts onto the Dottie number ≈ 0.739085
        let g = |x: f64| x.cos();
        let config = IterationConfig::new(1e-8, 200);

        let result = fixed_point(&g, 1.0, &config).unwrap();

        assert!(result.converged());
        assert!((result.value - 0.739_085_133_2).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_point_detects_divergence() {
        // g(x) = 2x doubles every iterate; |x| crosses 1e10 quickly
        let g = |x: f64| 2.0 * x;
        let config = IterationConfig::new(1e-8, 1000);

        let result = fixed_point(&g, 1.0, &config).unwrap();

        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert!(result.value.abs() > DIVERGENCE_THRESHOLD);
    }

    #[test]
    fn test_fixed_point_hits_cap() {
        // g(x) = -x oscillates forever with error 2|x|
        let g = |x: f64| -x;
        let config = IterationConfig::new(1e-8, 25);

        let result = fixed_point(&g, 1.0, &config).unwrap();

        assert_eq!(result.status, ConvergenceStatus::MaxIterationsReached);
        assert_eq!(result.iterations, 25);
        // History holds the seed plus every iterate
        assert_eq!(result.history.len(), 26);
    }

    #[test]
    fn test_iterative_methods_reject_non_finite_seeds() {
        let f = |x: f64| x;
        let df = |_x: f64| 1.0;
        let config = IterationConfig::default();

        assert!(fixed_point(&f, f64::NAN, &config).is_err());
        assert!(newton_raphson(&f, &df, f64::INFINITY, &config).is_err());
        assert!(secant(&f, 0.0, f64::NAN, &config).is_err());
    }
}
