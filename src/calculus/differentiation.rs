//! Finite-difference derivative approximations
//!
//! # Mathematical Background
//!
//! Each formula approximates f'(x) from nearby samples:
//!
//! | Formula | Stencil | Error |
//! |---------|---------|-------|
//! | forward | x, x+h | M·h/2 with M = max\|f''\| |
//! | backward | x−h, x | M·h/2 |
//! | central | x−h, x+h | M·h²/6 with M = max\|f'''\| |
//! | three-point forward | x, x+h, x+2h | O(h²), left endpoint |
//! | three-point backward | x−2h, x−h, x | O(h²), right endpoint |
//!
//! The endpoint formulas matter when samples exist on one side only — e.g.
//! the first and last points of a tabulated trajectory.

/// Forward difference (f(x+h) − f(x)) / h
///
/// First-order accurate: the error is bounded by M·h/2 where M bounds
/// |f''| on [x, x+h].
///
/// # Example
///
/// ```rust
/// use numlab_rs::calculus::forward_difference;
///
/// // f(x) = x·ln(x), f'(2) = 1 + ln(2)
/// let f = |x: f64| x * x.ln();
/// let approx = forward_difference(&f, 2.0, 0.1);
/// assert!((approx - (1.0 + 2.0_f64.ln())).abs() < 0.03);
/// ```
pub fn forward_difference(f: &dyn Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x)) / h
}

/// Backward difference (f(x) − f(x−h)) / h
pub fn backward_difference(f: &dyn Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x) - f(x - h)) / h
}

/// Central (three-point midpoint) difference (f(x+h) − f(x−h)) / (2h)
///
/// Second-order accurate; one order better than the one-sided formulas for
/// the same h.
pub fn central_difference(f: &dyn Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Three-point formula at a left endpoint:
/// (−3f(x) + 4f(x+h) − f(x+2h)) / (2h)
pub fn three_point_forward(f: &dyn Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (-3.0 * f(x) + 4.0 * f(x + h) - f(x + 2.0 * h)) / (2.0 * h)
}

/// Three-point formula at a right endpoint:
/// (3f(x) − 4f(x−h) + f(x−2h)) / (2h)
pub fn three_point_backward(f: &dyn Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (3.0 * f(x) - 4.0 * f(x - h) + f(x - 2.0 * h)) / (2.0 * h)
}

/// Estimate max |f| on [a, b] by sampling a uniform grid
///
/// Used to bound the derivative constants (M) appearing in finite-difference
/// and quadrature error estimates. This is a numerical estimate over
/// `samples` points — callers needing a rigorous bound must supply one
/// analytically. Points where f is non-finite count as infinite, so a
/// domain violation inside [a, b] is conservative rather than silent.
///
/// Swapped bounds are reordered; fewer than two samples are promoted to two.
pub fn max_abs_on_interval(f: &dyn Fn(f64) -> f64, a: f64, b: f64, samples: usize) -> f64 {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let samples = samples.max(2);

    let mut max_value = 0.0_f64;
    for i in 0..samples {
        let t = a + (b - a) * i as f64 / (samples - 1) as f64;
        let v = f(t).abs();
        let v = if v.is_finite() { v } else { f64::INFINITY };
        if v > max_value {
            max_value = v;
        }
    }
    max_value
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_differences_exact_on_linear() {
        // f(x) = 3x + 2 has derivative 3 exactly; every formula must agree
        let f = |x: f64| 3.0 * x + 2.0;
        let (x, h) = (1.5, 1e-6);

        assert!((forward_difference(&f, x, h) - 3.0).abs() < 1e-6);
        assert!((backward_difference(&f, x, h) - 3.0).abs() < 1e-6);
        assert!((central_difference(&f, x, h) - 3.0).abs() < 1e-9);
        assert!((three_point_forward(&f, x, h) - 3.0).abs() < 1e-6);
        assert!((three_point_backward(&f, x, h) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_central_beats_forward() {
        // On f(x) = x·ln(x) at x = 2 the central formula's O(h²) error must
        // beat the forward formula's O(h) error for the same h
        let f = |x: f64| x * x.ln();
        let exact = 1.0 + 2.0_f64.ln();
        let h = 0.1;

        let forward_error = (forward_difference(&f, 2.0, h) - exact).abs();
        let central_error = (central_difference(&f, 2.0, h) - exact).abs();

        assert!(central_error < forward_error / 10.0);
    }

    #[test]
    fn test_forward_difference_within_theoretical_bound() {
        // Error bound M·h/2 with M = max|f''| on [x, x+h]; f''(x) = 1/x
        let f = |x: f64| x * x.ln();
        let exact = 1.0 + 2.0_f64.ln();
        let h = 0.1;

        let m = max_abs_on_interval(&|x| 1.0 / x, 1.8, 2.2, 1000);
        let bound = m * h / 2.0;

        let error = (forward_difference(&f, 2.0, h) - exact).abs();
        assert!(error <= bound, "error {} exceeds bound {}", error, bound);
    }

    #[test]
    fn test_three_point_formulas_second_order() {
        let f = |x: f64| x * x * x;
        let exact = 12.0; // f'(2) = 3·4

        let mut errors_fwd = Vec::new();
        for &h in &[0.1, 0.05, 0.025] {
            errors_fwd.push((three_point_forward(&f, 2.0, h) - exact).abs());
        }

        // Halving h should quarter the error
        for i in 0..errors_fwd.len() - 1 {
            let ratio = errors_fwd[i] / errors_fwd[i + 1];
            assert!(ratio > 3.0 && ratio < 5.0, "ratio {} not second-order", ratio);
        }
    }

    #[test]
    fn test_max_abs_on_interval() {
        // |sin| on [0, π] peaks at 1
        let m = max_abs_on_interval(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1001);
        assert!((m - 1.0).abs() < 1e-4);

        // Swapped bounds are handled
        let m = max_abs_on_interval(&|x: f64| x, 2.0, -3.0, 100);
        assert!((m - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_abs_flags_domain_violations() {
        // ln(x) is NaN for x < 0; the estimate must go conservative
        let m = max_abs_on_interval(&|x: f64| x.ln(), -1.0, 1.0, 100);
        assert!(m.is_infinite());
    }
}
