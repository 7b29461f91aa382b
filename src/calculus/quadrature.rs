//! Newton-Cotes quadrature rules
//!
//! # Mathematical Background
//!
//! Simple rules approximate ∫ₐᵇ f over one interval:
//!
//! ```text
//! midpoint:  (b−a)·f((a+b)/2)
//! trapezoid: (b−a)·(f(a) + f(b))/2
//! Simpson:   (b−a)/6·(f(a) + 4f((a+b)/2) + f(b))
//! ```
//!
//! Composite rules split [a, b] into n subintervals of width h = (b−a)/n and
//! apply the simple rule to each. Convergence orders in h:
//!
//! | Rule | Order | Error term |
//! |------|-------|------------|
//! | composite midpoint | 2 | (b−a)·h²/24·f''(ξ) |
//! | composite trapezoid | 2 | −(b−a)·h²/12·f''(ξ) |
//! | composite Simpson | 4 | −(b−a)·h⁴/180·f⁗(ξ) |
//!
//! All composite loops index nodes by integer count; no floating-point
//! `while x < b` accumulation, which can gain or lose a node when h does
//! not divide b − a exactly in binary.

// =================================================================================================
// Simple rules
// =================================================================================================

/// Simple midpoint rule on [a, b]: (b−a)·f((a+b)/2)
pub fn midpoint_rule(f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    (b - a) * f(0.5 * (a + b))
}

/// Simple trapezoid rule on [a, b]: (b−a)·(f(a) + f(b))/2
pub fn trapezoid_rule(f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    (b - a) * (f(a) + f(b)) / 2.0
}

/// Simple Simpson rule on [a, b]: (b−a)/6·(f(a) + 4f(m) + f(b))
pub fn simpson_rule(f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    let m = 0.5 * (a + b);
    (b - a) / 6.0 * (f(a) + 4.0 * f(m) + f(b))
}

// =================================================================================================
// Composite rules
// =================================================================================================

/// Composite midpoint rule with n subintervals
///
/// Second-order accurate in h = (b−a)/n.
///
/// # Errors
///
/// Rejects n = 0.
pub fn composite_midpoint(f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> Result<f64, String> {
    if n == 0 {
        return Err("Subinterval count n must be a positive integer".to_string());
    }

    let h = (b - a) / n as f64;
    let mut total = 0.0;
    for i in 0..n {
        let midpoint = a + (i as f64 + 0.5) * h;
        total += f(midpoint);
    }
    Ok(h * total)
}

/// Composite trapezoid rule with n subintervals
///
/// Second-order accurate in h = (b−a)/n.
///
/// # Errors
///
/// Rejects n = 0.
pub fn composite_trapezoid(f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> Result<f64, String> {
    if n == 0 {
        return Err("Subinterval count n must be a positive integer".to_string());
    }

    let h = (b - a) / n as f64;
    let mut interior = 0.0;
    for i in 1..n {
        interior += f(a + i as f64 * h);
    }
    Ok(h * (0.5 * f(a) + interior + 0.5 * f(b)))
}

/// Composite Simpson rule with `pairs` subinterval pairs (n = 2·pairs nodes)
///
/// Simpson's rule needs an even number of subintervals; taking the pair
/// count as the parameter makes an odd count unrepresentable. Fourth-order
/// accurate in h = (b−a)/(2·pairs).
///
/// ```text
/// h/3·(f(a) + 4·Σ f(odd nodes) + 2·Σ f(even interior nodes) + f(b))
/// ```
///
/// # Errors
///
/// Rejects pairs = 0.
pub fn composite_simpson(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    pairs: usize,
) -> Result<f64, String> {
    if pairs == 0 {
        return Err("Subinterval pair count must be a positive integer".to_string());
    }

    let n = 2 * pairs;
    let h = (b - a) / n as f64;

    // Odd nodes x₁, x₃, …, x_{n−1} carry weight 4
    let mut odd_sum = 0.0;
    for k in 0..pairs {
        odd_sum += f(a + (2 * k + 1) as f64 * h);
    }

    // Even interior nodes x₂, x₄, …, x_{n−2} carry weight 2
    let mut even_sum = 0.0;
    for k in 1..pairs {
        even_sum += f(a + (2 * k) as f64 * h);
    }

    Ok(h / 3.0 * (f(a) + 4.0 * odd_sum + 2.0 * even_sum + f(b)))
}

// =================================================================================================
// Tests
// =================================================================================================
