//! End-to-end properties of the differentiation and quadrature routines
//!
//! The reference functions are f(x) = x·ln(x) (derivative 1 + ln(x)) and
//! f(x) = 1 + ln(x) (definite integral b·ln(b) − a·ln(a)).

use numlab_rs::calculus::{
    composite_midpoint, composite_simpson, composite_trapezoid, forward_difference,
    max_abs_on_interval,
};

fn x_ln_x(x: f64) -> f64 {
    x * x.ln()
}

fn one_plus_ln(x: f64) -> f64 {
    1.0 + x.ln()
}

/// ∫ₐᵇ (1 + ln x) dx = b·ln(b) − a·ln(a)
fn exact_integral(a: f64, b: f64) -> f64 {
    b * b.ln() - a * a.ln()
}

#[test]
fn test_forward_difference_within_documented_bound() {
    // f'(2) = 1 + ln(2); the forward-difference error is bounded by M·h/2
    // with M = max|f''| on [1.8, 2.2] and f''(x) = 1/x
    let x = 2.0;
    let h = 0.1;
    let exact = 1.0 + 2.0_f64.ln();

    let approx = forward_difference(&x_ln_x, x, h);

    let m = max_abs_on_interval(&|t| 1.0 / t, 1.8, 2.2, 1000);
    let bound = m * h / 2.0;

    let error = (approx - exact).abs();
    assert!(
        error <= bound,
        "forward difference error {} exceeds M·h/2 = {}",
        error,
        bound
    );
}

#[test]
fn test_composite_simpson_fourth_order_on_reference() {
    let exact = exact_integral(1.0, 2.0);

    let mut errors = Vec::new();
    for &pairs in &[1usize, 2, 4, 8] {
        errors.push((composite_simpson(&one_plus_ln, 1.0, 2.0, pairs).unwrap() - exact).abs());
    }

    // Error must decrease at fourth order: ratio ≈ 16 per doubling
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        assert!(
            ratio > 13.0 && ratio < 19.0,
            "Simpson ratio {} not fourth-order at refinement {}",
            ratio,
            i
        );
    }
}

#[test]
fn test_composite_midpoint_second_order_on_reference() {
    let exact = exact_integral(1.0, 2.0);

    let mut errors = Vec::new();
    for &n in &[2usize, 4, 8, 16] {
        errors.push((composite_midpoint(&one_plus_ln, 1.0, 2.0, n).unwrap() - exact).abs());
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        assert!(
            ratio > 3.5 && ratio < 4.5,
            "midpoint ratio {} not second-order at refinement {}",
            ratio,
            i
        );
    }
}

#[test]
fn test_quadrature_rules_agree_on_fine_grids() {
    let exact = exact_integral(1.0, 2.0);

    let simpson = composite_simpson(&one_plus_ln, 1.0, 2.0, 50).unwrap();
    let midpoint = composite_midpoint(&one_plus_ln, 1.0, 2.0, 100).unwrap();
    let trapezoid = composite_trapezoid(&one_plus_ln, 1.0, 2.0, 100).unwrap();

    assert!((simpson - exact).abs() < 1e-9);
    assert!((midpoint - exact).abs() < 1e-5);
    assert!((trapezoid - exact).abs() < 1e-5);
}

#[test]
fn test_midpoint_and_trapezoid_bracket_the_integral() {
    // 1 + ln(x) is concave, so midpoint overestimates and trapezoid
    // underestimates; the exact value lies between them
    let exact = exact_integral(1.0, 2.0);

    let midpoint = composite_midpoint(&one_plus_ln, 1.0, 2.0, 8).unwrap();
    let trapezoid = composite_trapezoid(&one_plus_ln, 1.0, 2.0, 8).unwrap();

    assert!(trapezoid < exact, "trapezoid {} not below exact {}", trapezoid, exact);
    assert!(midpoint > exact, "midpoint {} not above exact {}", midpoint, exact);
}
