//! Interpolation-property tests for the cubic spline builder

use numlab_rs::spline::{BoundaryCondition, CubicSpline};

/// Sample points from a smooth curve for interpolation tests
fn sine_samples(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n)
        .map(|i| i as f64 * std::f64::consts::PI / (n - 1) as f64)
        .collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    (xs, ys)
}

#[test]
fn test_natural_spline_interpolates_every_knot() {
    let (xs, ys) = sine_samples(9);
    let spline = CubicSpline::natural(&xs, &ys).unwrap();

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let value = spline.evaluate(x).unwrap();
        assert!(
            (value - y).abs() < 1e-10,
            "natural spline missed knot ({}, {}): got {}",
            x,
            y,
            value
        );
    }
}

#[test]
fn test_clamped_spline_interpolates_every_knot() {
    let (xs, ys) = sine_samples(9);
    // True end slopes of sin: cos(0) = 1, cos(π) = -1
    let spline = CubicSpline::clamped(&xs, &ys, 1.0, -1.0).unwrap();

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        assert!((spline.evaluate(x).unwrap() - y).abs() < 1e-10);
    }
}

#[test]
fn test_natural_spline_zero_end_curvature() {
    let (xs, ys) = sine_samples(9);
    let spline = CubicSpline::natural(&xs, &ys).unwrap();
    let (lo, hi) = spline.domain();

    assert!(spline.second_derivative(lo).unwrap().abs() < 1e-10);
    assert!(spline.second_derivative(hi).unwrap().abs() < 1e-10);
}

#[test]
fn test_clamped_beats_natural_when_end_curvature_is_nonzero() {
    // cos has f''(0) = -1, so the natural condition S''(0) = 0 is wrong at
    // the boundary while the clamped spline (true end slopes 0 and 0)
    // keeps its full accuracy there
    let xs: Vec<f64> = (0..7)
        .map(|i| i as f64 * std::f64::consts::PI / 6.0)
        .collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.cos()).collect();

    let natural = CubicSpline::natural(&xs, &ys).unwrap();
    let clamped = CubicSpline::clamped(&xs, &ys, 0.0, 0.0).unwrap();

    let probe = 0.2; // close to the left end, where boundary conditions matter
    let natural_error = (natural.evaluate(probe).unwrap() - probe.cos()).abs();
    let clamped_error = (clamped.evaluate(probe).unwrap() - probe.cos()).abs();

    assert!(
        clamped_error < natural_error,
        "clamped error {} not better than natural {} near the boundary",
        clamped_error,
        natural_error
    );
}

#[test]
fn test_spline_between_knots_approximates_generator() {
    let (xs, ys) = sine_samples(17);
    let spline = CubicSpline::natural(&xs, &ys).unwrap();

    // Dense probe between knots: cubic spline on 17 sine samples is accurate
    // to well under 1e-3 in the interior
    for i in 0..100 {
        let x = 0.3 + i as f64 * (std::f64::consts::PI - 0.6) / 99.0;
        let value = spline.evaluate(x).unwrap();
        assert!(
            (value - x.sin()).abs() < 1e-3,
            "spline at {} deviates: {} vs {}",
            x,
            value,
            x.sin()
        );
    }
}

#[test]
fn test_fit_with_explicit_boundary_enum() {
    let (xs, ys) = sine_samples(5);

    let natural = CubicSpline::fit(&xs, &ys, BoundaryCondition::Natural).unwrap();
    let clamped = CubicSpline::fit(
        &xs,
        &ys,
        BoundaryCondition::Clamped {
            start_slope: 1.0,
            end_slope: -1.0,
        },
    )
    .unwrap();

    assert_eq!(natural.segments().len(), 4);
    assert_eq!(clamped.segments().len(), 4);
}

#[test]
fn test_spline_error_conditions() {
    // Fewer than two points
    assert!(CubicSpline::natural(&[1.0], &[1.0]).is_err());

    // Not strictly increasing
    assert!(CubicSpline::natural(&[0.0, 0.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
    assert!(CubicSpline::natural(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
}

#[test]
fn test_segments_partition_domain_contiguously() {
    let (xs, ys) = sine_samples(9);
    let spline = CubicSpline::natural(&xs, &ys).unwrap();

    let segments = spline.segments();
    assert_eq!(segments.len(), xs.len() - 1);

    // Each segment starts at its knot; starts are the knots in order
    for (segment, &knot) in segments.iter().zip(xs.iter()) {
        assert!((segment.start - knot).abs() < 1e-15);
    }

    // a-coefficients carry the knot values (interpolation at left ends)
    for (segment, &y) in segments.iter().zip(ys.iter()) {
        assert!((segment.a - y).abs() < 1e-15);
    }
}
