//! Natural and clamped cubic spline construction
//!
//! # Mathematical Background
//!
//! Given knots x₀ < x₁ < … < x_n with values y₀ … y_n, the cubic spline is
//! the piecewise polynomial
//!
//! ```text
//! S_i(x) = a_i + b_i·dx + c_i·dx² + d_i·dx³,    dx = x − x_i,  x ∈ [x_i, x_{i+1}]
//! ```
//!
//! with S interpolating every knot and S, S', S'' continuous at interior
//! knots. The c coefficients (half the second derivatives) solve a
//! tridiagonal linear system; the boundary condition closes it:
//!
//! - **Natural**: c₀ = c_n = 0 (zero curvature at both ends)
//! - **Clamped**: S'(x₀) = m₀ and S'(x_n) = m_n for prescribed slopes
//!
//! The system is solved by Thomas-algorithm forward elimination (factors
//! ℓ, μ, z) followed by back-substitution for c, after which b and d follow
//! from the data differences.
//!
//! # Guarantees
//!
//! Exact interpolation at the knots and C² continuity everywhere, by
//! construction. No monotonicity or shape preservation between knots.

use nalgebra::DVector;

// =================================================================================================
// Boundary Condition
// =================================================================================================

/// Boundary condition closing the spline's tridiagonal system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    /// Zero second derivative at both endpoints
    Natural,

    /// Prescribed first derivative (slope) at both endpoints
    Clamped {
        /// S'(x₀)
        start_slope: f64,
        /// S'(x_n)
        end_slope: f64,
    },
}

// =================================================================================================
// Spline Segment
// =================================================================================================

/// Cubic coefficients valid on one knot interval [x_i, x_{i+1}]
///
/// Evaluating at offset dx = x − `start` gives
/// a + b·dx + c·dx² + d·dx³.
#[derive(Debug, Clone, Copy)]
pub struct SplineSegment {
    /// Constant term — equals y_i by the interpolation property
    pub a: f64,
    /// Linear coefficient (slope at the left knot)
    pub b: f64,
    /// Quadratic coefficient (half the second derivative at the left knot)
    pub c: f64,
    /// Cubic coefficient
    pub d: f64,
    /// Left knot x_i of the interval this segment covers
    pub start: f64,
}

impl SplineSegment {
    /// Evaluate the cubic at offset dx = x − start
    fn value_at(&self, dx: f64) -> f64 {
        self.a + self.b * dx + self.c * dx * dx + self.d * dx * dx * dx
    }

    /// Second derivative 2c + 6d·dx at offset dx
    fn second_derivative_at(&self, dx: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * dx
    }
}

// =================================================================================================
// Cubic Spline
// =================================================================================================

/// Piecewise-cubic interpolant through ordered sample points
///
/// Segments partition [x₀, x_n] contiguously; evaluation locates the
/// containing segment by a linear scan and evaluates its cubic.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    /// Knot abscissas x₀ … x_n (strictly increasing)
    knots: Vec<f64>,

    /// One segment per knot interval (n segments for n+1 knots)
    segments: Vec<SplineSegment>,
}

impl CubicSpline {
    /// Fit a natural cubic spline (zero end curvature)
    pub fn natural(xs: &[f64], ys: &[f64]) -> Result<Self, String> {
        Self::fit(xs, ys, BoundaryCondition::Natural)
    }

    /// Fit a clamped cubic spline with prescribed end slopes
    pub fn clamped(xs: &[f64], ys: &[f64], start_slope: f64, end_slope: f64) -> Result<Self, String> {
        Self::fit(
            xs,
            ys,
            BoundaryCondition::Clamped {
                start_slope,
                end_slope,
            },
        )
    }

    /// Fit a cubic spline with an explicit boundary condition
    ///
    /// # Errors
    ///
    /// - fewer than two points
    /// - mismatched xs/ys lengths
    /// - xs not strictly increasing
    /// - non-finite input values
    pub fn fit(xs: &[f64], ys: &[f64], boundary: BoundaryCondition) -> Result<Self, String> {
        // ====== Validation ======

        if xs.len() < 2 {
            return Err("Cubic spline requires at least two points".to_string());
        }
        if xs.len() != ys.len() {
            return Err(format!(
                "Coordinate length mismatch: {} abscissas versus {} ordinates",
                xs.len(),
                ys.len()
            ));
        }
        for (i, window) in xs.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(format!(
                    "Abscissas must be strictly increasing, but x[{}] = {} >= x[{}] = {}",
                    i,
                    window[0],
                    i + 1,
                    window[1]
                ));
            }
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err("Spline input contains NaN or infinite values".to_string());
        }

        let n = xs.len() - 1;

        // ====== Step 1: interval widths and right-hand side ======

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut alpha = DVector::<f64>::zeros(n + 1);
        for i in 1..n {
            alpha[i] =
                (3.0 / h[i]) * (ys[i + 1] - ys[i]) - (3.0 / h[i - 1]) * (ys[i] - ys[i - 1]);
        }
        if let BoundaryCondition::Clamped {
            start_slope,
            end_slope,
        } = boundary
        {
            alpha[0] = 3.0 * ((ys[1] - ys[0]) / h[0] - start_slope);
            alpha[n] = 3.0 * (end_slope - (ys[n] - ys[n - 1]) / h[n - 1]);
        }

        // ====== Step 2: Thomas forward elimination (ℓ, μ, z) ======

        let mut ell = DVector::<f64>::zeros(n + 1);
        let mut mu = DVector::<f64>::zeros(n + 1);
        let mut z = DVector::<f64>::zeros(n + 1);

        match boundary {
            BoundaryCondition::Natural => {
                ell[0] = 1.0;
            }
            BoundaryCondition::Clamped { .. } => {
                ell[0] = 2.0 * h[0];
                mu[0] = 0.5;
                z[0] = alpha[0] / ell[0];
            }
        }

        for i in 1..n {
            ell[i] = 2.0 * (xs[i + 1] - xs[i - 1]) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / ell[i];
            z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / ell[i];
        }

        match boundary {
            BoundaryCondition::Natural => {
                ell[n] = 1.0;
                z[n] = 0.0;
            }
            BoundaryCondition::Clamped { .. } => {
                ell[n] = h[n - 1] * (2.0 - mu[n - 1]);
                z[n] = (alpha[n] - h[n - 1] * z[n - 1]) / ell[n];
            }
        }

        // ====== Step 3: back-substitution for c, then b and d ======

        let mut c = DVector::<f64>::zeros(n + 1);
        c[n] = z[n];

        let mut segments = vec![
            SplineSegment {
                a: 0.0,
                b: 0.0,
                c: 0.0,
                d: 0.0,
                start: 0.0,
            };
            n
        ];

        for j in (0..n).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];

            segments[j] = SplineSegment {
                a: ys[j],
                b: (ys[j + 1] - ys[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0,
                c: c[j],
                d: (c[j + 1] - c[j]) / (3.0 * h[j]),
                start: xs[j],
            };
        }

        Ok(Self {
            knots: xs.to_vec(),
            segments,
        })
    }

    /// Evaluate the spline at a query abscissa
    ///
    /// Locates the containing segment by a linear scan (the first interval
    /// whose bracket contains x) and evaluates its cubic. Returns `None`
    /// outside [x₀, x_n].
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let segment = self.locate(x)?;
        Some(segment.value_at(x - segment.start))
    }

    /// Second derivative S''(x), `None` outside the domain
    ///
    /// At the endpoints of a natural spline this is zero to floating-point
    /// tolerance.
    pub fn second_derivative(&self, x: f64) -> Option<f64> {
        let segment = self.locate(x)?;
        Some(segment.second_derivative_at(x - segment.start))
    }

    /// Domain covered by the spline, (x₀, x_n)
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Knot abscissas
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Per-interval coefficient tuples
    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// Find the segment whose interval contains x (linear scan)
    fn locate(&self, x: f64) -> Option<&SplineSegment> {
        let (lo, hi) = self.domain();
        if x < lo || x > hi {
            return None;
        }

        for (i, segment) in self.segments.iter().enumerate() {
            if x >= segment.start && x <= self.knots[i + 1] {
                return Some(segment);
            }
        }

        // Unreachable for in-domain x, but keeps the scan total
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_requires_two_points() {
        let result = CubicSpline::natural(&[1.0], &[2.0]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least two"));
    }

    #[test]
    fn test_spline_rejects_unsorted_abscissas() {
        let result = CubicSpline::natural(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("strictly increasing"));

        // Duplicates are rejected too
        let result = CubicSpline::natural(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_spline_rejects_length_mismatch() {
        let result = CubicSpline::natural(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("mismatch"));
    }

    #[test]
    fn test_spline_rejects_non_finite_values() {
        let result = CubicSpline::natural(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_natural_spline_reproduces_knots() {
        let xs = [0.0, 1.0, 2.5, 4.0, 5.0];
        let ys = [1.0, 2.0, 0.5, -1.0, 3.0];

        let spline = CubicSpline::natural(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let value = spline.evaluate(x).unwrap();
            assert!(
                (value - y).abs() < 1e-10,
                "Knot ({}, {}) reproduced as {}",
                x,
                y,
                value
            );
        }
    }

    #[test]
    fn test_clamped_spline_reproduces_knots() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 0.5, 2.0, 1.5];

        let spline = CubicSpline::clamped(&xs, &ys, 1.0, -1.0).unwrap();

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert!((spline.evaluate(x).unwrap() - y).abs() < 1e-10);
        }
    }

    #[test]
    fn test_natural_spline_end_curvature_is_zero() {
        let xs = [0.0, 1.0, 2.0, 4.0, 7.0];
        let ys = [0.0, 2.0, 1.0, 3.0, -1.0];

        let spline = CubicSpline::natural(&xs, &ys).unwrap();

        assert!(spline.second_derivative(0.0).unwrap().abs() < 1e-10);
        assert!(spline.second_derivative(7.0).unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_clamped_spline_end_slopes() {
        // S'(x) = b at dx = 0; at the right end use b + 2c·h + 3d·h²
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 0.0];
        let (m0, mn) = (2.0, -2.0);

        let spline = CubicSpline::clamped(&xs, &ys, m0, mn).unwrap();
        let segments = spline.segments();

        assert!((segments[0].b - m0).abs() < 1e-10);

        let last = &segments[segments.len() - 1];
        let h = 1.0;
        let end_slope = last.b + 2.0 * last.c * h + 3.0 * last.d * h * h;
        assert!((end_slope - mn).abs() < 1e-10);
    }

    #[test]
    fn test_spline_continuity_at_interior_knots() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, -1.0, 2.0];

        let spline = CubicSpline::natural(&xs, &ys).unwrap();
        let segments = spline.segments();

        for i in 0..segments.len() - 1 {
            let h = xs[i + 1] - xs[i];
            let left = &segments[i];
            let right = &segments[i + 1];

            // Value continuity
            let left_value = left.a + left.b * h + left.c * h * h + left.d * h * h * h;
            assert!((left_value - right.a).abs() < 1e-10);

            // First-derivative continuity
            let left_slope = left.b + 2.0 * left.c * h + 3.0 * left.d * h * h;
            assert!((left_slope - right.b).abs() < 1e-10);

            // Second-derivative continuity
            let left_curv = 2.0 * left.c + 6.0 * left.d * h;
            assert!((left_curv - 2.0 * right.c).abs() < 1e-10);
        }
    }

    #[test]
    fn test_spline_is_exact_for_straight_lines() {
        // A line is its own natural spline: zero curvature everywhere
        let xs = [0.0, 1.0, 3.0, 6.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();

        let spline = CubicSpline::natural(&xs, &ys).unwrap();

        for &x in &[0.5, 1.7, 2.9, 4.2, 5.9] {
            assert!((spline.evaluate(x).unwrap() - (2.0 * x + 1.0)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_spline_outside_domain() {
        let spline = CubicSpline::natural(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();

        assert!(spline.evaluate(-0.1).is_none());
        assert!(spline.evaluate(2.1).is_none());
        assert!(spline.second_derivative(5.0).is_none());
    }

    #[test]
    fn test_spline_two_points() {
        // Degenerate case: one interval; the natural spline is the chord
        let spline = CubicSpline::natural(&[0.0, 2.0], &[1.0, 5.0]).unwrap();

        assert_eq!(spline.segments().len(), 1);
        assert!((spline.evaluate(1.0).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_clamped_differs_from_natural_between_knots() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 0.0];

        let natural = CubicSpline::natural(&xs, &ys).unwrap();
        let clamped = CubicSpline::clamped(&xs, &ys, 3.0, -3.0).unwrap();

        // Same knots, different interiors
        let x = 0.5;
        assert!((natural.evaluate(x).unwrap() - clamped.evaluate(x).unwrap()).abs() > 1e-3);
    }
}
