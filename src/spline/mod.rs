//! Cubic spline interpolation
//!
//! Builds piecewise-cubic interpolants through ordered sample points with
//! either natural (zero curvature at the ends) or clamped (prescribed end
//! slopes) boundary conditions.
//!
//! # Quick Start
//!
//! ```rust
//! use numlab_rs::spline::CubicSpline;
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let spline = CubicSpline::natural(&xs, &ys).unwrap();
//!
//! // Exact at knots, smooth in between
//! assert!((spline.evaluate(2.0).unwrap() - 4.0).abs() < 1e-12);
//! assert!(spline.evaluate(1.5).is_some());
//! assert!(spline.evaluate(10.0).is_none());  // outside the domain
//! ```

mod cubic;

pub use cubic::{BoundaryCondition, CubicSpline, SplineSegment};
