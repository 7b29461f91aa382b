//! Error records comparing a computed series against a reference
//!
//! Field names double as the serialized wire shape of the pharmacokinetics
//! simulation response, so this struct is both the internal error record
//! and the external payload.

use serde::Serialize;

#[cfg(feature = "parallel")]
use crate::analysis::parallel_threshold;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Deviation of an approximate series from a reference series
///
/// Used only for reporting; no other component consumes it.
///
/// Relative errors are expressed in percent, with points where the
/// reference is exactly zero contributing zero (the conventional guard
/// against division by zero in relative-error tables).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMetrics {
    /// |reference − approximate| at every point
    pub absolute_error: Vec<f64>,

    /// Relative deviation in percent at every point (0 where reference = 0)
    pub relative_error: Vec<f64>,

    /// Root-mean-square error
    pub rmse: f64,

    /// Largest pointwise absolute error
    pub max_error: f64,

    /// Largest pointwise relative error (percent)
    pub max_relative_error: f64,

    /// Mean pointwise absolute error
    pub mean_absolute_error: f64,
}

impl ErrorMetrics {
    /// Compare an approximate series against a reference series
    ///
    /// Switches to Rayon for the pointwise maps when the series length
    /// reaches the configured threshold and the `parallel` feature is on.
    ///
    /// # Errors
    ///
    /// Rejects empty input and mismatched lengths.
    pub fn between(reference: &[f64], approximate: &[f64]) -> Result<Self, String> {
        if reference.is_empty() {
            return Err("Error metrics require at least one point".to_string());
        }
        if reference.len() != approximate.len() {
            return Err(format!(
                "Series length mismatch: {} reference points versus {} approximate",
                reference.len(),
                approximate.len()
            ));
        }

        let absolute_error = pointwise(reference, approximate, |r, a| (r - a).abs());
        let relative_error = pointwise(reference, approximate, |r, a| {
            if r != 0.0 {
                ((r - a) / r).abs() * 100.0
            } else {
                0.0
            }
        });

        let n = reference.len() as f64;
        let mean_absolute_error = absolute_error.iter().sum::<f64>() / n;
        let mse = absolute_error.iter().map(|e| e * e).sum::<f64>() / n;
        let max_error = absolute_error.iter().cloned().fold(0.0, f64::max);
        let max_relative_error = relative_error.iter().cloned().fold(0.0, f64::max);

        Ok(Self {
            absolute_error,
            relative_error,
            rmse: mse.sqrt(),
            max_error,
            max_relative_error,
            mean_absolute_error,
        })
    }
}

/// Apply a binary map over two series, parallel above the threshold
#[cfg(feature = "parallel")]
fn pointwise(left: &[f64], right: &[f64], op: impl Fn(f64, f64) -> f64 + Send + Sync) -> Vec<f64> {
    if left.len() >= parallel_threshold() {
        left.par_iter()
            .zip(right.par_iter())
            .map(|(&l, &r)| op(l, r))
            .collect()
    } else {
        left.iter().zip(right.iter()).map(|(&l, &r)| op(l, r)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn pointwise(left: &[f64], right: &[f64], op: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    left.iter().zip(right.iter()).map(|(&l, &r)| op(l, r)).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
