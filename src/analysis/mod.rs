//! Error analysis and method comparison
//!
//! This module is the presentation-free analysis layer: it turns raw
//! trajectories into error records and side-by-side comparison tables.
//! Nothing here prints; the [`output`](crate::output) layer consumes these
//! structures for export.

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand pointwise error computation off to Rayon is an
// analysis-execution concern, not a numerical one, so the knob lives here.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every metrics call. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronization point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

mod metrics;
mod comparison;

pub use comparison::{ComparisonTable, MethodColumn, MethodComparison};
pub use metrics::ErrorMetrics;

/// Default number of trajectory points above which [`ErrorMetrics`]
/// switches to parallel iteration.
///
/// Below this point the overhead of Rayon's thread-pool dispatch outweighs
/// the per-element work of the subtraction closures.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Pointwise error computation uses sequential iteration when a trajectory
/// contains fewer points than this value and switches to Rayon when it
/// contains more — but only when the crate is compiled with the `parallel`
/// feature.
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-element threshold would force
/// parallel dispatch on every single-element computation, which is never
/// the intended behaviour.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value (including
        // the original default) never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Tests
// =================================================================================================
