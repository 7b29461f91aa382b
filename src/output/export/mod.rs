//! Export module for computed results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module. This design follows the **Open/Closed principle**: adding a
//! new format means adding a file, without ever modifying existing code.
//!
//! # Available formats
//!
//! | Format | Module  | Version |
//! |--------|---------|---------|
//! | CSV    | [`csv`] | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use numlab_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Full export (all grid points)
//! exporter.export_table(&table, None, "methods.csv")?;
//!
//! // Downsampled export to 500 rows
//! exporter.export_trajectory(&trajectory, Some(500), "rk4_light.csv")?;
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level so users can
// write `use numlab_rs::output::export::{CsvExporter, CsvConfig, CsvError}`
// instead of the full sub-module path.
pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::analysis::ComparisonTable;
use crate::solver::Trajectory;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This avoids
/// systematic boxing (`Box<dyn Error>`) and allows the caller to react
/// precisely based on the error type.
///
/// # Parameter `n_points`
///
/// - `None`: exports every grid point (default behaviour)
/// - `Some(n)`: uniformly downsamples to `n` rows, always guaranteeing
///   that the **first and last** points are included
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a single trajectory.
    ///
    /// The file contains two columns: the grid abscissas and the computed
    /// ordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - the trajectory contains no data or non-finite values
    fn export_trajectory(
        &self,
        trajectory: &Trajectory,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports a multi-method comparison table.
    ///
    /// The file contains the abscissa column, the exact-solution column
    /// when present, then one column per method.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any column's length does not match the grid
    /// - the path is invalid
    /// - the table contains no data or non-finite values
    fn export_table(
        &self,
        table: &ComparisonTable,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;
}
