//! CSV export of trajectories and method-comparison tables
//!
//! Writes plain-text tables compatible with Excel, pandas and MATLAB:
//! a header row of column names, then one row per grid point. Abscissas
//! use fixed-point formatting (default 6 decimals), computed values use
//! scientific notation (default 12 significant decimals) so that
//! method-to-method differences far below 1 survive the round trip.
//!
//! # Example output
//!
//! ```csv
//! x,exact,Forward Euler,Runge-Kutta 4 (RK4)
//! 1.000000,0.000000000000e0,0.000000000000e0,0.000000000000e0
//! 1.400000,4.710567517979e-1,4.000000000000e-1,4.710300231858e-1
//! ...
//! ```
//!
//! With metadata enabled, `#`-prefixed comment lines precede the header:
//!
//! ```csv
//! # Method Comparison
//! # Generated: 2026-08-07T15:30:00+00:00
//! # Problem: y' = 1 + y/x
//! # Steps: 10
//! #
//! x,exact,...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::analysis::ComparisonTable;
use crate::output::export::Exporter;
use crate::solver::Trajectory;

// =============================================================================
// Error type
// =============================================================================

/// Failures specific to CSV export
#[derive(Debug, Error)]
pub enum CsvError {
    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to export
    #[error("empty data: nothing to export")]
    EmptyData,

    /// A column's length does not match the grid
    #[error("column '{column}' has {found} values but the grid has {expected} points")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A NaN or infinite value would corrupt the table
    #[error("non-finite value in column '{column}' at row {row}")]
    NonFinite { column: String, row: usize },
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal places for the abscissa column (default: 6)
    pub x_precision: usize,

    /// Decimal places for computed values in scientific notation
    /// (default: 12)
    pub value_precision: usize,

    /// Header for the abscissa column (default: "x")
    pub x_header: String,

    /// Header for the exact-solution column (default: "exact")
    pub exact_header: String,

    /// Include `#`-prefixed metadata comment lines (default: false)
    pub include_metadata: bool,

    /// Metadata to include when enabled
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            x_precision: 6,
            value_precision: 12,
            x_header: "x".to_string(),
            exact_header: "exact".to_string(),
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: attach metadata and enable the comment header
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata rendered as `#` comment lines before the header
///
/// All fields are optional; only populated fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Problem name (e.g. "y' = 1 + y/x")
    pub problem: Option<String>,

    /// Integration span
    pub span: Option<f64>,

    /// Step count
    pub steps: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata for a comparison run
    pub fn for_run(problem: &str, span: f64, steps: usize) -> Self {
        Self {
            problem: Some(problem.to_string()),
            span: Some(span),
            steps: Some(steps),
            custom: Vec::new(),
        }
    }

    /// Add a custom key/value line
    pub fn add_custom(&mut self, key: &str, value: &str) {
        self.custom.push((key.to_string(), value.to_string()));
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of the [`Exporter`] trait
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    /// Formatting configuration
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Exporter with a custom configuration
    pub fn with_config(config: CsvConfig) -> Self {
        Self { config }
    }

    fn write_metadata(&self, out: &mut impl Write, title: &str) -> Result<(), CsvError> {
        if !self.config.include_metadata {
            return Ok(());
        }
        let Some(metadata) = &self.config.metadata else {
            return Ok(());
        };

        writeln!(out, "# {}", title)?;
        writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

        if let Some(problem) = &metadata.problem {
            writeln!(out, "# Problem: {}", problem)?;
        }
        if let Some(span) = metadata.span {
            writeln!(out, "# Span: {}", span)?;
        }
        if let Some(steps) = metadata.steps {
            writeln!(out, "# Steps: {}", steps)?;
        }
        for (key, value) in &metadata.custom {
            writeln!(out, "# {}: {}", key, value)?;
        }
        writeln!(out, "#")?;

        Ok(())
    }

    fn format_x(&self, value: f64) -> String {
        format!("{:.*}", self.config.x_precision, value)
    }

    fn format_value(&self, value: f64) -> String {
        format!("{:.*e}", self.config.value_precision, value)
    }
}

/// Row indices for a uniform downsample that always keeps both endpoints
fn downsample_indices(rows: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        None => (0..rows).collect(),
        Some(n) if n >= rows || n < 2 => (0..rows).collect(),
        Some(n) => {
            let mut indices: Vec<usize> = (0..n)
                .map(|i| (i as f64 * (rows - 1) as f64 / (n - 1) as f64).round() as usize)
                .collect();
            indices.dedup();
            indices
        }
    }
}

fn check_finite(column: &str, values: &[f64]) -> Result<(), CsvError> {
    for (row, value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(CsvError::NonFinite {
                column: column.to_string(),
                row,
            });
        }
    }
    Ok(())
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_trajectory(
        &self,
        trajectory: &Trajectory,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        // ====== Validation ======

        if trajectory.is_empty() {
            return Err(CsvError::EmptyData);
        }
        if trajectory.abscissas.len() != trajectory.ordinates.len() {
            return Err(CsvError::LengthMismatch {
                column: "ordinates".to_string(),
                expected: trajectory.abscissas.len(),
                found: trajectory.ordinates.len(),
            });
        }
        check_finite(&self.config.x_header, &trajectory.abscissas)?;
        check_finite("ordinates", &trajectory.ordinates)?;

        // ====== Write ======

        let mut out = BufWriter::new(File::create(path)?);
        self.write_metadata(&mut out, "Trajectory")?;

        let method = trajectory
            .metadata
            .get("integrator")
            .map(String::as_str)
            .unwrap_or("value");
        writeln!(out, "{}{}{}", self.config.x_header, self.config.delimiter, method)?;

        for i in downsample_indices(trajectory.len(), n_points) {
            writeln!(
                out,
                "{}{}{}",
                self.format_x(trajectory.abscissas[i]),
                self.config.delimiter,
                self.format_value(trajectory.ordinates[i])
            )?;
        }

        Ok(())
    }

    fn export_table(
        &self,
        table: &ComparisonTable,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        // ====== Validation ======

        let rows = table.rows();
        if rows == 0 || table.columns.is_empty() {
            return Err(CsvError::EmptyData);
        }
        check_finite(&self.config.x_header, &table.abscissas)?;
        if let Some(exact) = &table.exact {
            if exact.len() != rows {
                return Err(CsvError::LengthMismatch {
                    column: self.config.exact_header.clone(),
                    expected: rows,
                    found: exact.len(),
                });
            }
            check_finite(&self.config.exact_header, exact)?;
        }
        for column in &table.columns {
            if column.values.len() != rows {
                return Err(CsvError::LengthMismatch {
                    column: column.method.clone(),
                    expected: rows,
                    found: column.values.len(),
                });
            }
            check_finite(&column.method, &column.values)?;
        }

        // ====== Write ======

        let mut out = BufWriter::new(File::create(path)?);
        self.write_metadata(&mut out, "Method Comparison")?;

        // Header: x, exact?, then one column per method
        let mut header = self.config.x_header.clone();
        if table.exact.is_some() {
            header.push(self.config.delimiter);
            header.push_str(&self.config.exact_header);
        }
        for column in &table.columns {
            header.push(self.config.delimiter);
            header.push_str(&column.method);
        }
        writeln!(out, "{}", header)?;

        for i in downsample_indices(rows, n_points) {
            write!(out, "{}", self.format_x(table.abscissas[i]))?;
            if let Some(exact) = &table.exact {
                write!(out, "{}{}", self.config.delimiter, self.format_value(exact[i]))?;
            }
            for column in &table.columns {
                write!(
                    out,
                    "{}{}",
                    self.config.delimiter,
                    self.format_value(column.values[i])
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
