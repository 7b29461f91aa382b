//! Result presentation and export
//!
//! Everything user-facing lives here, deliberately separated from the
//! numerical layers: integrators and analysis produce data structures,
//! this module renders them.

pub mod export;
