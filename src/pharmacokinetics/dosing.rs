//! Dose routes and administration-rate functions
//!
//! The administration rate u(t) is the source term of the one-compartment
//! ODE. Its shape depends on the route:
//!
//! - **IV**: an instantaneous bolus at each dose time, approximated as a
//!   rectangular pulse one grid step wide and normalized so its integral
//!   equals the dose
//! - **Oral**: first-order absorption, u(t) = F·ka·D·e^(−ka·Δt) summed over
//!   doses already administered (bioavailability F = 1)
//! - **Topical**: the oral model with the absorption constant slowed to
//!   0.3·ka
//!
//! Multiple doses are spaced `interval` apart, starting at t = 0.

use serde::{Deserialize, Serialize};

/// Administration route of a dose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseRoute {
    /// Intravenous bolus
    Iv,
    /// Oral, first-order absorption
    Oral,
    /// Topical, slow first-order absorption
    Topical,
}

/// A dosing schedule: what is given, how, how often
#[derive(Debug, Clone, Copy)]
pub struct DosingRegimen {
    /// Dose per administration (mg)
    pub dose: f64,

    /// Administration route
    pub route: DoseRoute,

    /// Number of doses, spaced `interval` apart starting at t = 0
    pub num_doses: usize,

    /// Time between doses (hours); irrelevant for a single dose
    pub interval: f64,

    /// Absorption constant ka (1/h) for oral/topical routes
    pub absorption_rate: f64,

    /// Width of the rectangular pulse approximating an IV bolus (hours)
    ///
    /// Must match the simulation grid step: the pulse height is dose/width,
    /// so its integral over one step equals the dose.
    pub bolus_width: f64,
}

/// Fraction of an oral dose reaching the plasma
const BIOAVAILABILITY: f64 = 1.0;

/// Topical absorption relative to the oral constant
const TOPICAL_FACTOR: f64 = 0.3;

impl DosingRegimen {
    /// Administration rate u(t) in mg/h
    pub fn input_rate(&self, t: f64) -> f64 {
        let mut total = 0.0;

        for i in 0..self.num_doses {
            let dose_time = i as f64 * self.interval;

            match self.route {
                DoseRoute::Iv => {
                    // Rectangular pulse standing in for the Dirac delta
                    if (t - dose_time).abs() < self.bolus_width / 2.0 {
                        total += self.dose / self.bolus_width;
                    }
                }
                DoseRoute::Oral => {
                    if t >= dose_time {
                        let elapsed = t - dose_time;
                        total += self.absorption_rate
                            * BIOAVAILABILITY
                            * self.dose
                            * (-self.absorption_rate * elapsed).exp();
                    }
                }
                DoseRoute::Topical => {
                    let ka = self.absorption_rate * TOPICAL_FACTOR;
                    if t >= dose_time {
                        let elapsed = t - dose_time;
                        total += ka * self.dose * (-ka * elapsed).exp();
                    }
                }
            }
        }

        total
    }
}

// =================================================================================================
// Tests
// =================================================================================================
