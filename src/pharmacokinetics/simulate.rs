//! Simulation entry point and its serializable request/response types
//!
//! The request mirrors the JSON body of the simulation API (`t_max, dt, V,
//! Q, dose, route, ka?, num_doses?, interval?`); the response carries the
//! time grid, the exact/Euler/RK4 concentration series and per-method
//! error records.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::ErrorMetrics;
use crate::pharmacokinetics::{DoseRoute, DosingRegimen, OneCompartmentModel};
use crate::solver::{EulerIntegrator, IntegrationConfig, Ivp, Rk4Integrator, StepIntegrator};

// =================================================================================================
// Request / response types
// =================================================================================================

/// Parameters of one pharmacokinetics simulation
///
/// Field names and defaults match the JSON wire shape: `V` and `Q` keep
/// their capitalized keys, `ka` defaults to 1.0 when omitted, `num_doses`
/// to 1 and `interval` to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Simulation horizon (hours)
    pub t_max: f64,

    /// Time step (hours)
    pub dt: f64,

    /// Effective plasma volume V (L)
    #[serde(rename = "V")]
    pub volume: f64,

    /// Metabolic elimination rate Q (L/h)
    #[serde(rename = "Q")]
    pub clearance: f64,

    /// Dose per administration (mg)
    pub dose: f64,

    /// Administration route
    pub route: DoseRoute,

    /// Absorption constant ka (1/h); defaults to 1.0 when absent
    #[serde(default)]
    pub ka: Option<f64>,

    /// Number of doses (default 1)
    #[serde(default = "default_num_doses")]
    pub num_doses: usize,

    /// Interval between doses in hours (default 0)
    #[serde(default)]
    pub interval: f64,
}

fn default_num_doses() -> usize {
    1
}

/// Per-method error records of a simulation
#[derive(Debug, Clone, Serialize)]
pub struct SimulationErrors {
    /// Euler deviation from the exact solution
    pub euler: ErrorMetrics,

    /// RK4 deviation from the exact solution
    pub runge_kutta: ErrorMetrics,
}

/// Concentration series computed by every method, plus error records
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    /// Time grid (hours)
    pub time: Vec<f64>,

    /// Integrating-factor (exact) solution
    pub exact: Vec<f64>,

    /// Forward Euler trajectory
    pub euler: Vec<f64>,

    /// RK4 trajectory
    pub runge_kutta: Vec<f64>,

    /// Deviation of each numerical method from the exact series
    pub errors: SimulationErrors,
}

// =================================================================================================
// Simulation
// =================================================================================================

/// Run one pharmacokinetics simulation
///
/// Builds the time grid 0, dt, …, t_max, assembles the dosing schedule for
/// the requested route, and computes the exact, Euler and RK4 concentration
/// series with error records for both numerical methods.
///
/// # Errors
///
/// Rejects non-positive `t_max`, `dt`, `volume`, negative `clearance`,
/// `dose` or `interval`, a step larger than the horizon, and non-finite
/// values. Integration failures (NaN/Inf mid-run) propagate as errors.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationOutput, String> {
    validate_request(request)?;

    // Grid: steps chosen so the final point lands on t_max (rounded to the
    // nearest whole step when dt does not divide t_max exactly)
    let steps = ((request.t_max / request.dt).round() as usize).max(1);
    let times: Vec<f64> = (0..=steps).map(|i| i as f64 * request.dt).collect();

    let model = OneCompartmentModel {
        volume: request.volume,
        clearance: request.clearance,
        regimen: DosingRegimen {
            dose: request.dose,
            route: request.route,
            num_doses: request.num_doses,
            interval: request.interval,
            absorption_rate: request.ka.unwrap_or(1.0),
            bolus_width: request.dt,
        },
    };

    debug!(
        "simulate: route {:?}, {} doses, {} grid points",
        request.route,
        request.num_doses,
        times.len()
    );

    // Exact reference on the same grid the numerical methods visit
    let exact = model.exact_solution(&times, 0.0);

    // Numerical trajectories through the solver layer
    let config = IntegrationConfig::from_step(request.dt, steps);

    let euler = EulerIntegrator::new()
        .integrate(&Ivp::new(Box::new(model), 0.0, 0.0), &config)?
        .ordinates;
    let runge_kutta = Rk4Integrator::new()
        .integrate(&Ivp::new(Box::new(model), 0.0, 0.0), &config)?
        .ordinates;

    let errors = SimulationErrors {
        euler: ErrorMetrics::between(&exact, &euler)?,
        runge_kutta: ErrorMetrics::between(&exact, &runge_kutta)?,
    };

    Ok(SimulationOutput {
        time: times,
        exact,
        euler,
        runge_kutta,
        errors,
    })
}

fn validate_request(request: &SimulationRequest) -> Result<(), String> {
    let finite = [
        request.t_max,
        request.dt,
        request.volume,
        request.clearance,
        request.dose,
        request.interval,
        request.ka.unwrap_or(1.0),
    ];
    if finite.iter().any(|v| !v.is_finite()) {
        return Err("Simulation parameters must be finite".to_string());
    }

    if request.t_max <= 0.0 {
        return Err("t_max must be positive".to_string());
    }
    if request.dt <= 0.0 {
        return Err("dt must be positive".to_string());
    }
    if request.dt > request.t_max {
        return Err(format!(
            "dt = {} exceeds the simulation horizon t_max = {}",
            request.dt, request.t_max
        ));
    }
    if request.volume <= 0.0 {
        return Err("Volume V must be positive".to_string());
    }
    if request.clearance < 0.0 {
        return Err("Clearance Q must be non-negative".to_string());
    }
    if request.dose < 0.0 {
        return Err("Dose must be non-negative".to_string());
    }
    if request.interval < 0.0 {
        return Err("Dose interval must be non-negative".to_string());
    }
    if let Some(ka) = request.ka {
        if ka <= 0.0 {
            return Err("Absorption constant ka must be positive".to_string());
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
