//! Resonant deployment-orbit planning for relay constellations.
//!
//! A carrier craft on an eccentric orbit whose period is (n+1)/n times the
//! final circular period drifts one n-th of a revolution against the ring per
//! lap. Releasing one satellite per periapsis pass therefore populates n
//! evenly spaced circular slots from a single insertion burn. The eccentric
//! orbit is sized by inverting Kepler's third law through the secant solver.

use relay_bodies::Body;
use relay_orbits::{Orbit, circular_speed_m_s, orbital_period_s, radius_to_altitude_m, speed_at_m_s};
use relay_solver::{
    SecantConfig, SecantSolution, SolverError, TraceRecord, offset_to_zero, solve_detailed,
};
use serde::Serialize;
use thiserror::Error;

/// How the final circular orbit is specified.
#[derive(Debug, Clone, Copy)]
pub enum SlotTarget {
    /// Altitude above the body's surface (m).
    Altitude(f64),
    /// Desired circular period (s); the matching altitude is solved for.
    Period(f64),
}

/// Inputs for [`plan_constellation`].
#[derive(Debug, Clone)]
pub struct ConstellationRequest {
    /// Number of satellites to deploy; at least two.
    pub satellites: usize,
    pub target: SlotTarget,
}

/// Planning failures.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("a relay constellation needs at least two satellites, got {0}")]
    TooFewSatellites(usize),
    #[error("target altitude must be positive, got {0} m")]
    AltitudeBelowSurface(f64),
    #[error("target period must be positive, got {0} s")]
    NonPositivePeriod(f64),
    #[error("circular orbit with the requested period sits below the surface of {body}")]
    PeriodBelowSurface { body: String },
    #[error("root finder failed: {0}")]
    Solver(#[from] SolverError),
}

/// Iteration summary of one secant inversion.
#[derive(Debug, Clone, Serialize)]
pub struct SolveDiagnostics {
    pub iterations: usize,
    pub converged: bool,
    pub trace: Vec<TraceRecord>,
}

impl From<&SecantSolution> for SolveDiagnostics {
    fn from(solution: &SecantSolution) -> Self {
        Self {
            iterations: solution.iterations,
            converged: solution.converged,
            trace: solution.trace.clone(),
        }
    }
}

/// Solver summaries for the individual inversions behind a plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDiagnostics {
    /// Present only when the circular orbit was solved from a period target.
    pub circular: Option<SolveDiagnostics>,
    pub insertion: SolveDiagnostics,
}

/// One satellite release at a periapsis pass of the insertion orbit.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseSlot {
    /// 1-based satellite index.
    pub satellite: usize,
    /// Time of the release, measured from the insertion burn (s).
    pub release_time_s: f64,
    /// Final longitude of the slot within the ring, relative to satellite 1.
    pub slot_longitude_deg: f64,
}

/// Complete deployment plan for one relay ring.
#[derive(Debug, Clone, Serialize)]
pub struct RelayPlan {
    pub body: String,
    pub satellites: usize,
    pub circular_radius_m: f64,
    pub circular_altitude_m: f64,
    pub circular_period_s: f64,
    pub insertion_orbit: Orbit,
    pub insertion_period_s: f64,
    pub insertion_apoapsis_altitude_m: f64,
    /// Burn each satellite performs at release to circularize (m/s).
    pub circularization_dv_m_s: f64,
    pub slot_spacing_deg: f64,
    pub releases: Vec<ReleaseSlot>,
    pub diagnostics: PlanDiagnostics,
}

/// Solve the circular-orbit radius whose period equals `period_s`.
///
/// Seeds the secant iteration at one and two body radii; the config's
/// `pre_initial` is not used here.
pub fn circular_radius_for_period(
    body: &Body,
    period_s: f64,
    solver: &SecantConfig,
) -> Result<SecantSolution, PlanError> {
    if period_s <= 0.0 {
        return Err(PlanError::NonPositivePeriod(period_s));
    }
    let mass_kg = body.mass_kg;
    let period_of = move |radius_m: f64| orbital_period_s(&Orbit::circular(radius_m), mass_kg);
    let config = SecantConfig {
        pre_initial: body.radius_m,
        ..*solver
    };
    let solution = solve_detailed(
        offset_to_zero(period_of, period_s),
        2.0 * body.radius_m,
        &config,
    )?;
    Ok(solution)
}

/// Size the eccentric insertion orbit for an n-satellite ring at the given
/// circular radius: periapsis pinned to the ring, apoapsis solved so the
/// period comes out at (n+1)/n times the circular period.
pub fn insertion_orbit(
    body: &Body,
    circular_radius_m: f64,
    satellites: usize,
    solver: &SecantConfig,
) -> Result<(Orbit, SecantSolution), PlanError> {
    let n = satellites as f64;
    let mass_kg = body.mass_kg;
    let circular_period = orbital_period_s(&Orbit::circular(circular_radius_m), mass_kg);
    let target_period = circular_period * (n + 1.0) / n;

    let periapsis_m = circular_radius_m;
    let period_of = move |apoapsis_m: f64| {
        orbital_period_s(
            &Orbit {
                periapsis_m,
                apoapsis_m,
            },
            mass_kg,
        )
    };
    let config = SecantConfig {
        pre_initial: periapsis_m,
        ..*solver
    };
    let solution = solve_detailed(
        offset_to_zero(period_of, target_period),
        2.0 * periapsis_m,
        &config,
    )?;
    let orbit = Orbit {
        periapsis_m,
        apoapsis_m: solution.value,
    };
    Ok((orbit, solution))
}

/// Plan a full relay deployment around `body`.
pub fn plan_constellation(
    body: &Body,
    request: &ConstellationRequest,
    solver: &SecantConfig,
) -> Result<RelayPlan, PlanError> {
    if request.satellites < 2 {
        return Err(PlanError::TooFewSatellites(request.satellites));
    }

    let (circular_radius_m, circular_diag) = match request.target {
        SlotTarget::Altitude(altitude_m) => {
            if altitude_m <= 0.0 {
                return Err(PlanError::AltitudeBelowSurface(altitude_m));
            }
            (body.radius_m + altitude_m, None)
        }
        SlotTarget::Period(period_s) => {
            let solution = circular_radius_for_period(body, period_s, solver)?;
            if solution.value <= body.radius_m {
                return Err(PlanError::PeriodBelowSurface {
                    body: body.name.clone(),
                });
            }
            let diag = SolveDiagnostics::from(&solution);
            (solution.value, Some(diag))
        }
    };

    let circular_period_s = orbital_period_s(&Orbit::circular(circular_radius_m), body.mass_kg);
    let (orbit, insertion_solution) =
        insertion_orbit(body, circular_radius_m, request.satellites, solver)?;
    let insertion_period_s = orbital_period_s(&orbit, body.mass_kg);

    // Released satellites arrive at periapsis with the carrier's speed and
    // brake down to circular speed.
    let circularization_dv_m_s = speed_at_m_s(&orbit, circular_radius_m, body.mass_kg)
        - circular_speed_m_s(circular_radius_m, body.mass_kg);

    let slot_spacing_deg = 360.0 / request.satellites as f64;
    let releases = (0..request.satellites)
        .map(|k| ReleaseSlot {
            satellite: k + 1,
            release_time_s: k as f64 * insertion_period_s,
            slot_longitude_deg: k as f64 * slot_spacing_deg,
        })
        .collect();

    Ok(RelayPlan {
        body: body.name.clone(),
        satellites: request.satellites,
        circular_radius_m,
        circular_altitude_m: radius_to_altitude_m(circular_radius_m, body.radius_m),
        circular_period_s,
        insertion_apoapsis_altitude_m: radius_to_altitude_m(orbit.apoapsis_m, body.radius_m),
        insertion_orbit: orbit,
        insertion_period_s,
        circularization_dv_m_s,
        slot_spacing_deg,
        releases,
        diagnostics: PlanDiagnostics {
            circular: circular_diag,
            insertion: SolveDiagnostics::from(&insertion_solution),
        },
    })
}
