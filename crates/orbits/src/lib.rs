//! Keplerian orbit geometry and the two-body period formula.

use relay_core::constants::G;
use serde::Serialize;

/// An elliptical orbit described by its periapsis and apoapsis radii, both
/// measured from the central body's centre (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orbit {
    pub periapsis_m: f64,
    pub apoapsis_m: f64,
}

impl Orbit {
    /// Circular orbit at the given radius.
    pub fn circular(radius_m: f64) -> Self {
        Self {
            periapsis_m: radius_m,
            apoapsis_m: radius_m,
        }
    }

    /// Semimajor axis, half the sum of periapsis and apoapsis.
    pub fn semimajor_axis_m(&self) -> f64 {
        0.5 * (self.periapsis_m + self.apoapsis_m)
    }
}

/// Orbital period via Kepler's third law: T = 2π·√(a³ / (G·M)).
pub fn orbital_period_s(orbit: &Orbit, central_mass_kg: f64) -> f64 {
    let a = orbit.semimajor_axis_m();
    std::f64::consts::TAU * (a.powi(3) / (G * central_mass_kg)).sqrt()
}

/// Speed on a circular orbit of the given radius.
pub fn circular_speed_m_s(radius_m: f64, central_mass_kg: f64) -> f64 {
    (G * central_mass_kg / radius_m).sqrt()
}

/// Speed at a point of an elliptical orbit, from the vis-viva equation.
pub fn speed_at_m_s(orbit: &Orbit, radius_m: f64, central_mass_kg: f64) -> f64 {
    let mu = G * central_mass_kg;
    (mu * (2.0 / radius_m - 1.0 / orbit.semimajor_axis_m())).sqrt()
}

/// Convert an altitude above the surface to a radius from the body centre.
#[inline]
pub fn altitude_to_radius_m(altitude_m: f64, body_radius_m: f64) -> f64 {
    body_radius_m + altitude_m
}

/// Convert a radius from the body centre to an altitude above the surface.
#[inline]
pub fn radius_to_altitude_m(radius_m: f64, body_radius_m: f64) -> f64 {
    radius_m - body_radius_m
}
