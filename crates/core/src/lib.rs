//! Core constants and shared unit helpers for the Relay Orbit Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³·kg⁻¹·s⁻²).
    pub const G: f64 = 6.67408e-11;
    /// Seconds per Kerbin solar day (six hours).
    pub const SECONDS_PER_KERBIN_DAY: f64 = 21_600.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_HOUR, SECONDS_PER_KERBIN_DAY};

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Convert seconds to Kerbin solar days.
    #[inline]
    pub fn seconds_to_kerbin_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_KERBIN_DAY
    }
}
