//! Relay constellation planning helpers for a Kerbal-style space program.
//!
//! The workspace hosts a generic secant-method root finder and the orbital
//! mechanics needed to size resonant deployment orbits for satellite relay
//! networks. Keeping this logic in library crates lets multiple front-ends
//! (CLI, GUI, mods) share it; this package re-exports the members under one
//! roof for integration tests and downstream consumers.

pub use relay_bodies as bodies;
pub use relay_constellation as constellation;
pub use relay_core::{constants, time, units};
pub use relay_export as export;
pub use relay_orbits as orbits;
pub use relay_solver as solver;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
