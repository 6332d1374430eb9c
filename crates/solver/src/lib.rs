//! Secant-method root finding for scalar equations.
//!
//! The secant method interpolates a line through the two most recent sample
//! points, so callers supply only the function itself, no derivative. The
//! orbital solvers in this workspace use it to invert Kepler's third law,
//! but nothing in here knows about orbits.

use serde::Serialize;
use thiserror::Error;

/// Tunable parameters for [`solve`] and [`solve_detailed`].
///
/// The defaults match the historical planner script: a second seed at the
/// origin, a tolerance of 0.1 in the function's input units, and a budget of
/// 100 iterations.
#[derive(Debug, Clone, Copy)]
pub struct SecantConfig {
    /// Second seed point paired with the caller's initial guess.
    pub pre_initial: f64,
    /// Convergence tolerance on the step size between iterates.
    pub epsilon: f64,
    /// Iteration budget; exhaustion is not an error.
    pub max_iter: usize,
    /// Record a per-iteration trace in the returned solution.
    pub verbose: bool,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            pre_initial: 0.0,
            epsilon: 0.1,
            max_iter: 100,
            verbose: false,
        }
    }
}

/// Errors surfaced by the root finder.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Two consecutive evaluations were equal, so the secant line is flat and
    /// the update would divide by zero. Usually a sign of poorly chosen seeds
    /// or a locally constant function.
    #[error("secant step undefined: f({x_curr}) == f({x_prev}), function is flat between seeds")]
    DegenerateSecant { x_curr: f64, x_prev: f64 },
}

/// One entry of the iteration trace recorded in verbose mode.
#[derive(Debug, Clone, Serialize)]
pub struct TraceRecord {
    pub iteration: usize,
    pub x_prev: f64,
    pub delta: f64,
    pub x_curr: f64,
}

/// Outcome of a secant run, tagging whether the tolerance was actually met
/// or the iteration budget ran out.
#[derive(Debug, Clone)]
pub struct SecantSolution {
    /// Root estimate; always one secant step beyond the last iterate that was
    /// checked against the tolerance.
    pub value: f64,
    /// Number of accepted secant steps.
    pub iterations: usize,
    /// False when the run stopped on the iteration budget instead of the
    /// tolerance.
    pub converged: bool,
    /// Per-iteration records; empty unless `verbose` was set.
    pub trace: Vec<TraceRecord>,
}

/// Find a zero of `f` near `initial`, returning only the root estimate.
///
/// Convergence and exhaustion both return the best available estimate; use
/// [`solve_detailed`] to distinguish the two.
pub fn solve<F>(f: F, initial: f64, config: &SecantConfig) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    solve_detailed(f, initial, config).map(|solution| solution.value)
}

/// Find a zero of `f` near `initial`, reporting iteration diagnostics.
pub fn solve_detailed<F>(
    f: F,
    initial: f64,
    config: &SecantConfig,
) -> Result<SecantSolution, SolverError>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = config.pre_initial;
    let mut x_curr = initial;
    let mut trace = Vec::new();

    for iteration in 0..config.max_iter {
        let x_next = secant_step(&f, x_curr, x_prev)?;
        let delta = x_next - x_curr;
        if config.verbose {
            trace.push(TraceRecord {
                iteration,
                x_prev: x_curr,
                delta,
                x_curr: x_next,
            });
        }
        if delta.abs() < config.epsilon {
            // The reported root is the step that met the tolerance, one
            // iteration beyond the last stored value.
            return Ok(SecantSolution {
                value: x_next,
                iterations: iteration + 1,
                converged: true,
                trace,
            });
        }
        x_prev = x_curr;
        x_curr = x_next;
    }

    // Budget exhausted: still hand back one more step as the best estimate.
    let value = secant_step(&f, x_curr, x_prev)?;
    Ok(SecantSolution {
        value,
        iterations: config.max_iter,
        converged: false,
        trace,
    })
}

/// Turn a "solve f(x) = target" problem into a root-finding problem.
///
/// Returns `g` with `g(x) = f(x) - target`, suitable for [`solve`].
pub fn offset_to_zero<F>(f: F, target: f64) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    move |x| f(x) - target
}

fn secant_step<F>(f: &F, x_curr: f64, x_prev: f64) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    let f_curr = f(x_curr);
    let f_prev = f(x_prev);
    if f_curr == f_prev {
        return Err(SolverError::DegenerateSecant { x_curr, x_prev });
    }
    Ok(x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev))
}
