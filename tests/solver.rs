use relay_orbit_calculator::solver::{
    SecantConfig, SolverError, offset_to_zero, solve, solve_detailed,
};

#[test]
fn converges_to_sqrt_two() {
    let config = SecantConfig {
        pre_initial: 1.0,
        epsilon: 1e-6,
        ..SecantConfig::default()
    };
    let root = solve(|x| x * x - 2.0, 2.0, &config).expect("solve");
    assert!((root - std::f64::consts::SQRT_2).abs() < 1e-4, "root = {root}");
}

#[test]
fn seeds_straddling_a_known_root_stay_within_tolerance() {
    // cos(x) = x has its root at ~0.739085.
    let r = 0.739_085_133_2;
    let config = SecantConfig {
        pre_initial: r,
        ..SecantConfig::default()
    };
    let root = solve(|x| x.cos() - x, r + 0.05, &config).expect("solve");
    assert!((root - r).abs() < 1e-2, "root = {root}");
}

#[test]
fn linear_function_is_exact_after_one_step() {
    let solution = solve_detailed(|x| x - 42.0, 100.0, &SecantConfig::default()).expect("solve");
    assert!((solution.value - 42.0).abs() < 1e-9);
    assert!(solution.converged);
    // One productive step plus the one that observes a zero delta.
    assert_eq!(solution.iterations, 2);
}

#[test]
fn offset_adapter_is_a_pure_shift() {
    let g = offset_to_zero(|x| x * x, 9.0);
    for x in [-3.0, -1.5, 0.0, 2.0, 5.0] {
        assert_eq!(g(x), x * x - 9.0);
    }
}

#[test]
fn flat_function_signals_degenerate_secant() {
    let err = solve(|_| 1.0, 1.0, &SecantConfig::default()).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateSecant { .. }));
}

#[test]
fn seeds_with_equal_evaluations_signal_degenerate_secant() {
    // x^2 is even, so symmetric seeds evaluate identically.
    let config = SecantConfig {
        pre_initial: -2.0,
        ..SecantConfig::default()
    };
    let SolverError::DegenerateSecant { x_curr, x_prev } =
        solve(|x| x * x, 2.0, &config).unwrap_err();
    assert_eq!(x_curr, 2.0);
    assert_eq!(x_prev, -2.0);
}

#[test]
fn exhaustion_returns_best_estimate_without_error() {
    let config = SecantConfig {
        epsilon: 0.0,
        max_iter: 3,
        ..SecantConfig::default()
    };
    let solution = solve_detailed(|x| x * x * x - 27.0, 10.0, &config).expect("solve");
    assert!(!solution.converged);
    assert_eq!(solution.iterations, 3);
    assert!(solution.value.is_finite());
}

#[test]
fn trace_is_recorded_only_in_verbose_mode() {
    let quiet = SecantConfig {
        epsilon: 1e-9,
        ..SecantConfig::default()
    };
    let verbose = SecantConfig {
        verbose: true,
        ..quiet
    };

    let silent = solve_detailed(|x| x * x - 2.0, 2.0, &quiet).expect("solve");
    assert!(silent.trace.is_empty());

    let traced = solve_detailed(|x| x * x - 2.0, 2.0, &verbose).expect("solve");
    assert_eq!(traced.trace.len(), traced.iterations);
    for (index, record) in traced.trace.iter().enumerate() {
        assert_eq!(record.iteration, index);
        assert!((record.x_curr - record.x_prev - record.delta).abs() < 1e-12);
    }
}
