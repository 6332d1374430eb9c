use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use relay_orbit_calculator::bodies::{BodyCatalog, load_bodies};
use relay_orbit_calculator::constellation::{
    ConstellationRequest, RelayPlan, SlotTarget, SolveDiagnostics, plan_constellation,
};
use relay_orbit_calculator::export::{schedule, summary};
use relay_orbit_calculator::solver::SecantConfig;
use relay_orbit_calculator::units::m_to_km;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Plan a resonant deployment orbit for a satellite relay ring"
)]
struct Cli {
    /// Central body name (case-insensitive)
    #[arg(long, default_value = "Kerbin")]
    body: String,

    /// Number of satellites in the ring
    #[arg(long)]
    satellites: usize,

    /// Final circular altitude above the surface in km
    #[arg(long, conflicts_with = "period")]
    altitude: Option<f64>,

    /// Final circular period in seconds (solved for altitude)
    #[arg(long)]
    period: Option<f64>,

    /// Body catalog file (YAML or TOML) overriding or extending the built-ins
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Convergence tolerance of the secant solver
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Iteration budget of the secant solver
    #[arg(long, default_value_t = 100)]
    max_iter: usize,

    /// Print the per-iteration solver trace
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Write the release schedule as CSV to this path (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full plan as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut catalog = BodyCatalog::kerbol_system();
    if let Some(path) = &cli.catalog {
        catalog.merge(load_bodies(path)?);
    }
    let body = catalog.lookup(&cli.body)?.clone();

    let target = match (cli.altitude, cli.period) {
        (Some(altitude_km), None) => SlotTarget::Altitude(altitude_km * 1_000.0),
        (None, Some(period_s)) => SlotTarget::Period(period_s),
        _ => anyhow::bail!("specify exactly one of --altitude or --period"),
    };
    let request = ConstellationRequest {
        satellites: cli.satellites,
        target,
    };
    let solver = SecantConfig {
        epsilon: cli.epsilon,
        max_iter: cli.max_iter,
        verbose: cli.verbose,
        ..SecantConfig::default()
    };

    let plan = plan_constellation(&body, &request, &solver)?;

    if cli.verbose {
        if let Some(diag) = &plan.diagnostics.circular {
            print_trace("circular radius", diag);
        }
        print_trace("insertion apoapsis", &plan.diagnostics.insertion);
    }
    print_plan(&plan);

    if let Some(path) = &cli.csv {
        let mut writer = schedule::writer_for_path(path)?;
        schedule::write_header(writer.as_mut())?;
        for release in &plan.releases {
            schedule::Record {
                satellite: release.satellite,
                release_time_s: release.release_time_s,
                release_time_h: release.release_time_s / 3_600.0,
                slot_longitude_deg: release.slot_longitude_deg,
                periapsis_km: m_to_km(plan.insertion_orbit.periapsis_m),
                apoapsis_km: m_to_km(plan.insertion_orbit.apoapsis_m),
                insertion_period_s: plan.insertion_period_s,
                circularization_dv_m_s: plan.circularization_dv_m_s,
            }
            .write_to(writer.as_mut())?;
        }
        writer.flush()?;
    }

    if let Some(path) = &cli.json {
        summary::write_json(path, &plan)?;
    }

    Ok(())
}

fn print_plan(plan: &RelayPlan) {
    println!("=== Relay Deployment Plan ===");
    println!("Body            : {}", plan.body);
    println!(
        "Ring            : {} satellites, {:.1}° apart",
        plan.satellites, plan.slot_spacing_deg
    );
    println!(
        "Circular orbit  : alt = {:.3} km, period = {:.1} s",
        m_to_km(plan.circular_altitude_m),
        plan.circular_period_s
    );
    println!(
        "Insertion orbit : {:.3} km x {:.3} km (alt), period = {:.1} s",
        m_to_km(plan.circular_altitude_m),
        m_to_km(plan.insertion_apoapsis_altitude_m),
        plan.insertion_period_s
    );
    println!(
        "Release burn    : Δv = {:.1} m/s at each periapsis pass",
        plan.circularization_dv_m_s
    );
    for release in &plan.releases {
        println!(
            "  sat {:>2} : t = {:>9.1} s, slot at {:>6.1}°",
            release.satellite, release.release_time_s, release.slot_longitude_deg
        );
    }
}

fn print_trace(label: &str, diag: &SolveDiagnostics) {
    let status = if diag.converged {
        "converged"
    } else {
        "iteration budget exhausted"
    };
    println!(
        "--- solver trace: {} ({} iterations, {}) ---",
        label, diag.iterations, status
    );
    for record in &diag.trace {
        println!(
            "  [{:>3}] x_prev = {:.6}, delta = {:+.6}, x_curr = {:.6}",
            record.iteration, record.x_prev, record.delta, record.x_curr
        );
    }
}
