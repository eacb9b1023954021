use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use longitudinal_sim::config;
use longitudinal_sim::sim::event::{DistanceDetector, EventDetector, SaturationDetector};
use longitudinal_sim::sim::trajectory::{time_at_distance, DriveSummary};
use longitudinal_sim::sim::simulate_with;
use longitudinal_sim::types::{StepInput, VehicleState};

// ---------------------------------------------------------------------------
// Reference driving scenario
// ---------------------------------------------------------------------------

const HILL_START_END: f64 = 60.0;  // m, end of the 3/60 grade
const HILL_END: f64 = 150.0;       // m, end of the 12/120 grade

fn throttle(i: usize) -> f64 {
    let i = i as f64;
    if i < 500.0 {
        0.2 + 0.0006 * i
    } else if i < 1500.0 {
        0.5
    } else {
        2.0 - 0.001 * i
    }
}

fn incline(x: f64) -> f64 {
    if x <= HILL_START_END {
        (3.0_f64 / 60.0).atan()
    } else if x <= HILL_END {
        (12.0_f64 / 120.0).atan()
    } else {
        0.0
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = match config::load_settings(config_path.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };
    let params = settings.vehicle;
    let run = settings.run;

    let mut driver =
        |i: usize, _t: f64, s: &VehicleState| StepInput::new(throttle(i), incline(s.position));
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(DistanceDetector::new(HILL_START_END)),
        Box::new(DistanceDetector::new(HILL_END)),
        Box::new(SaturationDetector::new()),
    ];

    let output = match simulate_with(&params, &run, &mut driver, &mut detectors) {
        Ok(out) => out,
        Err(e) => {
            error!("Simulation failed: {}", e);
            if let Some(root) = std::error::Error::source(&e) {
                error!("Caused by: {}", root);
            }
            std::process::exit(1);
        }
    };

    let trajectory = &output.trajectory;
    let Some(summary) = DriveSummary::from_trajectory(trajectory) else {
        error!("Empty trajectory");
        std::process::exit(1);
    };

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  LONGITUDINAL DRIVE — reference hill climb");
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.0} kg    Engine inertia: {:>6.1} kg·m²",
        params.mass, params.engine_inertia
    );
    println!(
        "  Gear ratio:    {:>8.3}       Wheel radius:   {:>6.3} m",
        params.gear_ratio, params.wheel_radius
    );
    println!(
        "  Torque map:    {:.0} + {:.3}·ω + {:.5}·ω²",
        params.a0, params.a1, params.a2
    );
    println!();

    println!("  Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for ev in &output.events {
        println!(
            "  t={:>6.2}s   x={:>8.2}m   v={:>6.2}m/s   {:?}",
            ev.time, ev.state.position, ev.state.velocity, ev.kind
        );
    }
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Distance:      {:>8.2} m", summary.distance);
    println!("  Final speed:   {:>8.2} m/s", summary.final_speed);
    println!("  Max speed:     {:>8.2} m/s", summary.max_speed);
    println!("  Accel range:   {:>8.3} .. {:.3} m/s^2", summary.min_accel, summary.max_accel);
    if let Some(t) = time_at_distance(trajectory, HILL_END) {
        println!("  Hill cleared:  {:>8.2} s", t);
    }
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>9}  {:>9}",
        "t (s)", "x (m)", "v (m/s)", "a (m/s²)", "ω (rad/s)"
    );
    println!("  {}", "─".repeat(52));

    let sample_interval = (trajectory.len() / 20).max(1);
    for (i, p) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.2}  {:>9.2}  {:>9.3}  {:>9.4}  {:>9.2}",
            p.time,
            p.state.position,
            p.state.velocity,
            p.state.acceleration,
            p.state.engine_speed,
        );
    }

    println!();
    info!("Simulation: {} samples, dt={} s", trajectory.len(), params.sample_time);
}
