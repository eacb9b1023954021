use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::dynamics::state::StepInput;
use crate::error::Result;
use crate::vehicle::VehicleParameters;
use super::driver::{InputDriver, SeriesDriver};
use super::event::{EventDetector, SimEvent};
use super::integrator::Integrator;
use super::trajectory::{TrajectoryPoint, TrajectorySink};

// ---------------------------------------------------------------------------
// Run output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SimOutput {
    pub trajectory: Vec<TrajectoryPoint>,
    pub events: Vec<SimEvent>,
}

// ---------------------------------------------------------------------------
// Simulation loop
// ---------------------------------------------------------------------------

/// Drive a fresh vehicle for up to `config.steps` steps, streaming samples
/// into `sink`. The initial state is recorded first, then one sample per
/// step. The run ends early when the driver runs out of input.
///
/// A failing step aborts the run; the error carries the step index and the
/// sink holds every sample up to the failure.
pub fn simulate_into(
    params: &VehicleParameters,
    config: &RunConfig,
    driver: &mut dyn InputDriver,
    sink: &mut dyn TrajectorySink,
    detectors: &mut [Box<dyn EventDetector>],
) -> Result<Vec<SimEvent>> {
    let mut vehicle = Integrator::with_options(*params, config.step_options())?;
    let dt = params.sample_time;

    info!(
        "Starting run: {} steps, dt={} s, options={:?}",
        config.steps,
        dt,
        vehicle.options()
    );

    let mut prev = TrajectoryPoint { time: 0.0, state: *vehicle.state(), diagnostics: None };
    sink.record(&prev);
    let mut events = Vec::new();

    for index in 0..config.steps {
        let Some(input) = driver.input(index, prev.time, &prev.state) else {
            debug!("Driver exhausted after {} steps", index);
            break;
        };

        if let Err(e) = vehicle.step_input(input) {
            warn!("Step {} at t={:.2}s failed: {}", index, prev.time, e);
            return Err(e.at_step(index));
        }

        let current = TrajectoryPoint {
            time: (index + 1) as f64 * dt,
            state: *vehicle.state(),
            diagnostics: vehicle.last_diagnostics().copied(),
        };
        sink.record(&current);

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&prev, &current) {
                debug!("Event at t={:.2}s: {:?}", current.time, kind);
                events.push(SimEvent { time: current.time, kind, state: current.state });
            }
        }

        prev = current;
    }

    info!(
        "Run finished at t={:.2}s: x={:.2} m, v={:.2} m/s, {} events",
        prev.time,
        prev.state.position,
        prev.state.velocity,
        events.len()
    );
    Ok(events)
}

/// Run with an input driver and collect the full trajectory.
pub fn simulate_with(
    params: &VehicleParameters,
    config: &RunConfig,
    driver: &mut dyn InputDriver,
    detectors: &mut [Box<dyn EventDetector>],
) -> Result<SimOutput> {
    let mut trajectory: Vec<TrajectoryPoint> = Vec::with_capacity(config.steps.min(200_000) + 1);
    let events = simulate_into(params, config, driver, &mut trajectory, detectors)?;
    Ok(SimOutput { trajectory, events })
}

/// Replay a fixed input series (convenience wrapper).
pub fn simulate(
    params: &VehicleParameters,
    config: &RunConfig,
    inputs: Vec<StepInput>,
) -> Result<SimOutput> {
    let mut driver = SeriesDriver::new(inputs);
    simulate_with(params, config, &mut driver, &mut [])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
