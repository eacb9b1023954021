use crate::dynamics::state::VehicleState;
use crate::dynamics::StepDiagnostics;

// ---------------------------------------------------------------------------
// Trajectory samples and sinks
// ---------------------------------------------------------------------------

/// State at one sample time. `diagnostics` belong to the step that produced
/// the state and are absent for the initial sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,  // s
    pub state: VehicleState,
    pub diagnostics: Option<StepDiagnostics>,
}

/// Receiver of trajectory samples, in time order.
pub trait TrajectorySink {
    fn record(&mut self, point: &TrajectoryPoint);
}

impl TrajectorySink for Vec<TrajectoryPoint> {
    fn record(&mut self, point: &TrajectoryPoint) {
        self.push(*point);
    }
}

/// Keeps only (t, x) pairs.
impl TrajectorySink for Vec<(f64, f64)> {
    fn record(&mut self, point: &TrajectoryPoint) {
        self.push((point.time, point.state.position));
    }
}

/// (t, x) pairs of a recorded trajectory.
pub fn positions(trajectory: &[TrajectoryPoint]) -> Vec<(f64, f64)> {
    trajectory.iter().map(|p| (p.time, p.state.position)).collect()
}

/// First time position exceeds `distance`, interpolated between samples.
pub fn time_at_distance(trajectory: &[TrajectoryPoint], distance: f64) -> Option<f64> {
    if let Some(first) = trajectory.first() {
        if first.state.position > distance {
            return Some(first.time);
        }
    }
    trajectory.windows(2).find_map(|w| {
        let (a, b) = (&w[0], &w[1]);
        if a.state.position <= distance && b.state.position > distance {
            let span = b.state.position - a.state.position;
            let frac = (distance - a.state.position) / span;
            Some(a.time + frac * (b.time - a.time))
        } else {
            None
        }
    })
}

// ---------------------------------------------------------------------------
// Drive summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DriveSummary {
    pub distance: f64,          // m, final minus initial position
    pub duration: f64,          // s
    pub final_speed: f64,       // m/s
    pub max_speed: f64,         // m/s
    pub min_speed: f64,         // m/s
    pub max_accel: f64,         // m/s^2
    pub min_accel: f64,         // m/s^2
    pub saturated_steps: usize, // steps on the F_max branch
}

impl DriveSummary {
    /// Summarize a trajectory; `None` when it has no samples.
    pub fn from_trajectory(trajectory: &[TrajectoryPoint]) -> Option<Self> {
        let first = trajectory.first()?;
        let last = trajectory.last()?;

        let speeds = trajectory.iter().map(|p| p.state.velocity);
        let max_speed = speeds.clone().fold(f64::NEG_INFINITY, f64::max);
        let min_speed = speeds.fold(f64::INFINITY, f64::min);

        // The initial sample carries no step acceleration unless it is all there is.
        let stepped = if trajectory.len() > 1 { &trajectory[1..] } else { trajectory };
        let accels = stepped.iter().map(|p| p.state.acceleration);
        let max_accel = accels.clone().fold(f64::NEG_INFINITY, f64::max);
        let min_accel = accels.fold(f64::INFINITY, f64::min);

        let saturated_steps = trajectory
            .iter()
            .filter_map(|p| p.diagnostics)
            .filter(|d| d.tire_saturated())
            .count();

        Some(DriveSummary {
            distance: last.state.position - first.state.position,
            duration: last.time - first.time,
            final_speed: last.state.velocity,
            max_speed,
            min_speed,
            max_accel,
            min_accel,
            saturated_steps,
        })
    }
}
