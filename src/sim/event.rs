use crate::dynamics::state::VehicleState;
use super::trajectory::TrajectoryPoint;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    DistanceReached { distance: f64 },
    Stall { speed: f64 },
    SaturationOnset,
    SaturationRelease,
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: VehicleState,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &TrajectoryPoint, current: &TrajectoryPoint) -> Option<EventKind>;
}

/// Fires once when position first passes a distance.
pub struct DistanceDetector {
    pub distance: f64,
    fired: bool,
}

impl DistanceDetector {
    pub fn new(distance: f64) -> Self {
        Self { distance, fired: false }
    }
}

impl EventDetector for DistanceDetector {
    fn check(&mut self, prev: &TrajectoryPoint, current: &TrajectoryPoint) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.state.position <= self.distance && current.state.position > self.distance {
            self.fired = true;
            Some(EventKind::DistanceReached { distance: self.distance })
        } else {
            None
        }
    }
}

/// Fires once when velocity drops below a threshold.
///
/// Useful ahead of the v = 0 singularity of the slip ratio.
pub struct StallDetector {
    pub speed: f64,
    fired: bool,
}

impl StallDetector {
    pub fn new(speed: f64) -> Self {
        Self { speed, fired: false }
    }
}

impl EventDetector for StallDetector {
    fn check(&mut self, prev: &TrajectoryPoint, current: &TrajectoryPoint) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.state.velocity >= self.speed && current.state.velocity < self.speed {
            self.fired = true;
            Some(EventKind::Stall { speed: current.state.velocity })
        } else {
            None
        }
    }
}

/// Reports transitions into and out of the saturated tire branch.
#[derive(Default)]
pub struct SaturationDetector {
    saturated: Option<bool>,
}

impl SaturationDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventDetector for SaturationDetector {
    fn check(&mut self, _prev: &TrajectoryPoint, current: &TrajectoryPoint) -> Option<EventKind> {
        let now = current.diagnostics?.tire_saturated();
        let before = self.saturated.replace(now);
        match (before, now) {
            (None, true) | (Some(false), true) => Some(EventKind::SaturationOnset),
            (Some(true), false) => Some(EventKind::SaturationRelease),
            _ => None,
        }
    }
}
