use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Initial conditions
// ---------------------------------------------------------------------------

pub const INITIAL_POSITION: f64 = 0.0;       // m
pub const INITIAL_VELOCITY: f64 = 5.0;       // m/s
pub const INITIAL_ACCELERATION: f64 = 0.0;   // m/s^2
pub const INITIAL_ENGINE_SPEED: f64 = 100.0; // rad/s
pub const INITIAL_ENGINE_ACCEL: f64 = 0.0;   // rad/s^2

// ---------------------------------------------------------------------------
// Longitudinal state: chassis position/velocity/acceleration, engine speed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: f64,      // m, along the road
    pub velocity: f64,      // m/s, forward positive
    pub acceleration: f64,  // m/s^2, from the last step
    pub engine_speed: f64,  // rad/s
    pub engine_accel: f64,  // rad/s^2, consumed by the next step
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::initial()
    }
}

impl VehicleState {
    /// The documented starting point: rolling at 5 m/s, engine at 100 rad/s.
    pub const fn initial() -> Self {
        Self {
            position: INITIAL_POSITION,
            velocity: INITIAL_VELOCITY,
            acceleration: INITIAL_ACCELERATION,
            engine_speed: INITIAL_ENGINE_SPEED,
            engine_accel: INITIAL_ENGINE_ACCEL,
        }
    }

    /// Discard history and return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.acceleration.is_finite()
            && self.engine_speed.is_finite()
            && self.engine_accel.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Per-step input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepInput {
    pub throttle: f64,  // nominally [0, 1]
    pub incline: f64,   // rad, uphill positive
}

impl StepInput {
    pub fn new(throttle: f64, incline: f64) -> Self {
        Self { throttle, incline }
    }
}
