use serde::{Deserialize, Serialize};

use crate::dynamics::state::{StepInput, VehicleState};
use crate::dynamics::{self, SlipEval, StepDiagnostics};
use crate::error::{Result, SimError};
use crate::vehicle::VehicleParameters;

// ---------------------------------------------------------------------------
// Step options
// ---------------------------------------------------------------------------

/// Treatment of throttle values outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrottleMode {
    /// Use the throttle as given.
    #[default]
    Passthrough,
    /// Clamp into [0, 1] before the torque map.
    Clamp,
}

/// What a step does when the vehicle velocity is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSpeedPolicy {
    /// Fail with `DegenerateState` and leave the state untouched.
    #[default]
    Reject,
    /// Skip the tire force for that step (slip taken as zero).
    NoTireForce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOptions {
    pub throttle: ThrottleMode,
    pub zero_speed: ZeroSpeedPolicy,
}

// ---------------------------------------------------------------------------
// Single explicit step
// ---------------------------------------------------------------------------

/// Advance `state` by one `sample_time`.
///
/// Pure: returns the next state and the diagnostics of this step. The update
/// is a hybrid explicit scheme and the order below is part of the model:
///
/// * position uses the velocity already updated in this step, plus the
///   `½·a·Δt²` term of the same step;
/// * engine speed integrates the engine acceleration computed by the
///   *previous* step, so it lags the torque by one sample.
pub fn step(
    state: &VehicleState,
    input: StepInput,
    params: &VehicleParameters,
    options: &StepOptions,
) -> Result<(VehicleState, StepDiagnostics)> {
    if !input.throttle.is_finite() {
        return Err(SimError::InvalidInput { name: "throttle", value: input.throttle });
    }
    if !input.incline.is_finite() {
        return Err(SimError::InvalidInput { name: "incline", value: input.incline });
    }
    if !state.is_finite() {
        return Err(SimError::DegenerateState(format!("non-finite state {:?}", state)));
    }

    let input = match options.throttle {
        ThrottleMode::Passthrough => input,
        ThrottleMode::Clamp => StepInput { throttle: input.throttle.clamp(0.0, 1.0), ..input },
    };

    let slip_eval = if state.velocity == 0.0 {
        match options.zero_speed {
            ZeroSpeedPolicy::Reject => {
                return Err(SimError::DegenerateState(
                    "slip ratio undefined at zero velocity".into(),
                ));
            }
            ZeroSpeedPolicy::NoTireForce => SlipEval::Zero,
        }
    } else {
        SlipEval::Ratio
    };

    // Steps 1-7 and 11: load, wheel speed, slip, tire force, engine torque,
    // all from the pre-step v and ω_e.
    let diag = dynamics::evaluate(state, &input, params, slip_eval);
    let load = diag.total_load();
    let dt = params.sample_time;

    // 8. chassis acceleration
    let acceleration = (diag.tire_force - load) / params.mass;
    // 9. velocity, from the acceleration just computed
    let velocity = state.velocity + dt * acceleration;
    // 10. position, from the *updated* velocity
    let position = state.position + dt * velocity + 0.5 * acceleration * dt * dt;
    // 12. engine speed, from the previous step's engine acceleration
    let engine_speed = state.engine_speed + dt * state.engine_accel;
    // 13. engine acceleration, consumed by the next step
    let engine_accel =
        (diag.engine_torque - params.drivetrain_factor() * load) / params.engine_inertia;

    let next = VehicleState { position, velocity, acceleration, engine_speed, engine_accel };
    if !next.is_finite() {
        return Err(SimError::DegenerateState(format!("step produced non-finite state {:?}", next)));
    }
    Ok((next, diag))
}

// ---------------------------------------------------------------------------
// Stateful integrator
// ---------------------------------------------------------------------------

/// A vehicle on one timeline: fixed parameters plus the state it mutates.
#[derive(Debug, Clone)]
pub struct Integrator {
    params: VehicleParameters,
    options: StepOptions,
    state: VehicleState,
    steps: usize,
    last: Option<StepDiagnostics>,
}

impl Integrator {
    /// Validate `params` and start from the initial state.
    pub fn new(params: VehicleParameters) -> Result<Self> {
        Self::with_options(params, StepOptions::default())
    }

    pub fn with_options(params: VehicleParameters, options: StepOptions) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, options, state: VehicleState::initial(), steps: 0, last: None })
    }

    /// Return to the initial state, dropping step count and diagnostics.
    pub fn reset(&mut self) -> &VehicleState {
        self.state.reset();
        self.steps = 0;
        self.last = None;
        &self.state
    }

    /// Advance one sample. On error the state is unchanged.
    pub fn step(&mut self, throttle: f64, incline: f64) -> Result<&VehicleState> {
        self.step_input(StepInput { throttle, incline })
    }

    pub fn step_input(&mut self, input: StepInput) -> Result<&VehicleState> {
        let (next, diag) = step(&self.state, input, &self.params, &self.options)?;
        self.state = next;
        self.last = Some(diag);
        self.steps += 1;
        Ok(&self.state)
    }

    pub fn params(&self) -> &VehicleParameters { &self.params }
    pub fn options(&self) -> &StepOptions { &self.options }
    pub fn state(&self) -> &VehicleState { &self.state }
    pub fn steps(&self) -> usize { self.steps }

    /// Simulated time since construction or the last reset.
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.params.sample_time
    }

    pub fn position(&self) -> f64 { self.state.position }
    pub fn velocity(&self) -> f64 { self.state.velocity }
    pub fn acceleration(&self) -> f64 { self.state.acceleration }
    pub fn engine_speed(&self) -> f64 { self.state.engine_speed }
    pub fn engine_accel(&self) -> f64 { self.state.engine_accel }

    /// Diagnostics of the most recent successful step.
    pub fn last_diagnostics(&self) -> Option<&StepDiagnostics> {
        self.last.as_ref()
    }
}

/// Construct an integrator, using the reference vehicle when `params` is `None`.
pub fn new_vehicle(params: Option<VehicleParameters>) -> Result<Integrator> {
    Integrator::new(params.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
