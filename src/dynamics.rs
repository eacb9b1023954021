pub mod state;

use crate::physics::{self, tire, RoadLoad};
use crate::vehicle::VehicleParameters;
use state::{StepInput, VehicleState};

// ---------------------------------------------------------------------------
// Transient quantities of one step
// ---------------------------------------------------------------------------

/// Everything a step derives from the pre-step state and its input.
///
/// Recomputed every step and never fed back into `VehicleState`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepDiagnostics {
    pub load: RoadLoad,       // N, broken out by source
    pub wheel_speed: f64,     // rad/s
    pub slip: f64,            // dimensionless
    pub tire_force: f64,      // N
    pub engine_torque: f64,   // N·m
}

impl StepDiagnostics {
    pub fn aero_drag(&self) -> f64 {
        self.load.aero
    }

    pub fn rolling_resistance(&self) -> f64 {
        self.load.rolling
    }

    pub fn grade_force(&self) -> f64 {
        self.load.grade
    }

    pub fn total_load(&self) -> f64 {
        self.load.total()
    }

    /// Tire force and load disagree; positive means the chassis accelerates.
    pub fn net_force(&self) -> f64 {
        self.tire_force - self.load.total()
    }

    pub fn tire_saturated(&self) -> bool {
        tire::is_saturated(self.slip)
    }
}

/// How the tire term is computed when the vehicle is not moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlipEval {
    /// Slip from the usual ratio; requires v ≠ 0.
    Ratio,
    /// Slip forced to zero, which removes the tire force.
    Zero,
}

/// Evaluate load, drivetrain, tire and engine terms for one step.
///
/// Reads only the pre-step velocity and engine speed.
pub fn evaluate(
    state: &VehicleState,
    input: &StepInput,
    params: &VehicleParameters,
    slip_eval: SlipEval,
) -> StepDiagnostics {
    let v = state.velocity;
    let w_e = state.engine_speed;

    let load = physics::road_load(
        v,
        input.incline,
        params.drag_coeff,
        params.rolling_coeff,
        params.mass,
        params.gravity,
    );

    let wheel_speed = params.gear_ratio * w_e;

    let (slip, tire_force) = match slip_eval {
        SlipEval::Ratio => {
            let s = physics::slip_ratio(wheel_speed, params.wheel_radius, v);
            (s, physics::tire_force(s, params.tire_stiffness, params.max_tire_force))
        }
        SlipEval::Zero => (0.0, 0.0),
    };

    let engine_torque =
        physics::engine_torque(input.throttle, w_e, params.a0, params.a1, params.a2);

    StepDiagnostics { load, wheel_speed, slip, tire_force, engine_torque }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn initial_state_is_saturated_by_wheel_spin() {
        // ω_w · r_e = 0.35 · 100 · 0.3 = 10.5 m/s against 5 m/s
        let p = VehicleParameters::default();
        let d = evaluate(&VehicleState::initial(), &StepInput::new(0.0, 0.0), &p, SlipEval::Ratio);
        assert_relative_eq!(d.wheel_speed, 35.0, epsilon = 1e-12);
        assert_relative_eq!(d.slip, 1.1, epsilon = 1e-12);
        assert!(d.tire_saturated());
        assert_eq!(d.tire_force, p.max_tire_force);
    }

    #[test]
    fn load_terms_use_pre_step_velocity() {
        let p = VehicleParameters::default();
        let state = VehicleState { velocity: 12.0, ..VehicleState::initial() };
        let alpha = (3.0_f64 / 60.0).atan();
        let d = evaluate(&state, &StepInput::new(0.3, alpha), &p, SlipEval::Ratio);
        assert_relative_eq!(d.aero_drag(), 1.36 * 144.0, epsilon = 1e-9);
        assert_relative_eq!(d.rolling_resistance(), 0.12, epsilon = 1e-12);
        assert_relative_eq!(d.grade_force(), 2000.0 * 9.81 * alpha.sin(), epsilon = 1e-9);
        assert_relative_eq!(
            d.total_load(),
            d.aero_drag() + d.rolling_resistance() + d.grade_force(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn torque_uses_pre_step_engine_speed() {
        let p = VehicleParameters::default();
        let state = VehicleState { engine_speed: 200.0, ..VehicleState::initial() };
        let d = evaluate(&state, &StepInput::new(0.5, 0.0), &p, SlipEval::Ratio);
        // 0.5 · (400 + 20 − 8)
        assert_relative_eq!(d.engine_torque, 206.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_slip_eval_drops_tire_force() {
        let p = VehicleParameters::default();
        let state = VehicleState { velocity: 0.0, ..VehicleState::initial() };
        let d = evaluate(&state, &StepInput::new(0.2, 0.0), &p, SlipEval::Zero);
        assert_eq!(d.slip, 0.0);
        assert_eq!(d.tire_force, 0.0);
        assert!(d.engine_torque > 0.0);
    }

    #[test]
    fn free_rolling_is_in_linear_region() {
        let p = VehicleParameters::default();
        let state = VehicleState { velocity: 10.5, ..VehicleState::initial() };
        let d = evaluate(&state, &StepInput::default(), &p, SlipEval::Ratio);
        assert!(d.slip.abs() < 1e-12);
        assert!(d.tire_force.abs() < 1e-8);
    }
}
