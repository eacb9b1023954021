pub mod aerodynamics;
pub mod engine;
pub mod gravity;
pub mod rolling;
pub mod tire;

pub use aerodynamics::drag_force;
pub use engine::engine_torque;
pub use gravity::grade_force;
pub use rolling::rolling_resistance;
pub use tire::{slip_ratio, tire_force};

// ---------------------------------------------------------------------------
// Road load
// ---------------------------------------------------------------------------

/// Forces opposing forward motion, broken out by source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoadLoad {
    pub aero: f64,     // N
    pub rolling: f64,  // N
    pub grade: f64,    // N, negative downhill
}

impl RoadLoad {
    pub fn total(&self) -> f64 {
        self.aero + self.rolling + self.grade
    }
}

/// Evaluate all road-load terms for a velocity and incline.
pub fn road_load(
    velocity: f64,
    incline: f64,
    drag_coeff: f64,
    rolling_coeff: f64,
    mass: f64,
    gravity: f64,
) -> RoadLoad {
    RoadLoad {
        aero: drag_force(velocity, drag_coeff),
        rolling: rolling_resistance(velocity, rolling_coeff),
        grade: grade_force(mass, gravity, incline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn load_is_sum_of_closed_form_terms() {
        let (c_a, c_r1, m, g) = (1.36, 0.01, 2000.0, 9.81);
        for &v in &[0.0, 0.5, 5.0, 17.3, 42.0] {
            for &alpha in &[-0.1, 0.0, (3.0_f64 / 60.0).atan(), (12.0_f64 / 120.0).atan()] {
                let load = road_load(v, alpha, c_a, c_r1, m, g);
                let expected = c_a * v * v + c_r1 * v + m * g * alpha.sin();
                assert_relative_eq!(load.total(), expected, epsilon = 1e-9);
                assert_eq!(load.aero, c_a * v * v);
                assert_eq!(load.rolling, c_r1 * v);
                assert_eq!(load.grade, m * g * alpha.sin());
            }
        }
    }

    #[test]
    fn flat_road_at_rest_has_no_load() {
        let load = road_load(0.0, 0.0, 1.36, 0.01, 2000.0, 9.81);
        assert_eq!(load.total(), 0.0);
    }
}
