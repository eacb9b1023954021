/// Engine torque map, T_e = throttle · (a0 + a1·ω_e + a2·ω_e²).
///
/// Throttle is applied as given; range handling is up to the caller.
pub fn engine_torque(throttle: f64, engine_speed: f64, a0: f64, a1: f64, a2: f64) -> f64 {
    throttle * (a0 + a1 * engine_speed + a2 * engine_speed * engine_speed)
}

/// Engine speed of peak full-throttle torque, −a1 / (2·a2), when a2 < 0.
pub fn peak_torque_speed(a1: f64, a2: f64) -> Option<f64> {
    if a2 < 0.0 {
        Some(-a1 / (2.0 * a2))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closed_throttle_gives_no_torque() {
        assert_eq!(engine_torque(0.0, 300.0, 400.0, 0.1, -0.0002), 0.0);
    }

    #[test]
    fn torque_scales_with_throttle() {
        let half = engine_torque(0.5, 100.0, 400.0, 0.1, -0.0002);
        let full = engine_torque(1.0, 100.0, 400.0, 0.1, -0.0002);
        assert_relative_eq!(full, 2.0 * half, epsilon = 1e-12);
        // 400 + 10 - 2
        assert_relative_eq!(full, 408.0, epsilon = 1e-12);
    }

    #[test]
    fn torque_rolls_off_past_peak() {
        let peak = peak_torque_speed(0.1, -0.0002).unwrap();
        assert_relative_eq!(peak, 250.0, epsilon = 1e-12);
        let at_peak = engine_torque(1.0, peak, 400.0, 0.1, -0.0002);
        assert!(engine_torque(1.0, peak + 50.0, 400.0, 0.1, -0.0002) < at_peak);
        assert!(engine_torque(1.0, peak - 50.0, 400.0, 0.1, -0.0002) < at_peak);
    }

    #[test]
    fn no_peak_without_roll_off() {
        assert!(peak_torque_speed(0.1, 0.0).is_none());
    }
}
