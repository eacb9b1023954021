// ---------------------------------------------------------------------------
// Linear tire model with saturation
// ---------------------------------------------------------------------------

/// Longitudinal slip ratio, s = (ω_w · r_e − v) / v.
///
/// Undefined at `velocity == 0`; callers must guard that case.
pub fn slip_ratio(wheel_speed: f64, wheel_radius: f64, velocity: f64) -> f64 {
    (wheel_speed * wheel_radius - velocity) / velocity
}

/// Tire longitudinal force from slip.
///
/// Linear `c · s` inside |s| < 1, otherwise `+F_max`.
///
/// NOTE: the saturated branch is not signed. A wheel slipping backward
/// (s ≤ −1) still yields a forward `+F_max`. This matches the reference
/// vehicle model and is kept deliberately; `sign(s) · F_max` would be the
/// physical choice.
pub fn tire_force(slip: f64, stiffness: f64, max_force: f64) -> f64 {
    if slip.abs() < 1.0 {
        stiffness * slip
    } else {
        max_force
    }
}

/// True when `tire_force` takes the saturated branch for this slip.
pub fn is_saturated(slip: f64) -> bool {
    slip.abs() >= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: f64 = 10_000.0;
    const F_MAX: f64 = 10_000.0;

    #[test]
    fn zero_slip_when_rolling_freely() {
        // ω_w · r_e == v
        assert_eq!(slip_ratio(50.0, 0.3, 15.0), 0.0);
    }

    #[test]
    fn wheel_spin_gives_positive_slip() {
        assert!(slip_ratio(100.0, 0.3, 15.0) > 0.0);
        assert!(slip_ratio(10.0, 0.3, 15.0) < 0.0);
    }

    #[test]
    fn linear_region() {
        assert_eq!(tire_force(0.25, C, F_MAX), 2500.0);
        assert_eq!(tire_force(-0.5, C, F_MAX), -5000.0);
    }

    #[test]
    fn saturates_exactly_at_unit_slip() {
        let below = 1.0 - f64::EPSILON;
        assert!((tire_force(below, C, F_MAX) - C * below).abs() < 1e-9);
        assert_eq!(tire_force(1.0, C, F_MAX), F_MAX);
        assert!(!is_saturated(below));
        assert!(is_saturated(1.0));
    }

    #[test]
    fn saturated_branch_ignores_slip_sign() {
        assert_eq!(tire_force(-1.0, C, F_MAX), F_MAX);
        assert_eq!(tire_force(-3.0, C, F_MAX), F_MAX);
        // Just inside the linear region the force is still negative.
        assert!(tire_force(-0.999, C, F_MAX) < 0.0);
    }

    #[test]
    fn saturation_is_discontinuous_with_small_stiffness() {
        // With c < F_max the jump at |s| = 1 is visible.
        let c = 4_000.0;
        let below = tire_force(0.999_999, c, F_MAX);
        let above = tire_force(1.000_001, c, F_MAX);
        assert!(below < 4_000.0 + 1e-6);
        assert_eq!(above, F_MAX);
    }
}
