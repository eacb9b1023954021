/// Component of the vehicle weight along the road, F = m · g · sin(α).
///
/// Positive incline (uphill) gives a positive load.
pub fn grade_force(mass: f64, gravity: f64, incline: f64) -> f64 {
    mass * gravity * incline.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flat_road_has_no_grade_load() {
        assert_eq!(grade_force(2000.0, 9.81, 0.0), 0.0);
    }

    #[test]
    fn downhill_pushes_forward() {
        assert!(grade_force(2000.0, 9.81, -0.05) < 0.0);
    }

    #[test]
    fn vertical_wall_carries_full_weight() {
        let f = grade_force(2000.0, 9.81, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(f, 2000.0 * 9.81, epsilon = 1e-9);
    }
}
