/// Linear rolling resistance, F = c_r1 · v.
///
/// Derived for forward motion; a negative velocity flips the sign.
pub fn rolling_resistance(velocity: f64, rolling_coeff: f64) -> f64 {
    rolling_coeff * velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolling_resistance_is_linear() {
        assert!((rolling_resistance(5.0, 0.01) - 0.05).abs() < 1e-15);
        assert!((rolling_resistance(50.0, 0.01) - 0.5).abs() < 1e-15);
    }
}
