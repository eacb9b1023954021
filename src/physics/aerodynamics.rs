/// Quadratic aerodynamic drag, F = c_a · v².
///
/// The sign follows v², so the force always opposes forward motion.
pub fn drag_force(velocity: f64, drag_coeff: f64) -> f64 {
    drag_coeff * velocity * velocity
}
