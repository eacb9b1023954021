pub mod params;

pub use params::{VehicleParameters, VehicleParametersBuilder};

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Mid-size passenger car the reference driving scenario is tuned for.
    pub fn reference_sedan() -> VehicleParameters {
        VehicleParameters::default()
    }

    /// Heavier, lower-geared variant of the reference car.
    pub fn loaded_van() -> VehicleParameters {
        VehicleParameters {
            mass: 3200.0,
            engine_inertia: 14.0,
            drag_coeff: 1.9,
            rolling_coeff: 0.015,
            gear_ratio: 0.3,
            ..VehicleParameters::default()
        }
    }
}
