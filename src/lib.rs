pub mod config;
pub mod dynamics;
pub mod error;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use error::{Result, SimError};

// Flat re-exports of the commonly used types
pub mod types {
    pub use crate::config::{RunConfig, Settings};
    pub use crate::dynamics::state::{StepInput, VehicleState};
    pub use crate::dynamics::StepDiagnostics;
    pub use crate::sim::integrator::{Integrator, StepOptions, ThrottleMode, ZeroSpeedPolicy};
    pub use crate::vehicle::{VehicleParameters, VehicleParametersBuilder};
}

pub use sim::integrator::new_vehicle;
