pub mod driver;
pub mod event;
pub mod integrator;
pub mod runner;
pub mod trajectory;

pub use driver::{InputDriver, SeriesDriver};
pub use integrator::{new_vehicle, step, Integrator, StepOptions, ThrottleMode, ZeroSpeedPolicy};
pub use runner::{simulate, simulate_into, simulate_with, SimOutput};
pub use trajectory::{DriveSummary, TrajectoryPoint, TrajectorySink};
