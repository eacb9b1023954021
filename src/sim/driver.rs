use crate::dynamics::state::{StepInput, VehicleState};

/// Source of throttle and incline for each step.
///
/// Receives the step index, the time at the start of the step and the
/// current state, so inputs may depend on position (road grade) as well as
/// time. Returning `None` ends the run.
pub trait InputDriver {
    fn input(&mut self, index: usize, time: f64, state: &VehicleState) -> Option<StepInput>;
}

impl<F> InputDriver for F
where
    F: FnMut(usize, f64, &VehicleState) -> StepInput,
{
    fn input(&mut self, index: usize, time: f64, state: &VehicleState) -> Option<StepInput> {
        Some(self(index, time, state))
    }
}

/// Replays a precomputed input series, one entry per step.
#[derive(Debug, Clone, Default)]
pub struct SeriesDriver {
    inputs: Vec<StepInput>,
}

impl SeriesDriver {
    pub fn new(inputs: Vec<StepInput>) -> Self {
        Self { inputs }
    }

    /// Constant throttle and incline for `steps` samples.
    pub fn constant(throttle: f64, incline: f64, steps: usize) -> Self {
        Self { inputs: vec![StepInput::new(throttle, incline); steps] }
    }
}

impl InputDriver for SeriesDriver {
    fn input(&mut self, index: usize, _time: f64, _state: &VehicleState) -> Option<StepInput> {
        self.inputs.get(index).copied()
    }
}
