use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Everything that can go wrong while building or stepping a vehicle.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid input: {name} = {value}")]
    InvalidInput { name: &'static str, value: f64 },
    #[error("degenerate state: {0}")]
    DegenerateState(String),
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameters {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("step {index} failed")]
    Step {
        index: usize,
        #[source]
        source: Box<SimError>,
    },
}

impl SimError {
    /// Wrap an error with the index of the step that produced it.
    pub fn at_step(self, index: usize) -> Self {
        SimError::Step { index, source: Box::new(self) }
    }

    /// The innermost error, skipping any step context.
    pub fn root(&self) -> &SimError {
        match self {
            SimError::Step { source, .. } => source.root(),
            other => other,
        }
    }
}
