use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::sim::integrator::{StepOptions, ThrottleMode, ZeroSpeedPolicy};
use crate::vehicle::VehicleParameters;

pub const ENV_PREFIX: &str = "LONGSIM";

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub steps: usize,                 // number of integration steps
    pub throttle: ThrottleMode,
    pub zero_speed: ZeroSpeedPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 2000,  // 20 s at 100 Hz
            throttle: ThrottleMode::default(),
            zero_speed: ZeroSpeedPolicy::default(),
        }
    }
}

impl RunConfig {
    pub fn step_options(&self) -> StepOptions {
        StepOptions { throttle: self.throttle, zero_speed: self.zero_speed }
    }

    /// Simulated duration of a full run, s.
    pub fn duration(&self, params: &VehicleParameters) -> f64 {
        self.steps as f64 * params.sample_time
    }
}

/// Everything a run needs: the vehicle and how to drive it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vehicle: VehicleParameters,
    pub run: RunConfig,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load settings from an optional TOML file, then `LONGSIM_*` environment
/// overrides (for example `LONGSIM_VEHICLE__MASS=1800`).
///
/// Missing keys keep their defaults. The vehicle parameters are validated.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!("Loading configuration from {}", path.display());
        builder = builder.add_source(File::from(path).format(FileFormat::Toml));
    }
    build(builder.add_source(environment()))
}

/// Parse settings from TOML text, without environment overrides.
pub fn settings_from_toml(toml: &str) -> Result<Settings> {
    build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let settings: Settings = match builder.build().and_then(|c| c.try_deserialize::<Settings>()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    settings.vehicle.validate()?;
    debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn empty_document_gives_defaults() {
        let s = settings_from_toml("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.run.steps, 2000);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let s = settings_from_toml(
            r#"
            [vehicle]
            mass = 1500
            a2 = -0.0001

            [run]
            steps = 500
            throttle = "clamp"
            zero_speed = "no_tire_force"
            "#,
        )
        .unwrap();
        assert_eq!(s.vehicle.mass, 1500.0);
        assert_eq!(s.vehicle.a2, -0.0001);
        assert_eq!(s.vehicle.gear_ratio, 0.35);
        assert_eq!(s.run.steps, 500);
        assert_eq!(s.run.throttle, ThrottleMode::Clamp);
        assert_eq!(s.run.zero_speed, ZeroSpeedPolicy::NoTireForce);
    }

    #[test]
    fn invalid_vehicle_is_rejected() {
        let err = settings_from_toml("[vehicle]\nsample_time = 0.0\n").unwrap_err();
        assert!(matches!(err, SimError::InvalidParameters { name: "sample_time", .. }));
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = settings_from_toml("[vehicle\nmass = ").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn environment_overrides_file() {
        let mut vars = config::Map::new();
        vars.insert("LONGSIM_VEHICLE__MASS".to_string(), "1800".to_string());
        vars.insert("LONGSIM_RUN__STEPS".to_string(), "300".to_string());
        let builder = Config::builder()
            .add_source(File::from_str("[vehicle]\nmass = 1500\n", FileFormat::Toml))
            .add_source(environment().source(Some(vars)));
        let s = build(builder).unwrap();
        assert_eq!(s.vehicle.mass, 1800.0);
        assert_eq!(s.run.steps, 300);
    }

    #[test]
    fn loads_settings_file_from_path() {
        let path = std::env::temp_dir()
            .join(format!("longsim-settings-{}.conf", std::process::id()));
        std::fs::write(&path, "[vehicle]\nmass = 1650\n\n[run]\nsteps = 120\n").unwrap();
        let loaded = load_settings(Some(&path));
        std::fs::remove_file(&path).unwrap();

        // Format comes from the caller, not the `.conf` extension.
        let s = loaded.unwrap();
        assert_eq!(s.vehicle.mass, 1650.0);
        assert_eq!(s.run.steps, 120);
    }

    #[test]
    fn missing_settings_file_is_config_error() {
        let path = std::env::temp_dir().join("longsim-settings-does-not-exist.toml");
        assert!(matches!(load_settings(Some(&path)), Err(SimError::Config(_))));
    }

    #[test]
    fn run_duration() {
        let run = RunConfig::default();
        assert!((run.duration(&VehicleParameters::default()) - 20.0).abs() < 1e-12);
    }
}
