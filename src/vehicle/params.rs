use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

// ---------------------------------------------------------------------------
// Vehicle parameters (fixed for the lifetime of a run)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParameters {
    pub a0: f64,               // N·m, engine torque map constant term
    pub a1: f64,               // N·m·s/rad, linear term
    pub a2: f64,               // N·m·s²/rad², quadratic term (roll-off when < 0)
    pub gear_ratio: f64,       // wheel speed / engine speed
    pub wheel_radius: f64,     // m, effective rolling radius
    pub engine_inertia: f64,   // kg·m^2
    pub mass: f64,             // kg
    pub gravity: f64,          // m/s^2, magnitude
    pub drag_coeff: f64,       // N·s²/m², lumped 0.5·ρ·Cd·A
    pub rolling_coeff: f64,    // N·s/m
    pub tire_stiffness: f64,   // N per unit slip
    pub max_tire_force: f64,   // N
    pub sample_time: f64,      // s, fixed integration step
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self {
            a0: 400.0,
            a1: 0.1,
            a2: -0.0002,
            gear_ratio: 0.35,
            wheel_radius: 0.3,
            engine_inertia: 10.0,
            mass: 2000.0,
            gravity: 9.81,
            drag_coeff: 1.36,
            rolling_coeff: 0.01,
            tire_stiffness: 10_000.0,
            max_tire_force: 10_000.0,
            sample_time: 0.01,   // 100 Hz
        }
    }
}

impl VehicleParameters {
    /// Check every parameter against its physical domain.
    ///
    /// All values must be finite. Everything except `a2` must be strictly
    /// positive; `a2` may take any sign.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("a0", self.a0),
            ("a1", self.a1),
            ("gear_ratio", self.gear_ratio),
            ("wheel_radius", self.wheel_radius),
            ("engine_inertia", self.engine_inertia),
            ("mass", self.mass),
            ("gravity", self.gravity),
            ("drag_coeff", self.drag_coeff),
            ("rolling_coeff", self.rolling_coeff),
            ("tire_stiffness", self.tire_stiffness),
            ("max_tire_force", self.max_tire_force),
            ("sample_time", self.sample_time),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(SimError::InvalidParameters { name, value, reason: "must be finite" });
            }
            if value <= 0.0 {
                return Err(SimError::InvalidParameters { name, value, reason: "must be > 0" });
            }
        }
        if !self.a2.is_finite() {
            return Err(SimError::InvalidParameters {
                name: "a2",
                value: self.a2,
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Combined drivetrain factor GR · r_e: engine speed → wheel surface speed.
    pub fn drivetrain_factor(&self) -> f64 {
        self.gear_ratio * self.wheel_radius
    }

    /// Vehicle speed with zero tire slip at the given engine speed.
    pub fn rolling_speed(&self, engine_speed: f64) -> f64 {
        self.drivetrain_factor() * engine_speed
    }
}

// ---------------------------------------------------------------------------
// Parameter builder
// ---------------------------------------------------------------------------

/// Builder starting from the reference vehicle; `build` validates.
pub struct VehicleParametersBuilder {
    params: VehicleParameters,
}

impl Default for VehicleParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleParametersBuilder {
    pub fn new() -> Self {
        Self { params: VehicleParameters::default() }
    }

    pub fn torque_map(mut self, a0: f64, a1: f64, a2: f64) -> Self {
        self.params.a0 = a0;
        self.params.a1 = a1;
        self.params.a2 = a2;
        self
    }

    pub fn gear_ratio(mut self, v: f64) -> Self { self.params.gear_ratio = v; self }
    pub fn wheel_radius(mut self, v: f64) -> Self { self.params.wheel_radius = v; self }
    pub fn engine_inertia(mut self, v: f64) -> Self { self.params.engine_inertia = v; self }
    pub fn mass(mut self, v: f64) -> Self { self.params.mass = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.params.gravity = v; self }
    pub fn drag_coeff(mut self, v: f64) -> Self { self.params.drag_coeff = v; self }
    pub fn rolling_coeff(mut self, v: f64) -> Self { self.params.rolling_coeff = v; self }
    pub fn tire_stiffness(mut self, v: f64) -> Self { self.params.tire_stiffness = v; self }
    pub fn max_tire_force(mut self, v: f64) -> Self { self.params.max_tire_force = v; self }
    pub fn sample_time(mut self, v: f64) -> Self { self.params.sample_time = v; self }

    pub fn build(self) -> Result<VehicleParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}
