//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! an integration scenario. A scenario consists of:
//!
//! - [`PotentialConfig`]  – force law selection and its parameters
//! - [`OrbitConfig`]      – cylindrical initial condition
//! - [`TimesConfig`]      – integration time span and sample count
//! - [`ParametersConfig`] – tolerances and internal units
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! potential:
//!   law: "isochrone"        # or "miyamoto_nagai"
//!   amp: 1.0                # amplitude (mass)
//!   b: 1.0                  # scale height/length, law-dependent
//!   # a: 1.0                # scale length (miyamoto_nagai only)
//!   normalize: 1.0          # optional: pin radial force at (R=1, z=0)
//!
//! orbit:
//!   vxvv: [1.0, 0.1, 1.1, 0.1, -0.2, 0.3]   # R, vR, vT, z, vz, phi
//!
//! times:
//!   t_start: 0.0
//!   t_end: 10.0
//!   nt: 301
//!
//! parameters:
//!   rtol: 1.49012e-12       # relative error tolerance
//!   atol: 1.49012e-12       # absolute error tolerance
//!   ro: 8.0                 # internal length unit
//!   vo: 220.0               # internal velocity unit
//! ```
//!
//! The scenario builder maps this configuration into the runtime
//! potential, orbit, and parameter structs.

use serde::Deserialize;

/// Which force law the scenario uses
/// law: "miyamoto_nagai" or law: "isochrone"
#[derive(Deserialize, Debug, Clone)]
pub enum PotentialLaw {
    #[serde(rename = "miyamoto_nagai")] // Miyamoto-Nagai disk: scale length a, scale height b
    MiyamotoNagai,

    #[serde(rename = "isochrone")] // Isochrone sphere: scale length b
    Isochrone,
}

/// Force-law selection and parameters
#[derive(Deserialize, Debug, Clone)]
pub struct PotentialConfig {
    pub law: PotentialLaw, // which concrete force law
    pub amp: f64, // amplitude (mass)
    pub a: Option<f64>, // scale length (miyamoto_nagai only)
    pub b: f64, // scale height (miyamoto_nagai) or length (isochrone)
    pub normalize: Option<f64>, // optional target for amplitude normalization
}

/// Cylindrical initial condition for the orbit
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub vxvv: Vec<f64>, // (R, vR, vT, z, vz, phi)
}

/// Integration time span
#[derive(Deserialize, Debug, Clone)]
pub struct TimesConfig {
    pub t_start: f64, // start time
    pub t_end: f64, // end time
    pub nt: usize, // number of output samples
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub rtol: f64, // relative error tolerance
    pub atol: f64, // absolute error tolerance
    pub ro: Option<f64>, // internal length unit (default 8)
    pub vo: Option<f64>, // internal velocity unit (default 220)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub potential: PotentialConfig, // force law and its parameters
    pub orbit: OrbitConfig, // initial condition
    pub times: TimesConfig, // integration time span
    pub parameters: ParametersConfig, // tolerances and units
}
