pub mod numeric;
pub mod potential;
pub mod orbit;
pub mod configuration;
pub mod benchmark;

pub use numeric::array::{empty, geomspace, linspace, ones, zeros, NumArray, Shape};
pub use numeric::coords::{
    cyl_to_rect, cyl_to_rect_arrays, rect_to_cyl, rect_to_cyl_arrays, NVec3, PhaseVec,
};

pub use potential::isochrone::IsochronePotential;
pub use potential::miyamoto_nagai::MiyamotoNagaiPotential;
pub use potential::potential::{rect_force, x_force, y_force, Potential};
pub use potential::set::PotentialSet;

pub use orbit::leapfrog::{leapfrog, DEFAULT_ATOL, DEFAULT_RTOL};
pub use orbit::orbit::{Orbit, Quantity};
pub use orbit::params::Parameters;
pub use orbit::scenario::Scenario;

pub use configuration::config::{
    OrbitConfig, ParametersConfig, PotentialConfig, PotentialLaw, ScenarioConfig, TimesConfig,
};

pub use benchmark::benchmark::{bench_leapfrog, bench_leapfrog_curve};
