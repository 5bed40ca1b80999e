//! Build fully-initialized integration scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! bundle containing:
//! - the chosen potential (normalized if requested, then shared
//!   read-only)
//! - the orbit with its initial condition
//! - numerical parameters and the integration time span

use std::sync::Arc;

use crate::configuration::config::{PotentialLaw, ScenarioConfig};
use crate::numeric::coords::PhaseVec;
use crate::orbit::orbit::Orbit;
use crate::orbit::params::Parameters;
use crate::potential::isochrone::IsochronePotential;
use crate::potential::miyamoto_nagai::MiyamotoNagaiPotential;
use crate::potential::potential::Potential;

/// Fully-initialized integration scenario
///
/// The main runtime bundle constructed from a [`ScenarioConfig`]:
/// potential, orbit, parameters, and time span, ready to run
pub struct Scenario {
    pub parameters: Parameters,
    pub pot: Arc<dyn Potential + Send + Sync>,
    pub orbit: Orbit,
    pub times: (f64, f64, usize),
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            rtol: p_cfg.rtol,
            atol: p_cfg.atol,
            ro: p_cfg.ro.unwrap_or(8.0),
            vo: p_cfg.vo.unwrap_or(220.0),
        };

        // Potential: build the configured law, normalize while still
        // exclusively owned, then share read-only
        let pc = cfg.potential;
        let mut pot: Box<dyn Potential + Send + Sync> = match pc.law {
            PotentialLaw::MiyamotoNagai => Box::new(MiyamotoNagaiPotential::new(
                pc.amp,
                pc.a.unwrap_or(1.0),
                pc.b,
                parameters.ro,
                parameters.vo,
            )),
            PotentialLaw::Isochrone => Box::new(IsochronePotential::new(
                pc.amp,
                pc.b,
                parameters.ro,
                parameters.vo,
            )),
        };
        if let Some(target) = pc.normalize {
            pot.normalize(target);
        }
        let pot: Arc<dyn Potential + Send + Sync> = Arc::from(pot);

        // Orbit: map the config's 6-component initial condition
        let v = &cfg.orbit.vxvv;
        assert_eq!(v.len(), 6, "orbit.vxvv must have 6 components");
        let orbit = Orbit::with_units(
            PhaseVec::new(v[0], v[1], v[2], v[3], v[4], v[5]),
            parameters.ro,
            parameters.vo,
        );

        let times = (cfg.times.t_start, cfg.times.t_end, cfg.times.nt);

        Self {
            parameters,
            pot,
            orbit,
            times,
        }
    }

    /// Integrate the scenario's orbit in its potential
    pub fn run(&mut self) -> &mut Self {
        self.orbit.integrate(
            self.times,
            Arc::clone(&self.pot),
            self.parameters.rtol,
            self.parameters.atol,
        );
        self
    }
}
