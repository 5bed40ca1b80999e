//! Numerical parameters for orbit integration
//!
//! `Parameters` holds runtime settings:
//! - relative/absolute error tolerances for the step-size search,
//! - internal length and velocity units (`ro`, `vo`)

use crate::orbit::leapfrog::{DEFAULT_ATOL, DEFAULT_RTOL};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub rtol: f64, // relative error tolerance
    pub atol: f64, // absolute error tolerance
    pub ro: f64, // internal length unit
    pub vo: f64, // internal velocity unit
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
            ro: 8.0,
            vo: 220.0,
        }
    }
}
