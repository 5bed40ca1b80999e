//! Miyamoto-Nagai disk potential
//!
//! Phi(R, z) = -amp / sqrt(R^2 + (a + sqrt(z^2 + b^2))^2)
//! with scale length `a` and scale height `b`, both rescaled into
//! internal units by `ro` at construction. Axisymmetric: the
//! azimuthal force is identically zero.

use crate::potential::potential::Potential;

/// Miyamoto-Nagai disk potential
#[derive(Debug, Clone)]
pub struct MiyamotoNagaiPotential {
    amp: f64, // amplitude (mass)
    a: f64, // scale length, internal units
    b2: f64, // scale height squared, internal units
    ro: f64, // internal length unit
    vo: f64, // internal velocity unit
}

impl MiyamotoNagaiPotential {
    /// Set up the potential; `a` and `b` are given in physical units
    /// and rescaled by `ro`
    pub fn new(amp: f64, a: f64, b: f64, ro: f64, vo: f64) -> Self {
        let a = a / ro;
        let b = b / ro;
        Self {
            amp,
            a,
            b2: b * b,
            ro,
            vo,
        }
    }

    /// Internal length unit
    pub fn ro(&self) -> f64 {
        self.ro
    }

    /// Internal velocity unit
    pub fn vo(&self) -> f64 {
        self.vo
    }
}

impl Default for MiyamotoNagaiPotential {
    // amp = 1, a = 1, b = 0.1, ro = 8, vo = 220
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.1, 8.0, 220.0)
    }
}

impl Potential for MiyamotoNagaiPotential {
    fn evaluate(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
        let asqrtbz = self.a + (z * z + self.b2).sqrt();
        -self.amp / (r * r + asqrtbz * asqrtbz).sqrt()
    }

    fn radial_force(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
        let asqrtbz = self.a + (z * z + self.b2).sqrt();
        self.amp * (-r * (r * r + asqrtbz * asqrtbz).powf(-1.5))
    }

    fn vertical_force(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
        let sqrtbz = (self.b2 + z * z).sqrt();
        let asqrtbz = self.a + sqrtbz;
        self.amp * (-z * asqrtbz / sqrtbz * (r * r + asqrtbz * asqrtbz).powf(-1.5))
    }

    fn azimuthal_force(&self, _r: f64, _z: f64, _phi: f64, _t: f64) -> f64 {
        0.0
    }

    fn rescale_amp(&mut self, factor: f64) {
        self.amp *= factor;
    }
}
