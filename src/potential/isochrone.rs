//! Isochrone potential
//!
//! Phi(r) = -amp / (b + sqrt(r^2 + b^2)) in spherical radius
//! r^2 = R^2 + z^2, with scale length `b` rescaled into internal
//! units by `ro` at construction. Axisymmetric: the azimuthal force
//! is identically zero.

use crate::potential::potential::Potential;

/// Isochrone potential
#[derive(Debug, Clone)]
pub struct IsochronePotential {
    amp: f64, // amplitude (mass)
    b: f64, // scale length, internal units
    b2: f64, // scale length squared
    ro: f64, // internal length unit
    vo: f64, // internal velocity unit
}

impl IsochronePotential {
    /// Set up the potential; `b` is given in physical units and
    /// rescaled by `ro`
    pub fn new(amp: f64, b: f64, ro: f64, vo: f64) -> Self {
        let b = b / ro;
        Self {
            amp,
            b,
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

impl Default for IsochronePotential {
    // amp = 1, b = 1, ro = 8, vo = 220
    fn default() -> Self {
        Self::new(1.0, 1.0, 8.0, 220.0)
    }
}

impl Potential for IsochronePotential {
    fn evaluate(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
        -self.amp / (self.b + (r * r + z * z + self.b2).sqrt())
    }

    fn radial_force(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
        let rb = (r * r + z * z + self.b2).sqrt();
        -self.amp / rb * r * (self.b + rb).powi(-2)
    }

    fn vertical_force(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
        let rb = (r * r + z * z + self.b2).sqrt();
        -self.amp / rb * z * (self.b + rb).powi(-2)
    }

    fn azimuthal_force(&self, _r: f64, _z: f64, _phi: f64, _t: f64) -> f64 {
        0.0
    }

    fn rescale_amp(&mut self, factor: f64) {
        self.amp *= factor;
    }
}
