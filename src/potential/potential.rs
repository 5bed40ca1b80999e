//! Gravitational potential capability trait and force composition
//!
//! [`Potential`] is the polymorphic surface the integrator drives:
//! `evaluate` plus the three cylindrical force components, each taken
//! at `(r, z, phi, t)`. Default method bodies fail loudly with a
//! distinct "not implemented" message per operation; concrete laws
//! override the ones they support. `normalize` is the one sanctioned
//! mutation: it rescales the amplitude so the radial force at
//! `(R = 1, z = 0)` matches a target magnitude.

use crate::numeric::coords::NVec3;

/// A gravitational potential: scalar field plus its cylindrical
/// force components
///
/// All operations are pure reads; `normalize`/`rescale_amp` are the
/// only mutations and are not safe to share across concurrent callers.
/// Normalize first, then share the potential read-only.
pub trait Potential {
    /// Value of the potential at `(r, z)`, azimuth `phi`, time `t`
    fn evaluate(&self, _r: f64, _z: f64, _phi: f64, _t: f64) -> f64 {
        panic!("Potential evaluate not implemented");
    }

    /// Cylindrical radial force at `(r, z)`, azimuth `phi`, time `t`
    fn radial_force(&self, _r: f64, _z: f64, _phi: f64, _t: f64) -> f64 {
        panic!("Potential radial force not implemented");
    }

    /// Cylindrical vertical force at `(r, z)`, azimuth `phi`, time `t`
    fn vertical_force(&self, _r: f64, _z: f64, _phi: f64, _t: f64) -> f64 {
        panic!("Potential vertical force not implemented");
    }

    /// Cylindrical azimuthal force at `(r, z)`, azimuth `phi`, time `t`
    fn azimuthal_force(&self, _r: f64, _z: f64, _phi: f64, _t: f64) -> f64 {
        panic!("Potential azimuthal force not implemented");
    }

    /// Multiply the amplitude by `factor`; hook for [`Potential::normalize`]
    fn rescale_amp(&mut self, factor: f64);

    /// Rescale the amplitude so the radial force at `(R = 1, z = 0)`
    /// equals `-target`
    ///
    /// A law whose radial force vanishes at the reference point cannot
    /// be normalized: the division yields a non-finite amplitude
    fn normalize(&mut self, target: f64) {
        let factor = -target / self.radial_force(1.0, 0.0, 0.0, 0.0);
        self.rescale_amp(factor);
    }
}

/*
 * Free evaluation functions: the dispatch seam for a single
 * potential; a composite (PotentialSet) makes the list case a
 * Potential itself, so these stay single-dispatch
 */

/// Evaluate a potential
pub fn evaluate(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pot.evaluate(r, z, phi, t)
}

/// Cylindrical radial force of a potential
pub fn radial_force(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pot.radial_force(r, z, phi, t)
}

/// Cylindrical vertical force of a potential
pub fn vertical_force(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pot.vertical_force(r, z, phi, t)
}

/// Cylindrical azimuthal force of a potential
pub fn azimuthal_force(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pot.azimuthal_force(r, z, phi, t)
}

/*
 * Rectangular force composition from the cylindrical components;
 * singular at R = 0 (the azimuthal term divides by R)
 */

/// Rectangular x-component of the force
pub fn x_force(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> f64 {
    phi.cos() * pot.radial_force(r, z, phi, t)
        - phi.sin() / r * pot.azimuthal_force(r, z, phi, t)
}

/// Rectangular y-component of the force
pub fn y_force(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> f64 {
    phi.sin() * pot.radial_force(r, z, phi, t)
        + phi.cos() / r * pot.azimuthal_force(r, z, phi, t)
}

/// Full rectangular force vector `(Fx, Fy, Fz)`
pub fn rect_force(pot: &dyn Potential, r: f64, z: f64, phi: f64, t: f64) -> NVec3 {
    NVec3::new(
        x_force(pot, r, z, phi, t),
        y_force(pot, r, z, phi, t),
        pot.vertical_force(r, z, phi, t),
    )
}
