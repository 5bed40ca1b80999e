//! Composite potential summing the fields of its constituents
//!
//! A [`PotentialSet`] is itself a [`Potential`]: its value and force
//! components are the sums over the registered laws, so everything
//! downstream (force composition, the integrator, energies) works on
//! a single law and a composite alike.

use crate::potential::potential::Potential;

/// Collection of potentials whose fields add
///
/// Built with the chaining [`PotentialSet::with`] builder:
/// `PotentialSet::new().with(disk).with(halo)`
pub struct PotentialSet {
    terms: Vec<Box<dyn Potential + Send + Sync>>,
}

impl PotentialSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a constituent potential
    pub fn with(mut self, term: impl Potential + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Number of constituents
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set has no constituents
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for PotentialSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Potential for PotentialSet {
    fn evaluate(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        self.terms.iter().map(|p| p.evaluate(r, z, phi, t)).sum()
    }

    fn radial_force(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        self.terms.iter().map(|p| p.radial_force(r, z, phi, t)).sum()
    }

    fn vertical_force(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        self.terms
            .iter()
            .map(|p| p.vertical_force(r, z, phi, t))
            .sum()
    }

    fn azimuthal_force(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        self.terms
            .iter()
            .map(|p| p.azimuthal_force(r, z, phi, t))
            .sum()
    }

    // Uniform rescale of every constituent, so normalize() pins the
    // total radial force at the reference point
    fn rescale_amp(&mut self, factor: f64) {
        for term in &mut self.terms {
            term.rescale_amp(factor);
        }
    }
}
