//! Orbit of a test particle in a gravitational potential
//!
//! An [`Orbit`] holds one cylindrical initial condition; `integrate`
//! runs the leapfrog integrator against a chosen potential and stores
//! the resulting trajectory as per-component arrays. Energies are
//! derived by re-querying the potential.

use std::sync::Arc;

use crate::numeric::array::{self, NumArray};
use crate::numeric::coords::{cyl_to_rect, rect_to_cyl_arrays, PhaseVec};
use crate::potential::potential::{rect_force, Potential};
use crate::orbit::leapfrog::leapfrog;

// Stored result of one integration: the realized time grid and the
// six cylindrical phase-space components, all of equal length
struct Trajectory {
    t: NumArray,
    r: NumArray,
    vr: NumArray,
    vt: NumArray,
    z: NumArray,
    vz: NumArray,
    phi: NumArray,
}

/// Quantity selectable for the plotting boundary
///
/// The core hands plain numeric sequences to whatever renderer the
/// embedding front end provides; it does no rendering itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Integration time
    Time,
    /// Cylindrical radius R
    Radius,
    /// Height above the plane z
    Height,
    /// Energy divided by its mean along the orbit
    NormalizedEnergy,
}

/// A test-particle orbit: initial condition plus, after `integrate`,
/// the stored trajectory and the potential it was integrated in
pub struct Orbit {
    vxvv: PhaseVec, // initial condition (R, vR, vT, z, vz, phi)
    ro: f64, // internal length unit
    vo: f64, // internal velocity unit
    pot: Option<Arc<dyn Potential + Send + Sync>>,
    traj: Option<Trajectory>,
}

impl Orbit {
    /// Set up an orbit from a cylindrical initial condition
    /// `(R, vR, vT, z, vz, phi)` with default units
    pub fn new(vxvv: PhaseVec) -> Self {
        Self::with_units(vxvv, 8.0, 220.0)
    }

    /// Set up an orbit with explicit internal units
    pub fn with_units(vxvv: PhaseVec, ro: f64, vo: f64) -> Self {
        Self {
            vxvv,
            ro,
            vo,
            pot: None,
            traj: None,
        }
    }

    /// Initial condition
    pub fn vxvv(&self) -> PhaseVec {
        self.vxvv
    }

    /// Internal length unit
    pub fn ro(&self) -> f64 {
        self.ro
    }

    /// Internal velocity unit
    pub fn vo(&self) -> f64 {
        self.vo
    }

    /// Integrate the orbit in `pot` over `(t_start, t_end, n_samples)`
    ///
    /// Builds the time grid, converts the initial condition to
    /// rectangular coordinates, leapfrogs with the potential's
    /// rectangular force evaluated at the instantaneous cylindrical
    /// position, converts back, and stores the trajectory. Overwrites
    /// any previously stored trajectory; returns `&mut Self` so calls
    /// can chain. The potential is shared read-only; normalize it
    /// before handing it in.
    pub fn integrate(
        &mut self,
        t: (f64, f64, usize),
        pot: Arc<dyn Potential + Send + Sync>,
        rtol: f64,
        atol: f64,
    ) -> &mut Self {
        let tgrid = array::linspace(t.0, t.1, t.2);
        let rect = cyl_to_rect(
            self.vxvv[0],
            self.vxvv[1],
            self.vxvv[2],
            self.vxvv[3],
            self.vxvv[4],
            self.vxvv[5],
        );
        let yo = NumArray::from_vec(vec![rect[0], rect[1], rect[2], rect[3], rect[4], rect[5]]);

        let force_pot = Arc::clone(&pot);
        let force = move |xyz: &NumArray, tt: f64| {
            let (x, y, z) = (xyz[0], xyz[1], xyz[2]);
            let f = rect_force(&*force_pot, (x * x + y * y).sqrt(), z, y.atan2(x), tt);
            NumArray::from_vec(vec![f[0], f[1], f[2]])
        };
        let out = leapfrog(force, &yo, t, rtol, atol);

        let [r, vr, vt, z, vz, phi] = rect_to_cyl_arrays(
            &out.row(0),
            &out.row(1),
            &out.row(2),
            &out.row(3),
            &out.row(4),
            &out.row(5),
        );
        self.traj = Some(Trajectory {
            t: tgrid,
            r,
            vr,
            vt,
            z,
            vz,
            phi,
        });
        self.pot = Some(pot);
        self
    }

    // Stored trajectory; loud failure when integrate has not run
    fn traj(&self) -> &Trajectory {
        match &self.traj {
            Some(traj) => traj,
            None => panic!("orbit has not been integrated"),
        }
    }

    // Potential stored by integrate
    fn pot(&self) -> &dyn Potential {
        match &self.pot {
            Some(pot) => &**pot,
            None => panic!("orbit has not been integrated"),
        }
    }

    /// Realized time grid
    pub fn t(&self) -> &NumArray {
        &self.traj().t
    }

    /// Cylindrical radius along the orbit
    pub fn r(&self) -> &NumArray {
        &self.traj().r
    }

    /// Radial velocity along the orbit
    pub fn vr(&self) -> &NumArray {
        &self.traj().vr
    }

    /// Rotational velocity along the orbit
    pub fn vt(&self) -> &NumArray {
        &self.traj().vt
    }

    /// Height above the plane along the orbit
    pub fn z(&self) -> &NumArray {
        &self.traj().z
    }

    /// Vertical velocity along the orbit
    pub fn vz(&self) -> &NumArray {
        &self.traj().vz
    }

    /// Azimuth along the orbit
    pub fn phi(&self) -> &NumArray {
        &self.traj().phi
    }

    /// Energy of the initial condition in `pot`
    ///
    /// Potential value at the initial position plus the kinetic term
    /// from the initial velocities; does not require a prior
    /// `integrate`
    pub fn energy(&self, pot: &dyn Potential) -> f64 {
        pot.evaluate(self.vxvv[0], self.vxvv[3], self.vxvv[5], 0.0)
            + 0.5
                * (self.vxvv[1] * self.vxvv[1]
                    + self.vxvv[2] * self.vxvv[2]
                    + self.vxvv[4] * self.vxvv[4])
    }

    /// Energy at every stored sample, re-querying the potential the
    /// orbit was integrated in; requires a prior `integrate`
    pub fn energy_along(&self) -> NumArray {
        let traj = self.traj();
        let pot = self.pot();
        let potvals = NumArray::from_vec(
            (0..traj.r.len())
                .map(|idx| {
                    pot.evaluate(traj.r[idx], traj.z[idx], traj.phi[idx], traj.t[idx])
                })
                .collect(),
        );
        potvals.add(
            &traj
                .vr
                .mult(&traj.vr)
                .add(&traj.vt.mult(&traj.vt))
                .add(&traj.vz.mult(&traj.vz))
                .mult(0.5),
        )
    }

    /// One plottable series plus its axis label, as plain numbers
    ///
    /// This is the boundary to the excluded visualization layer: a
    /// renderer pairs two such series for its x and y axes. Requires
    /// a prior `integrate`.
    pub fn plot_quantity(&self, quantity: Quantity) -> (Vec<f64>, &'static str) {
        match quantity {
            Quantity::Time => (self.t().to_vec(), "$t$"),
            Quantity::Radius => (self.r().to_vec(), "$R$"),
            Quantity::Height => (self.z().to_vec(), "$z$"),
            Quantity::NormalizedEnergy => {
                let e = self.energy_along();
                (e.mult(1.0 / e.mean()).to_vec(), "$E/\\langle E \\rangle$")
            }
        }
    }
}
