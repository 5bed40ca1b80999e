//! Coordinate conversions between cylindrical and rectangular
//! phase space
//!
//! A phase-space point is a 6-vector, either rectangular
//! `(x, y, z, vx, vy, vz)` or cylindrical `(R, vR, vT, z, vz, phi)`.
//! Scalar conversions operate on [`PhaseVec`]; vector conversions
//! apply the same formulas elementwise to six equal-length
//! [`NumArray`]s and agree with the scalar path pointwise.

use nalgebra::{Vector3, Vector6};

use crate::numeric::array::NumArray;

pub type NVec3 = Vector3<f64>;
pub type PhaseVec = Vector6<f64>;

/// Convert a cylindrical phase-space point to rectangular
///
/// `x = R cos(phi)`, `y = R sin(phi)`,
/// `vx = vR cos(phi) - vT sin(phi)`, `vy = vR sin(phi) + vT cos(phi)`
#[allow(clippy::many_single_char_names)]
pub fn cyl_to_rect(r: f64, vr: f64, vt: f64, z: f64, vz: f64, phi: f64) -> PhaseVec {
    let cosphi = phi.cos();
    let sinphi = phi.sin();
    PhaseVec::new(
        r * cosphi,
        r * sinphi,
        z,
        vr * cosphi - vt * sinphi,
        vr * sinphi + vt * cosphi,
        vz,
    )
}

/// Convert a rectangular phase-space point to cylindrical
///
/// `R = sqrt(x^2 + y^2)`, `phi = atan2(y, x)`,
/// `vR = (vx x + vy y) / R`, `vT = (-vx y + vy x) / R`.
/// Singular at `R = 0`: the velocity components divide by zero and
/// come back as floating-point special values, not as an error
#[allow(clippy::many_single_char_names)]
pub fn rect_to_cyl(x: f64, y: f64, z: f64, vx: f64, vy: f64, vz: f64) -> PhaseVec {
    let r = (x * x + y * y).sqrt();
    let phi = y.atan2(x);
    let vr = vx * x / r + vy * y / r;
    let vt = -vx * y / r + vy * x / r;
    PhaseVec::new(r, vr, vt, z, vz, phi)
}

/// Vector form of [`cyl_to_rect`]: elementwise over six equal-length
/// arrays, returned as `[x, y, z, vx, vy, vz]`
pub fn cyl_to_rect_arrays(
    r: &NumArray,
    vr: &NumArray,
    vt: &NumArray,
    z: &NumArray,
    vz: &NumArray,
    phi: &NumArray,
) -> [NumArray; 6] {
    let cosphi = phi.cos();
    let sinphi = phi.sin();
    let x = r.mult(&cosphi);
    let y = r.mult(&sinphi);
    let vx = vr.mult(&cosphi).add(&vt.mult(&sinphi).mult(-1.0));
    let vy = vr.mult(&sinphi).add(&vt.mult(&cosphi));
    [x, y, z.clone(), vx, vy, vz.clone()]
}

/// Vector form of [`rect_to_cyl`]: elementwise over six equal-length
/// arrays, returned as `[R, vR, vT, z, vz, phi]`
pub fn rect_to_cyl_arrays(
    x: &NumArray,
    y: &NumArray,
    z: &NumArray,
    vx: &NumArray,
    vy: &NumArray,
    vz: &NumArray,
) -> [NumArray; 6] {
    let r = x.mult(x).add(&y.mult(y)).map(f64::sqrt);
    let phi = NumArray::from_vec(
        y.as_slice()
            .iter()
            .zip(x.as_slice())
            .map(|(&yy, &xx)| yy.atan2(xx))
            .collect(),
    );
    let rinv = r.inv();
    let vr = vx.mult(x).add(&vy.mult(y)).mult(&rinv);
    let vt = vx.mult(-1.0).mult(y).add(&vy.mult(x)).mult(&rinv);
    [r, vr, vt, z.clone(), vz.clone(), phi]
}
