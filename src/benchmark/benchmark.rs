use std::sync::Arc;
use std::time::Instant;

use crate::numeric::coords::PhaseVec;
use crate::orbit::leapfrog::{DEFAULT_ATOL, DEFAULT_RTOL};
use crate::orbit::orbit::Orbit;
use crate::potential::isochrone::IsochronePotential;
use crate::potential::miyamoto_nagai::MiyamotoNagaiPotential;
use crate::potential::potential::Potential;

/// Helper to build a normalized potential shared for integration
fn make_potential(isochrone: bool) -> Arc<dyn Potential + Send + Sync> {
    if isochrone {
        let mut pot = IsochronePotential::default();
        pot.normalize(1.0);
        Arc::new(pot)
    } else {
        let mut pot = MiyamotoNagaiPotential::default();
        pot.normalize(1.0);
        Arc::new(pot)
    }
}

/// Helper to build the standard benchmark orbit
fn make_orbit() -> Orbit {
    Orbit::new(PhaseVec::new(1.0, 0.1, 1.1, 0.1, -0.2, 0.3))
}

/// Benchmark a full orbit integration across sample counts
pub fn bench_leapfrog() {
    // Different sample counts to test
    let nts = [101, 301, 1001, 3001, 10001];

    for nt in nts {
        let iso = make_potential(true);
        let mn = make_potential(false);

        // Warm up
        make_orbit().integrate((0.0, 10.0, 101), Arc::clone(&iso), 1e-8, 1e-8);

        // Time isochrone
        let mut orbit = make_orbit();
        let t0 = Instant::now();
        orbit.integrate((0.0, 10.0, nt), Arc::clone(&iso), 1e-8, 1e-8);
        let dt_iso = t0.elapsed().as_secs_f64();

        // Time Miyamoto-Nagai
        let mut orbit = make_orbit();
        let t1 = Instant::now();
        orbit.integrate((0.0, 10.0, nt), Arc::clone(&mn), 1e-8, 1e-8);
        let dt_mn = t1.elapsed().as_secs_f64();

        println!("nt = {nt:6}, isochrone = {dt_iso:8.6} s, miyamoto-nagai = {dt_mn:8.6} s");
    }
}

/// Benchmark integration against tolerance for a range of rtol/atol
/// Paste output directly into a spreadsheet to graph
pub fn bench_leapfrog_curve() {
    println!("tol,iso_ms,mn_ms");

    for exp in 4..=12 {
        let tol = 10.0f64.powi(-exp);

        let iso = make_potential(true);
        let mut orbit = make_orbit();
        let t0 = Instant::now();
        orbit.integrate((0.0, 10.0, 301), Arc::clone(&iso), tol, tol);
        let ms_iso = t0.elapsed().as_secs_f64() * 1000.0;

        let mn = make_potential(false);
        let mut orbit = make_orbit();
        let t1 = Instant::now();
        orbit.integrate((0.0, 10.0, 301), Arc::clone(&mn), tol, tol);
        let ms_mn = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{:.0e},{:.6},{:.6}", tol, ms_iso, ms_mn);
    }

    // Reference point: default tolerances
    let iso = make_potential(true);
    let mut orbit = make_orbit();
    let t0 = Instant::now();
    orbit.integrate((0.0, 10.0, 301), iso, DEFAULT_RTOL, DEFAULT_ATOL);
    println!(
        "default,{:.6},",
        t0.elapsed().as_secs_f64() * 1000.0
    );
}
