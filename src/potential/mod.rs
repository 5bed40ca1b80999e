pub mod potential;
pub mod miyamoto_nagai;
pub mod isochrone;
pub mod set;
