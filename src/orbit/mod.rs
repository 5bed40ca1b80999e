pub mod params;
pub mod leapfrog;
pub mod orbit;
pub mod scenario;
