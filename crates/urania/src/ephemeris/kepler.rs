//! Kepler equation solving and orbital-plane geometry.

use crate::ephemeris::catalog::CelestialBody;
use std::f64::consts::TAU;

/// Fixed Newton iteration count. Precision is bounded by this count rather
/// than by a convergence tolerance; the result is never reported as an error.
pub const KEPLER_ITERATIONS: usize = 5;

/// Solve `M = E - e sin E` for the eccentric anomaly `E`.
///
/// `mean_anomaly_deg` may be any angle in degrees. Returns `E` in radians.
pub fn solve_kepler(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians().rem_euclid(TAU);
    let mut e_anom = m;
    for _ in 0..KEPLER_ITERATIONS {
        let delta = (e_anom - eccentricity * e_anom.sin() - m) / (1.0 - eccentricity * e_anom.cos());
        e_anom -= delta;
    }
    e_anom
}

/// True anomaly in radians from the eccentric anomaly (radians)
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    let y = (1.0 - eccentricity * eccentricity).sqrt() * sin_e;
    let x = cos_e - eccentricity;
    y.atan2(x)
}

/// Orbital radius for an eccentric anomaly (radians), in the units of `a`
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Solved orbit state for one body at one mean anomaly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Eccentric anomaly, radians
    pub eccentric_anomaly: f64,
    /// True anomaly, radians
    pub true_anomaly: f64,
    /// Orbital radius, AU
    pub radius: f64,
}

impl OrbitState {
    /// Position in the orbital plane `(x, y)`, AU
    pub fn plane_xy(&self) -> (f64, f64) {
        let (sin_v, cos_v) = self.true_anomaly.sin_cos();
        (self.radius * cos_v, self.radius * sin_v)
    }
}

/// Run the Kepler solve for `elements` at the given mean anomaly (degrees)
pub fn solve_orbit(elements: &CelestialBody, mean_anomaly_deg: f64) -> OrbitState {
    let e = elements.eccentricity;
    let eccentric_anomaly = solve_kepler(mean_anomaly_deg, e);
    OrbitState {
        eccentric_anomaly,
        true_anomaly: true_anomaly(eccentric_anomaly, e),
        radius: orbital_radius(elements.semi_major_axis, e, eccentric_anomaly),
    }
}
