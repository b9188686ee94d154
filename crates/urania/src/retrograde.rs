//! Apparent retrograde flag.
//!
//! A body is sampled at one-day steps around the instant (day -1, 0, +1) and
//! its geocentric longitude compared between consecutive samples. Earth is
//! modelled with the Sun's orbital elements and the same starting mean
//! longitude as the body, advanced at the Sun's mean daily motion.
//!
//! Because Earth starts at the body's own mean longitude, the two sit close
//! together in every sample and the faster one always wins. In practice
//! Mercury through Pluto come out retrograde on essentially every date. The
//! flag is not a real astronomical retrograde station; it only reports that
//! this simplified geometry moves backwards. Sun and Moon are never flagged.

use crate::angle::{normalize_degrees, wrap_signed_degrees};
use crate::ephemeris::catalog::{elements, CelestialBody};
use crate::ephemeris::kepler::solve_orbit;
use crate::ephemeris::types::Body;

/// Day offsets of the three samples
pub const SAMPLE_OFFSETS_DAYS: [f64; 3] = [-1.0, 0.0, 1.0];

/// True when both one-day steps move backwards in longitude.
///
/// Steps are wrapped into `(-180, 180]` first, so a sequence crossing 0° is
/// read as a small step rather than a ~360° jump.
pub fn classify_samples(longitudes: [f64; 3]) -> bool {
    let step1 = wrap_signed_degrees(longitudes[1] - longitudes[0]);
    let step2 = wrap_signed_degrees(longitudes[2] - longitudes[1]);
    step1 < 0.0 && step2 < 0.0
}

fn heliocentric_xy(el: &CelestialBody, mean_anomaly_deg: f64) -> (f64, f64) {
    solve_orbit(el, mean_anomaly_deg).plane_xy()
}

/// Geocentric longitudes (degrees, `[0, 360)`) at the three sample offsets
pub fn geocentric_samples(body: Body, mean_longitude: f64) -> [f64; 3] {
    let planet = elements(body);
    let earth = elements(Body::Sun);

    SAMPLE_OFFSETS_DAYS.map(|days| {
        let (xp, yp) = heliocentric_xy(planet, mean_longitude + planet.mean_motion * days);
        let (xe, ye) = heliocentric_xy(earth, mean_longitude + earth.mean_motion * days);
        normalize_degrees((yp - ye).atan2(xp - xe).to_degrees())
    })
}

/// Retrograde flag for `body` at `t` Julian centuries since J2000.0.
///
/// Always false for the Sun and Moon.
pub fn is_retrograde(body: Body, t: f64) -> bool {
    if body.is_luminary() {
        return false;
    }
    let mean_longitude = elements(body).mean_longitude(t);
    let retro = classify_samples(geocentric_samples(body, mean_longitude));
    log::trace!("Retrograde: {} at T={:.8} -> {}", body, t, retro);
    retro
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_forward_motion() {
        assert!(!classify_samples([10.0, 11.0, 12.0]));
    }

    #[test]
    fn test_classify_backward_motion() {
        assert!(classify_samples([12.0, 11.0, 10.0]));
    }

    #[test]
    fn test_classify_mixed_is_not_retrograde() {
        assert!(!classify_samples([10.0, 9.0, 9.5]));
        assert!(!classify_samples([10.0, 10.0, 9.0]));
    }

    #[test]
    fn test_classify_across_zero() {
        assert!(classify_samples([0.5, 359.8, 359.1]));
        assert!(!classify_samples([359.1, 359.8, 0.5]));
    }

    #[test]
    fn test_luminaries_never_retrograde() {
        for t in [-3.0, -0.4, 0.0, 0.2391, 0.9] {
            assert!(!is_retrograde(Body::Sun, t));
            assert!(!is_retrograde(Body::Moon, t));
        }
    }

    #[test]
    fn test_samples_are_normalized() {
        for body in Body::ALL {
            for lon in geocentric_samples(body, 123.4) {
                assert!((0.0..360.0).contains(&lon));
            }
        }
    }
}
