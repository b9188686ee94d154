use crate::angle::normalize_degrees;
use crate::ephemeris::julian::{centuries_since_j2000, J2000_JD};
use crate::ephemeris::types::GeoLocation;
use crate::error::EngineError;
use crate::houses::types::{ChartAngles, HouseCusps, HouseFrame, HOUSE_COUNT};

/// Greenwich mean sidereal time in degrees, `[0, 360)`
pub fn greenwich_mean_sidereal_time(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let gmst = 280.46061837 + 360.98564736629 * (jd - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(gmst)
}

/// Local sidereal time in degrees for an east-positive longitude
pub fn local_sidereal_time(jd: f64, east_longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(jd) + east_longitude)
}

/// Mean obliquity of the ecliptic in degrees
pub fn mean_obliquity(t: f64) -> f64 {
    23.4392911 - 0.0130042 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t
}

/// Solar declination in degrees from the Sun's mean longitude
pub fn solar_declination(t: f64) -> f64 {
    let sun_lon = normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    (mean_obliquity(t).to_radians().sin() * sun_lon.to_radians().sin())
        .asin()
        .to_degrees()
}

/// Ascendant longitude in degrees from LST, latitude and declination (all degrees)
pub fn ascendant(lst: f64, latitude: f64, declination: f64) -> f64 {
    let (sin_lst, cos_lst) = lst.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
    let y = cos_lst;
    let x = -sin_lst * sin_lat + declination.to_radians().tan() * cos_lat;
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Equal houses: each cusp 30° after the previous, starting at the ascendant
pub fn equal_house_cusps(ascendant: f64) -> HouseCusps {
    let mut cusps = [0.0; HOUSE_COUNT];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_degrees(ascendant + 30.0 * i as f64);
    }
    HouseCusps(cusps)
}

/// Computes the house frame for a Julian Day and observer
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseSystem;

impl HouseSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, jd: f64, location: &GeoLocation) -> Result<HouseFrame, EngineError> {
        location.validate()?;

        let t = centuries_since_j2000(jd);
        let lst = local_sidereal_time(jd, location.lon);
        let asc = ascendant(lst, location.lat, solar_declination(t));
        let cusps = equal_house_cusps(asc);

        let angles = ChartAngles {
            ascendant: asc,
            midheaven: cusps.0[9],
            descendant: normalize_degrees(asc + 180.0),
            imum_coeli: normalize_degrees(asc + 90.0),
            ramc: lst,
        };

        log::debug!(
            "HouseSystem: LST={:.4} ASC={:.4} MC={:.4}",
            lst,
            angles.ascendant,
            angles.midheaven
        );

        Ok(HouseFrame {
            cusps,
            angles,
            local_sidereal_time: lst,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmst_at_j2000() {
        assert!((greenwich_mean_sidereal_time(J2000_JD) - 280.46061837).abs() < 1e-9);
    }

    #[test]
    fn test_lst_wraps_with_longitude() {
        let jd = 2460291.5;
        let west = local_sidereal_time(jd, -170.0);
        let east = local_sidereal_time(jd, 170.0);
        assert!((0.0..360.0).contains(&west));
        assert!((0.0..360.0).contains(&east));
        let diff = normalize_degrees(east - west);
        assert!((diff - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_obliquity_at_epoch() {
        assert_eq!(mean_obliquity(0.0), 23.4392911);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for i in 0..40 {
            let t = -1.0 + i as f64 * 0.05;
            assert!(solar_declination(t).abs() <= mean_obliquity(t) + 1e-9);
        }
    }

    #[test]
    fn test_equal_cusps_step_thirty() {
        let cusps = equal_house_cusps(345.0);
        assert_eq!(cusps.cusp(1), Some(345.0));
        assert_eq!(cusps.cusp(2), Some(15.0));
        assert_eq!(cusps.cusp(13), None);
        assert_eq!(cusps.cusp(0), None);
    }

    #[test]
    fn test_frame_angles() {
        let frame = HouseSystem::new()
            .compute(2451545.0, &GeoLocation::new(51.5, -0.12))
            .unwrap();
        let asc = frame.angles.ascendant;
        assert_eq!(frame.cusps.cusp(1), Some(asc));
        assert_eq!(frame.cusps.cusp(10), Some(frame.angles.midheaven));
        assert!((normalize_degrees(frame.angles.descendant - asc) - 180.0).abs() < 1e-9);
        assert_eq!(frame.angles.ramc, frame.local_sidereal_time);
    }

    #[test]
    fn test_invalid_location_rejected() {
        let err = HouseSystem::new()
            .compute(2451545.0, &GeoLocation::new(95.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidLocation { .. }));
    }
}
