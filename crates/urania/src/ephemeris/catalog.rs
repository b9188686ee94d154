//! Static orbital element catalog.
//!
//! One entry per [`Body`], indexed by `Body::index()`. The table is `const`,
//! so it is shared freely between threads and never mutated.

use crate::ephemeris::types::Body;

/// How a body's mean longitude advances with time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanLongitudeRate {
    /// Linear polynomial: `base + rate * T`
    DegreesPerCentury(f64),
    /// `(360 * T / period) mod 360`, added to the base longitude
    OrbitalPeriodYears(f64),
}

/// Immutable orbital elements for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub body: Body,
    /// Mean daily motion in degrees per day
    pub mean_motion: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Inclination to the ecliptic in degrees
    pub inclination: f64,
    /// Mean longitude at J2000.0 in degrees
    pub base_mean_longitude: f64,
    pub mean_longitude_rate: MeanLongitudeRate,
    /// Argument of perihelion in degrees
    pub argument_of_perihelion: f64,
    /// Longitude of the ascending node in degrees
    pub ascending_node: f64,
}

impl CelestialBody {
    pub fn name(&self) -> &'static str {
        self.body.name()
    }

    /// Mean longitude in degrees at `t` Julian centuries since J2000.0.
    ///
    /// Not normalized; callers normalize after adding the anomaly.
    pub fn mean_longitude(&self, t: f64) -> f64 {
        match self.mean_longitude_rate {
            MeanLongitudeRate::DegreesPerCentury(rate) => self.base_mean_longitude + rate * t,
            MeanLongitudeRate::OrbitalPeriodYears(period) => {
                self.base_mean_longitude + (360.0 * t / period) % 360.0
            }
        }
    }
}

pub const CATALOG: [CelestialBody; 10] = [
    CelestialBody {
        body: Body::Sun,
        mean_motion: 0.985647324828,
        semi_major_axis: 1.000000000,
        eccentricity: 0.016708634,
        inclination: 0.0,
        base_mean_longitude: 280.46646,
        mean_longitude_rate: MeanLongitudeRate::DegreesPerCentury(36000.76983),
        argument_of_perihelion: 102.93768,
        ascending_node: 0.0,
    },
    CelestialBody {
        body: Body::Moon,
        mean_motion: 13.176396489,
        semi_major_axis: 0.002571,
        eccentricity: 0.054900489,
        inclination: 5.145,
        base_mean_longitude: 218.3164477,
        mean_longitude_rate: MeanLongitudeRate::DegreesPerCentury(481267.88123421),
        argument_of_perihelion: 318.0634,
        ascending_node: 125.0445,
    },
    CelestialBody {
        body: Body::Mercury,
        mean_motion: 4.092338633,
        semi_major_axis: 0.387098310,
        eccentricity: 0.205630692,
        inclination: 7.005,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(0.24),
        argument_of_perihelion: 29.12478,
        ascending_node: 48.33167,
    },
    CelestialBody {
        body: Body::Venus,
        mean_motion: 1.602130859,
        semi_major_axis: 0.723332484,
        eccentricity: 0.006771882,
        inclination: 3.395,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(0.615),
        argument_of_perihelion: 54.85229,
        ascending_node: 76.68069,
    },
    CelestialBody {
        body: Body::Mars,
        mean_motion: 0.524020645,
        semi_major_axis: 1.523679342,
        eccentricity: 0.093405115,
        inclination: 1.850,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(1.88),
        argument_of_perihelion: 286.46230,
        ascending_node: 49.57854,
    },
    CelestialBody {
        body: Body::Jupiter,
        mean_motion: 0.083091873,
        semi_major_axis: 5.202603191,
        eccentricity: 0.048498007,
        inclination: 1.304,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(11.86),
        argument_of_perihelion: 274.19770,
        ascending_node: 100.55615,
    },
    CelestialBody {
        body: Body::Saturn,
        mean_motion: 0.033459837,
        semi_major_axis: 9.554909596,
        eccentricity: 0.054151160,
        inclination: 2.486,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(29.46),
        argument_of_perihelion: 338.71690,
        ascending_node: 113.71504,
    },
    CelestialBody {
        body: Body::Uranus,
        mean_motion: 0.011725806,
        semi_major_axis: 19.218446062,
        eccentricity: 0.047167171,
        inclination: 0.772,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(84.01),
        argument_of_perihelion: 96.73436,
        ascending_node: 74.22988,
    },
    CelestialBody {
        body: Body::Neptune,
        mean_motion: 0.005995147,
        semi_major_axis: 30.110386869,
        eccentricity: 0.008585955,
        inclination: 1.769,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(164.79),
        argument_of_perihelion: 273.24966,
        ascending_node: 131.72169,
    },
    CelestialBody {
        body: Body::Pluto,
        mean_motion: 0.003964472,
        semi_major_axis: 39.482117208,
        eccentricity: 0.248808833,
        inclination: 17.140,
        base_mean_longitude: 0.0,
        mean_longitude_rate: MeanLongitudeRate::OrbitalPeriodYears(248.09),
        argument_of_perihelion: 113.76329,
        ascending_node: 110.30347,
    },
];

/// Catalog entry for a body
pub fn elements(body: Body) -> &'static CelestialBody {
    &CATALOG[body.index()]
}
