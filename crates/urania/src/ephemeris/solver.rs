use crate::angle::normalize_degrees;
use crate::ephemeris::catalog::elements;
use crate::ephemeris::julian::{centuries_since_j2000, datetime_to_julian_day, YearRange};
use crate::ephemeris::kepler::solve_orbit;
use crate::ephemeris::types::{Body, BodyPosition};
use crate::error::EngineError;
use crate::retrograde;
use chrono::{DateTime, Utc};

/// Orbital-element ephemeris for the ten chart bodies.
///
/// Holds no state besides the accepted year range; every method is a pure
/// function of its inputs and the static catalog.
#[derive(Debug, Clone, Copy)]
pub struct EphemerisSolver {
    years: YearRange,
}

impl EphemerisSolver {
    pub fn new(years: YearRange) -> Self {
        Self { years }
    }

    /// Julian Day for a UTC instant
    pub fn julian_day(&self, dt_utc: DateTime<Utc>) -> Result<f64, EngineError> {
        datetime_to_julian_day(dt_utc, self.years)
    }

    /// Positions of all bodies, in catalog order
    pub fn positions_at(&self, dt_utc: DateTime<Utc>) -> Result<Vec<BodyPosition>, EngineError> {
        let jd = self.julian_day(dt_utc)?;
        Ok(self.positions_for_julian_day(jd))
    }

    /// Positions of all bodies at a Julian Day
    pub fn positions_for_julian_day(&self, jd: f64) -> Vec<BodyPosition> {
        let t = centuries_since_j2000(jd);
        Body::ALL.iter().map(|&body| body_position(body, t)).collect()
    }

    /// Position for a single body looked up by name (case-insensitive)
    pub fn position_of(
        &self,
        body_name: &str,
        dt_utc: DateTime<Utc>,
    ) -> Result<BodyPosition, EngineError> {
        let body: Body = body_name.parse()?;
        let jd = self.julian_day(dt_utc)?;
        Ok(body_position(body, centuries_since_j2000(jd)))
    }
}

/// Compute one body's position at `t` Julian centuries since J2000.0
pub fn body_position(body: Body, t: f64) -> BodyPosition {
    let el = elements(body);
    let mean_longitude = el.mean_longitude(t);
    let orbit = solve_orbit(el, mean_longitude);

    let longitude = normalize_degrees(mean_longitude + orbit.true_anomaly.to_degrees());
    let speed = el.mean_motion * (1.0 + el.eccentricity * orbit.true_anomaly.cos());
    let latitude = (el.inclination.to_radians().sin()
        * (longitude - el.ascending_node).to_radians().sin())
    .asin()
    .to_degrees();

    BodyPosition {
        name: body.name().to_string(),
        longitude,
        latitude,
        distance: orbit.radius,
        speed,
        retrograde: retrograde::is_retrograde(body, t),
    }
}
