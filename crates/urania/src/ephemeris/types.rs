use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Reject non-finite or out-of-range coordinates
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(EngineError::InvalidLocation {
                message: format!("latitude {} is outside [-90, 90]", self.lat),
            });
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(EngineError::InvalidLocation {
                message: format!("longitude {} is outside [-180, 180]", self.lon),
            });
        }
        Ok(())
    }
}

/// The ten chart bodies, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Index into the orbital element catalog
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Sun and Moon never show apparent retrograde motion
    pub fn is_luminary(self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Body::ALL
            .iter()
            .copied()
            .find(|body| body.name().to_lowercase() == wanted)
            .ok_or_else(|| EngineError::UnknownBody {
                name: s.to_string(),
                valid: Body::ALL.iter().map(|b| b.name().to_string()).collect(),
            })
    }
}

/// Computed position of one body at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub name: String,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Orbital radius in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    /// Whether the body is in apparent retrograde motion
    pub retrograde: bool,
}
