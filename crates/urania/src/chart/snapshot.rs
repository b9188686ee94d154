use crate::aspects::Aspect;
use crate::ephemeris::types::{Body, BodyPosition, GeoLocation};
use crate::error::EngineError;
use crate::houses::{ChartAngles, HouseCusps, HOUSE_COUNT};
use crate::western::{Element, Modality, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Map key rendered as `House1`..`House12`, ordered numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HouseLabel(pub usize);

impl fmt::Display for HouseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "House{}", self.0)
    }
}

impl Serialize for HouseLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for HouseLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("House")
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| (1..=HOUSE_COUNT).contains(n))
            .map(HouseLabel)
            .ok_or_else(|| {
                format!("invalid house key {:?}, expected House1..House{}", s, HOUSE_COUNT)
            })
    }
}

impl<'de> Deserialize<'de> for HouseLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Complete natal chart for one instant and location.
///
/// Built once by [`crate::chart::ChartAggregator`] and never mutated. All maps
/// are ordered, so serializing the same snapshot twice yields the same bytes,
/// and a stored snapshot reads back to the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    #[serde(rename = "birthDateTime")]
    pub birth_date_time: DateTime<Utc>,
    pub location: GeoLocation,
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
    #[serde(rename = "planetPositions")]
    pub planet_positions: Vec<BodyPosition>,
    pub houses: HouseCusps,
    pub angles: ChartAngles,
    pub aspects: Vec<Aspect>,
    #[serde(rename = "planetSigns")]
    pub planet_signs: BTreeMap<Body, String>,
    #[serde(rename = "housesSigns")]
    pub houses_signs: BTreeMap<HouseLabel, ZodiacSign>,
    pub elements: BTreeMap<Element, Vec<String>>,
    pub modalities: BTreeMap<Modality, Vec<String>>,
    pub signs: BTreeMap<ZodiacSign, String>,
}

impl ChartSnapshot {
    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.planet_positions.iter().find(|p| p.name == body.name())
    }

    /// Sign of a body's longitude, without any retrograde marker
    pub fn sign_of(&self, body: Body) -> Option<ZodiacSign> {
        self.position(body).map(|p| ZodiacSign::from_longitude(p.longitude))
    }

    /// Sign on the first house cusp
    pub fn rising_sign(&self) -> ZodiacSign {
        ZodiacSign::from_longitude(self.angles.ascendant)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(EngineError::Serialization)
    }

    pub fn to_json_pretty(&self) -> Result<String, EngineError> {
        serde_json::to_string_pretty(self).map_err(EngineError::Serialization)
    }

    /// Read back a snapshot stored with [`ChartSnapshot::to_json`]
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::ChartParse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_label_parse() {
        assert_eq!("House1".parse::<HouseLabel>(), Ok(HouseLabel(1)));
        assert_eq!("House12".parse::<HouseLabel>(), Ok(HouseLabel(12)));
        assert!("House0".parse::<HouseLabel>().is_err());
        assert!("House13".parse::<HouseLabel>().is_err());
        assert!("house1".parse::<HouseLabel>().is_err());
        assert!("1".parse::<HouseLabel>().is_err());
    }

    #[test]
    fn test_house_keyed_map_reads_back() {
        let json = r#"{"House2":"Taurus","House10":"Capricorn"}"#;
        let map: BTreeMap<HouseLabel, ZodiacSign> = serde_json::from_str(json).unwrap();
        assert_eq!(map[&HouseLabel(10)], ZodiacSign::Capricorn);
        assert_eq!(serde_json::to_string(&map).unwrap(), json);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ChartSnapshot::from_json(r#"{"julianDay": 1.0}"#).unwrap_err();
        assert!(matches!(err, EngineError::ChartParse(_)));
    }
}
