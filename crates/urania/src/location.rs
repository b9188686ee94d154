//! Place-name resolution.
//!
//! The engine itself only takes coordinates; resolvers sit in front of it and
//! turn a `"City, Country"` query into a [`GeoLocation`].

use crate::ephemeris::types::GeoLocation;
use crate::error::EngineError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Resolves a place query to coordinates
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Name of this resolver (e.g., "city_catalog")
    fn name(&self) -> &str;

    async fn resolve(&self, query: &str) -> Result<GeoLocation, EngineError>;
}

/// One city entry in the catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl CityRecord {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}

/// Split `"City, Country"` into its two parts
pub fn parse_location_query(query: &str) -> Result<(&str, &str), EngineError> {
    let parts: Vec<&str> = query.split(", ").collect();
    match parts.as_slice() {
        [city, country] if !city.trim().is_empty() && !country.trim().is_empty() => {
            Ok((city.trim(), country.trim()))
        }
        _ => Err(EngineError::InvalidLocationFormat {
            query: query.to_string(),
        }),
    }
}

/// In-memory city catalog keyed by country.
///
/// Loaded from JSON shaped `{ "Country": [ { "name", "lat", "lng" } ] }`.
/// City names match exactly.
#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    countries: BTreeMap<String, Vec<CityRecord>>,
}

impl CityCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let countries = serde_json::from_str(json).map_err(EngineError::CatalogParse)?;
        Ok(Self::from_countries(countries))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EngineError> {
        let countries = serde_json::from_reader(reader).map_err(EngineError::CatalogParse)?;
        Ok(Self::from_countries(countries))
    }

    fn from_countries(countries: BTreeMap<String, Vec<CityRecord>>) -> Self {
        let catalog = Self { countries };
        log::info!(
            "CityCatalog: loaded {} cities across {} countries",
            catalog.city_count(),
            catalog.countries.len()
        );
        catalog
    }

    pub fn city_count(&self) -> usize {
        self.countries.values().map(Vec::len).sum()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Look up a city by exact name within a country
    pub fn find(&self, city: &str, country: &str) -> Option<&CityRecord> {
        self.countries
            .get(country)
            .and_then(|cities| cities.iter().find(|c| c.name == city))
    }

    /// Resolve a `"City, Country"` query synchronously
    pub fn lookup(&self, query: &str) -> Result<GeoLocation, EngineError> {
        let (city, country) = parse_location_query(query)?;
        let record = self
            .find(city, country)
            .ok_or_else(|| EngineError::LocationNotFound {
                query: query.to_string(),
            })?;
        let location = record.location();
        location.validate()?;
        log::info!(
            "CityCatalog: using latitude {}, longitude {} for {}",
            location.lat,
            location.lon,
            query
        );
        Ok(location)
    }
}

#[async_trait]
impl LocationResolver for CityCatalog {
    fn name(&self) -> &str {
        "city_catalog"
    }

    async fn resolve(&self, query: &str) -> Result<GeoLocation, EngineError> {
        self.lookup(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "France": [{ "name": "Paris", "lat": 48.8566, "lng": 2.3522 }],
        "Japan": [
            { "name": "Tokyo", "lat": 35.6762, "lng": 139.6503 },
            { "name": "Osaka", "lat": 34.6937, "lng": 135.5023 }
        ]
    }"#;

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_location_query("Paris, France").unwrap(), ("Paris", "France"));
    }

    #[test]
    fn test_parse_query_rejects_bad_shapes() {
        for q in ["Paris", "Paris,France", "Paris, Ile-de-France, France", ", France", ""] {
            let err = parse_location_query(q).unwrap_err();
            assert!(matches!(err, EngineError::InvalidLocationFormat { .. }), "{q}");
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = CityCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.city_count(), 3);
        let loc = catalog.lookup("Osaka, Japan").unwrap();
        assert_eq!(loc, GeoLocation::new(34.6937, 135.5023));
    }

    #[test]
    fn test_lookup_missing_city() {
        let catalog = CityCatalog::from_json_str(SAMPLE).unwrap();
        let err = catalog.lookup("Lyon, France").unwrap_err();
        assert!(matches!(err, EngineError::LocationNotFound { .. }));
        let err = catalog.lookup("Paris, Germany").unwrap_err();
        assert!(matches!(err, EngineError::LocationNotFound { .. }));
    }

    #[test]
    fn test_malformed_catalog() {
        let err = CityCatalog::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, EngineError::CatalogParse(_)));
    }
}
