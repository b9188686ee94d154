use crate::aspects::Aspect;
use crate::chart::snapshot::{ChartSnapshot, HouseLabel};
use crate::ephemeris::types::{Body, BodyPosition, GeoLocation};
use crate::houses::{HouseCusps, HouseFrame};
use crate::western::{element_distribution, modality_distribution, sign_range_table, ZodiacSign};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Assembles a [`ChartSnapshot`] from solved positions, houses and aspects
#[derive(Debug, Clone)]
pub struct ChartAggregator {
    retrograde_marker: String,
}

impl ChartAggregator {
    pub fn new(retrograde_marker: impl Into<String>) -> Self {
        Self {
            retrograde_marker: retrograde_marker.into(),
        }
    }

    pub fn build(
        &self,
        birth_date_time: DateTime<Utc>,
        location: GeoLocation,
        julian_day: f64,
        positions: Vec<BodyPosition>,
        frame: &HouseFrame,
        aspects: Vec<Aspect>,
    ) -> ChartSnapshot {
        ChartSnapshot {
            birth_date_time,
            location,
            julian_day,
            planet_signs: self.planet_signs(&positions),
            houses_signs: houses_signs(&frame.cusps),
            elements: element_distribution(&positions),
            modalities: modality_distribution(&positions),
            signs: sign_range_table(),
            planet_positions: positions,
            houses: frame.cusps,
            angles: frame.angles,
            aspects,
        }
    }

    /// Body to sign name, with the retrograde marker appended where flagged
    pub fn planet_signs(&self, positions: &[BodyPosition]) -> BTreeMap<Body, String> {
        positions
            .iter()
            .filter_map(|pos| {
                let body: Body = pos.name.parse().ok()?;
                let sign = ZodiacSign::from_longitude(pos.longitude);
                let label = if pos.retrograde {
                    format!("{}{}", sign, self.retrograde_marker)
                } else {
                    sign.to_string()
                };
                Some((body, label))
            })
            .collect()
    }
}

impl Default for ChartAggregator {
    fn default() -> Self {
        Self::new(" (R)")
    }
}

/// Sign on each house cusp
pub fn houses_signs(cusps: &HouseCusps) -> BTreeMap<HouseLabel, ZodiacSign> {
    cusps
        .iter()
        .map(|(house, lon)| (HouseLabel(house), ZodiacSign::from_longitude(lon)))
        .collect()
}
