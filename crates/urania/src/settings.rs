use crate::aspects::OrbTable;
use crate::ephemeris::julian::YearRange;
use serde::{Deserialize, Serialize};

/// Tunables for a chart computation.
///
/// Every field has a default, so a partial TOML table deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    // Aspects
    pub orbs: OrbTable,
    /// An aspect is exact when its orb is strictly below this many degrees
    pub exact_orb: f64,

    // Supported calendar years, inclusive
    pub min_year: i32,
    pub max_year: i32,

    /// Appended to a body's sign in the planet-sign mapping when retrograde
    pub retrograde_marker: String,
}

impl EngineSettings {
    pub fn year_range(&self) -> YearRange {
        YearRange {
            min_year: self.min_year,
            max_year: self.max_year,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            orbs: OrbTable::default(),
            exact_orb: 1.0,
            min_year: 1583,
            max_year: 3000,
            retrograde_marker: " (R)".to_string(),
        }
    }
}
