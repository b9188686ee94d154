use serde::{Deserialize, Serialize};

/// Number of houses in a chart
pub const HOUSE_COUNT: usize = 12;

/// The twelve house cusps in ecliptic longitude.
///
/// Stored zero-based; `cusp(1)` is the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseCusps(pub [f64; HOUSE_COUNT]);

impl HouseCusps {
    /// Cusp longitude for a one-based house number
    pub fn cusp(&self, house: usize) -> Option<f64> {
        house.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// `(house number, longitude)` pairs in house order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().enumerate().map(|(i, lon)| (i + 1, *lon))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Chart angles derived from the house frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    #[serde(rename = "imumCoeli")]
    pub imum_coeli: f64,
    /// Right ascension of the midheaven (equals local sidereal time)
    pub ramc: f64,
}

/// Cusps and angles for one instant and location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseFrame {
    pub cusps: HouseCusps,
    pub angles: ChartAngles,
    pub local_sidereal_time: f64,
}
