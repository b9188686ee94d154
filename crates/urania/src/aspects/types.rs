use serde::{Deserialize, Serialize};
use std::fmt;

/// The five major aspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Table order, by ascending exact angle
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_conjunction_orb() -> f64 {
    10.0
}

fn default_sextile_orb() -> f64 {
    6.0
}

fn default_square_orb() -> f64 {
    8.0
}

fn default_trine_orb() -> f64 {
    8.0
}

fn default_opposition_orb() -> f64 {
    10.0
}

/// Allowed orb per aspect kind, degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbTable {
    #[serde(default = "default_conjunction_orb")]
    pub conjunction: f64,
    #[serde(default = "default_sextile_orb")]
    pub sextile: f64,
    #[serde(default = "default_square_orb")]
    pub square: f64,
    #[serde(default = "default_trine_orb")]
    pub trine: f64,
    #[serde(default = "default_opposition_orb")]
    pub opposition: f64,
}

impl OrbTable {
    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            conjunction: default_conjunction_orb(),
            sextile: default_sextile_orb(),
            square: default_square_orb(),
            trine: default_trine_orb(),
            opposition: default_opposition_orb(),
        }
    }
}

/// One aspect matched between two longitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Distance from the exact angle, degrees
    pub orb: f64,
    pub exact: bool,
}

/// An aspect between two chart bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet1: String,
    pub planet2: String,
    pub aspect: AspectKind,
    /// Exact angle of the aspect
    pub angle: f64,
    pub orb: f64,
    pub exact: bool,
}

impl Aspect {
    /// True if this aspect joins `a` and `b` in either order
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.planet1 == a && self.planet2 == b) || (self.planet1 == b && self.planet2 == a)
    }
}
