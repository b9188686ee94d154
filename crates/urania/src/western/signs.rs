//! Zodiac signs and their classification.
//!
//! Signs are twelve half-open 30° ranges `[start, start + 30)` measured from
//! 0° Aries, so every normalized longitude belongs to exactly one sign.

use crate::angle::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Elements cycle Fire, Earth, Air, Water from Aries
    pub fn element(self) -> Element {
        Element::ALL[self.index() % 4]
    }

    /// Modalities cycle Cardinal, Fixed, Mutable from Aries
    pub fn modality(self) -> Modality {
        Modality::ALL[self.index() % 3]
    }

    pub fn start_longitude(self) -> f64 {
        30.0 * self.index() as f64
    }

    pub fn end_longitude(self) -> f64 {
        self.start_longitude() + 30.0
    }

    /// Range label such as `"0-30"`
    pub fn range(self) -> String {
        format!("{:.0}-{:.0}", self.start_longitude(), self.end_longitude())
    }

    /// Sign containing a longitude (any angle; normalized first)
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let lon = normalize_degrees(longitude);
        let mut idx = ((lon / 30.0).floor() as usize).min(11);
        // division can round up across a boundary
        if idx > 0 && lon < 30.0 * idx as f64 {
            idx -= 1;
        }
        ZodiacSign::ALL[idx]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign plus whole degrees and arc minutes within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: ZodiacSign,
    pub degree: u32,
    pub minutes: u32,
}

impl SignPlacement {
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        let sign = ZodiacSign::from_longitude(lon);
        let within = (lon - sign.start_longitude()).max(0.0);
        let degree = (within.floor() as u32).min(29);
        let minutes = (((within - within.floor()) * 60.0).floor() as u32).min(59);
        Self { sign, degree, minutes }
    }
}

impl fmt::Display for SignPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {}", self.degree, self.minutes, self.sign)
    }
}
