//! Natal chart engine: approximate orbital positions, house cusps, aspects
//! and sign classification for a birth instant and place.

pub mod angle;
pub mod aspects;
pub mod chart;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod interpretation;
pub mod location;
pub mod retrograde;
pub mod settings;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectKind, OrbTable};
pub use chart::{ChartAggregator, ChartSnapshot};
pub use engine::NatalEngine;
pub use ephemeris::{Body, BodyPosition, EphemerisSolver, GeoLocation};
pub use error::EngineError;
pub use houses::{ChartAngles, HouseCusps, HouseSystem};
pub use interpretation::{build_prompt, render_interpretation, render_prompt_summary};
pub use location::{CityCatalog, LocationResolver};
pub use settings::EngineSettings;
pub use western::{Element, Modality, SignPlacement, ZodiacSign};
