pub mod catalog;
pub mod julian;
pub mod kepler;
pub mod solver;
pub mod types;

pub use catalog::{elements, CelestialBody, MeanLongitudeRate, CATALOG};
pub use julian::{calendar_to_julian_day, centuries_since_j2000, datetime_to_julian_day, YearRange, J2000_JD};
pub use solver::{body_position, EphemerisSolver};
pub use types::{Body, BodyPosition, GeoLocation};
