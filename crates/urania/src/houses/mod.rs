pub mod calculator;
pub mod types;

pub use calculator::{
    ascendant, equal_house_cusps, greenwich_mean_sidereal_time, local_sidereal_time,
    mean_obliquity, solar_declination, HouseSystem,
};
pub use types::{ChartAngles, HouseCusps, HouseFrame, HOUSE_COUNT};
