pub mod aggregator;
pub mod snapshot;

pub use aggregator::{houses_signs, ChartAggregator};
pub use snapshot::{ChartSnapshot, HouseLabel};
