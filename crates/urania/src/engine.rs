use crate::aspects::AspectCalculator;
use crate::chart::{ChartAggregator, ChartSnapshot};
use crate::ephemeris::{BodyPosition, EphemerisSolver, GeoLocation};
use crate::error::EngineError;
use crate::houses::HouseSystem;
use crate::settings::EngineSettings;
use chrono::{DateTime, Utc};

/// Natal chart engine.
///
/// Holds only immutable settings, so one engine can serve any number of
/// threads concurrently.
#[derive(Debug, Clone)]
pub struct NatalEngine {
    settings: EngineSettings,
    solver: EphemerisSolver,
    houses: HouseSystem,
    aspects: AspectCalculator,
    aggregator: ChartAggregator,
}

impl NatalEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            solver: EphemerisSolver::new(settings.year_range()),
            houses: HouseSystem::new(),
            aspects: AspectCalculator::new(settings.orbs, settings.exact_orb),
            aggregator: ChartAggregator::new(settings.retrograde_marker.clone()),
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn solver(&self) -> &EphemerisSolver {
        &self.solver
    }

    /// Body positions only, without houses
    pub fn positions(&self, dt_utc: DateTime<Utc>) -> Result<Vec<BodyPosition>, EngineError> {
        self.solver.positions_at(dt_utc)
    }

    /// Build the full chart for a UTC instant.
    ///
    /// The location is validated before any computation runs.
    pub fn compute(
        &self,
        dt_utc: DateTime<Utc>,
        location: Option<GeoLocation>,
    ) -> Result<ChartSnapshot, EngineError> {
        let location = location.ok_or(EngineError::MissingLocation)?;
        location.validate()?;

        let jd = self.solver.julian_day(dt_utc)?;
        log::debug!("NatalEngine: {} -> JD {:.6}", dt_utc, jd);

        let positions = self.solver.positions_for_julian_day(jd);
        let frame = self.houses.compute(jd, &location)?;
        let aspects = self.aspects.compute_aspects(&positions);

        let snapshot = self
            .aggregator
            .build(dt_utc, location, jd, positions, &frame, aspects);
        log::debug!(
            "NatalEngine: chart built with {} bodies, {} aspects",
            snapshot.planet_positions.len(),
            snapshot.aspects.len()
        );
        Ok(snapshot)
    }
}

impl Default for NatalEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
