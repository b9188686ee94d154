use crate::angle::angular_separation;
use crate::aspects::types::{Aspect, AspectKind, AspectMatch, OrbTable};
use crate::ephemeris::types::BodyPosition;

/// Detects aspects between body longitudes.
///
/// Every aspect whose orb window contains the separation is reported; when
/// windows overlap a pair can carry more than one aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectCalculator {
    orbs: OrbTable,
    exact_orb: f64,
}

impl AspectCalculator {
    pub fn new(orbs: OrbTable, exact_orb: f64) -> Self {
        Self { orbs, exact_orb }
    }

    /// Aspects formed by two longitudes, in table order
    pub fn calculate_aspects(&self, lon1: f64, lon2: f64) -> Vec<AspectMatch> {
        let separation = angular_separation(lon1, lon2);
        AspectKind::ALL
            .iter()
            .filter_map(|&kind| {
                let orb = (separation - kind.angle()).abs();
                (orb <= self.orbs.orb_for(kind)).then_some(AspectMatch {
                    kind,
                    orb,
                    exact: orb < self.exact_orb,
                })
            })
            .collect()
    }

    /// Aspects over every unordered pair of `positions`, in input order
    pub fn compute_aspects(&self, positions: &[BodyPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for (i, p1) in positions.iter().enumerate() {
            for p2 in &positions[i + 1..] {
                for m in self.calculate_aspects(p1.longitude, p2.longitude) {
                    aspects.push(Aspect {
                        planet1: p1.name.clone(),
                        planet2: p2.name.clone(),
                        aspect: m.kind,
                        angle: m.kind.angle(),
                        orb: m.orb,
                        exact: m.exact,
                    });
                }
            }
        }
        log::debug!("AspectCalculator: {} aspects over {} bodies", aspects.len(), positions.len());
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new(OrbTable::default(), 1.0)
    }
}
