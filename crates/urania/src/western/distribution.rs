use crate::ephemeris::types::BodyPosition;
use crate::western::signs::{Element, Modality, ZodiacSign};
use std::collections::BTreeMap;

/// Body names grouped by the element of their sign.
///
/// All four elements are present; bodies keep input order.
pub fn element_distribution(positions: &[BodyPosition]) -> BTreeMap<Element, Vec<String>> {
    let mut groups: BTreeMap<Element, Vec<String>> =
        Element::ALL.iter().map(|e| (*e, Vec::new())).collect();
    for pos in positions {
        let element = ZodiacSign::from_longitude(pos.longitude).element();
        groups.entry(element).or_default().push(pos.name.clone());
    }
    groups
}

/// Body names grouped by the modality of their sign
pub fn modality_distribution(positions: &[BodyPosition]) -> BTreeMap<Modality, Vec<String>> {
    let mut groups: BTreeMap<Modality, Vec<String>> =
        Modality::ALL.iter().map(|m| (*m, Vec::new())).collect();
    for pos in positions {
        let modality = ZodiacSign::from_longitude(pos.longitude).modality();
        groups.entry(modality).or_default().push(pos.name.clone());
    }
    groups
}

/// Sign name to degree range, in zodiac order
pub fn sign_range_table() -> BTreeMap<ZodiacSign, String> {
    ZodiacSign::ALL.iter().map(|s| (*s, s.range())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str, longitude: f64) -> BodyPosition {
        BodyPosition {
            name: name.to_string(),
            longitude,
            latitude: 0.0,
            distance: 1.0,
            speed: 1.0,
            retrograde: false,
        }
    }

    #[test]
    fn test_every_class_present() {
        let positions = vec![at("Sun", 5.0), at("Moon", 125.0)];
        let elements = element_distribution(&positions);
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[&Element::Fire], vec!["Sun", "Moon"]);
        assert!(elements[&Element::Water].is_empty());

        let modalities = modality_distribution(&positions);
        assert_eq!(modalities.len(), 3);
        assert_eq!(modalities[&Modality::Cardinal], vec!["Sun"]);
        assert_eq!(modalities[&Modality::Fixed], vec!["Moon"]);
    }

    #[test]
    fn test_sign_range_table_complete() {
        let table = sign_range_table();
        assert_eq!(table.len(), 12);
        assert_eq!(table[&ZodiacSign::Virgo], "150-180");
    }
}
