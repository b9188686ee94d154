use chrono::{TimeZone, Utc};
use urania::angle::wrap_signed_degrees;
use urania::houses::{HouseSystem, HOUSE_COUNT};
use urania::{GeoLocation, NatalEngine};

const LOCATIONS: [(f64, f64); 6] = [
    (51.5074, -0.1278),
    (-33.8688, 151.2093),
    (64.1466, -21.9426),
    (0.0, 0.0),
    (-54.8019, -68.3030),
    (35.6762, 139.6503),
];

#[test]
fn test_equal_houses_step_thirty_degrees() {
    let system = HouseSystem::new();
    for (lat, lon) in LOCATIONS {
        for k in 0..50 {
            let jd = 2440000.5 + k as f64 * 173.37;
            let frame = system.compute(jd, &GeoLocation::new(lat, lon)).unwrap();
            let cusps = frame.cusps.as_slice();
            for i in 0..HOUSE_COUNT {
                let next = cusps[(i + 1) % HOUSE_COUNT];
                let step = wrap_signed_degrees(next - cusps[i]);
                assert!((step - 30.0).abs() < 1e-9, "step {} at lat {}", step, lat);
            }
        }
    }
}

#[test]
fn test_cusps_and_angles_normalized() {
    let engine = NatalEngine::default();
    let start = Utc.with_ymd_and_hms(1950, 1, 1, 3, 0, 0).unwrap();
    for step in 0..40 {
        let dt = start + chrono::Duration::hours(step * 977);
        for (lat, lon) in LOCATIONS {
            let chart = engine.compute(dt, Some(GeoLocation::new(lat, lon))).unwrap();
            for (_, cusp) in chart.houses.iter() {
                assert!((0.0..360.0).contains(&cusp));
            }
            let a = chart.angles;
            for angle in [a.ascendant, a.midheaven, a.descendant, a.imum_coeli, a.ramc] {
                assert!((0.0..360.0).contains(&angle));
            }
        }
    }
}

#[test]
fn test_ascendant_moves_with_time() {
    let system = HouseSystem::new();
    let loc = GeoLocation::new(40.0, -75.0);
    let a = system.compute(2451545.0, &loc).unwrap();
    let b = system.compute(2451545.0 + 2.0 / 24.0, &loc).unwrap();
    assert!(a.angles.ascendant != b.angles.ascendant);
}
