use urania::EngineSettings;

#[test]
fn test_shipped_config_loads() {
    let cfg = urania_config::load_config().unwrap();
    assert_eq!(cfg.engine, EngineSettings::default());

    let cities = cfg.cities_path.expect("cities_path set in configs/urania.toml");
    let catalog = urania_config::load_city_catalog(&cities).unwrap();
    let london = catalog.lookup("London, United Kingdom").unwrap();
    assert_eq!(london.lat, 51.5074);
}
