use roster_core::{ConfigError, RosterConfig, RosterService, SetupError};

#[test]
fn service_uses_cities_from_json_config() {
    let raw = serde_json::json!({
        "cities": ["Oslo", "Lima"],
        "default_photo": "img/p.png"
    })
    .to_string();
    let config = RosterConfig::from_json_str(&raw).unwrap();
    let mut service = RosterService::empty(config).unwrap();

    assert_eq!(service.cities(), vec!["All", "Oslo", "Lima"]);
    service.set_city_filter("Lima").unwrap();
    assert!(service.set_city_filter("USA").is_err());
    assert_eq!(service.begin_add().fields.photo, "img/p.png");
}

#[test]
fn service_rejects_config_with_reserved_city() {
    let config = RosterConfig {
        cities: vec!["USA".to_string(), "All".to_string()],
        ..RosterConfig::default()
    };
    let result = RosterService::seeded(config);
    assert!(matches!(
        result,
        Err(SetupError::Config(ConfigError::ReservedCity))
    ));
}
