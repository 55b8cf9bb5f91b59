use super::*;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();

    assert_eq!(config.policy.margin, 5);
    assert_eq!(config.policy.edge_inset, 10);
    assert_eq!(config.policy.shrink_width, 40);
    assert_eq!(config.policy.shrink_height, 60);
    assert_eq!(config.policy.min_width, 100);
    assert_eq!(config.policy.min_height, 80);
    assert_eq!(config.monitors.bounds, MonitorBounds::Monitor);
    assert_eq!(config.monitors.fallback_width, 1920);
    assert_eq!(config.monitors.fallback_height, 1080);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[policy]\nmargin = 12\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.policy.margin, 12);
    assert_eq!(config.policy.edge_inset, 10);
    assert_eq!(config.monitors, MonitorConfig::default());
    assert!(!config.logging.enabled);
}

#[test]
fn work_area_bounds_parse_from_kebab_case() {
    // Arrange
    let toml_str = "[monitors]\nbounds = \"work-area\"\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.monitors.bounds, MonitorBounds::WorkArea);
}

#[test]
fn unknown_bounds_value_is_rejected() {
    let toml_str = "[monitors]\nbounds = \"everything\"\n";

    assert!(loader::parse(toml_str).is_err());
}

#[test]
fn validate_clamps_extreme_values() {
    // Arrange
    let mut config = Config {
        policy: PolicyConfig {
            margin: -5,
            edge_inset: 5000,
            min_width: 0,
            ..Default::default()
        },
        monitors: MonitorConfig {
            fallback_width: 10,
            fallback_height: 100_000,
            ..Default::default()
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.policy.margin, 0);
    assert_eq!(config.policy.edge_inset, 200);
    assert_eq!(config.policy.min_width, 1);
    assert_eq!(config.monitors.fallback_width, 640);
    assert_eq!(config.monitors.fallback_height, 16384);
}

#[test]
fn parse_validates_after_reading() {
    let config = loader::parse("[policy]\nshrink_width = -1\n").unwrap();

    assert_eq!(config.policy.shrink_width, 0);
}
