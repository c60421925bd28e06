use sweeper_world::{LoadError, Pressure, SweeperConfig};

#[test]
fn defaults_reproduce_the_reference_constants() {
    let config = SweeperConfig::default();
    assert_eq!(config.max_safe_height, 3);
    assert_eq!(config.suction_capacity.low, 1.0);
    assert_eq!(config.suction_capacity.high, 5.0);
    assert_eq!(config.tick_budget, 200);
    assert_eq!(config.time_power, 0.0);
    assert_eq!(config.other_power, 0.0);
}

#[test]
fn load_fills_missing_fields_from_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sweeper.yaml");
    std::fs::write(
        &path,
        "move_power: 3.5\nsuction_capacity:\n  high: 9.0\n",
    )
    .expect("write config");

    let config = SweeperConfig::load(&path).expect("load should succeed");
    assert_eq!(config.move_power, 3.5);
    assert_eq!(config.suction_capacity.high, 9.0);
    // Untouched fields keep their defaults.
    assert_eq!(config.suction_capacity.low, 1.0);
    assert_eq!(config.rotation_power, 1.0);
    assert_eq!(config.max_safe_height, 3);
}

#[test]
fn load_reports_missing_file_with_path() {
    let err = SweeperConfig::load(std::path::Path::new("/nonexistent/sweeper.yaml"))
        .expect_err("load should fail");
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/sweeper.yaml"));
}

#[test]
fn load_rejects_malformed_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sweeper.yaml");
    std::fs::write(&path, "move_power: [not a number\n").expect("write config");

    let err = SweeperConfig::load(&path).expect_err("load should fail");
    assert!(matches!(err, LoadError::Config { .. }));
}

#[test]
fn pressure_levels_map_to_their_rates_and_capacities() {
    let config = SweeperConfig::default();
    assert_eq!(config.vacuum_power(Pressure::Low), config.low_vacuum_power);
    assert_eq!(config.vacuum_power(Pressure::High), config.high_vacuum_power);
    assert_eq!(config.suction_capacity.for_pressure(Pressure::Low), 1.0);
    assert_eq!(config.suction_capacity.for_pressure(Pressure::High), 5.0);
}
