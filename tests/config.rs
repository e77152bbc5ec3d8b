//! Configuration system tests
//!
//! Tests for config paths and loading/saving placement defaults.

use flyout::config::FlyoutConfig;
use flyout::config_paths;
use flyout::{Direction, Size};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_flyout() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("flyout"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
    assert!(logs.ends_with("logs"));
}

// ========================================================================
// Flyout Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = FlyoutConfig::default();
    assert_eq!(config.direction, Direction::Down);
    assert_eq!(config.viewport, Size::new(1280.0, 720.0));
}

#[test]
fn test_empty_yaml_is_default() {
    let config = FlyoutConfig::parse("{}").unwrap();
    assert_eq!(config, FlyoutConfig::default());
}

#[test]
fn test_full_yaml() {
    let yaml = r#"
direction: left-up
viewport:
  width: 1920
  height: 1080
"#;
    let config = FlyoutConfig::parse(yaml).unwrap();
    assert_eq!(config.direction, Direction::LeftUp);
    assert_eq!(config.viewport, Size::new(1920.0, 1080.0));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = FlyoutConfig {
        direction: Direction::RightUp,
        viewport: Size::new(1024.0, 768.0),
    };
    config.save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("right-up"));
    assert_eq!(FlyoutConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = FlyoutConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, FlyoutConfig::default());
}

#[test]
fn test_invalid_yaml_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "direction: [unterminated\n").unwrap();

    assert_eq!(FlyoutConfig::load_from(&path), FlyoutConfig::default());
}

#[test]
fn test_negative_viewport_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "viewport:\n  width: 800\n  height: -1\n").unwrap();

    assert_eq!(FlyoutConfig::load_from(&path), FlyoutConfig::default());
}
