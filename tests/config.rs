//! Configuration system tests
//!
//! Tests for config paths and docking config loading/saving.

use dockhand::config::DockConfig;
use dockhand::config_paths;
use dockhand::geometry::Size;
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("dockhand"));
    }
}

#[test]
fn test_config_file_is_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert!(file.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_inside_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// DockConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = DockConfig::default();
    assert_eq!(config.app_name, "Dockhand");
    assert_eq!(config.drag_tick_ms, 100);
    assert_eq!(config.settle_ticks, 4);
    assert_eq!(config.drag_threshold_factor, 5.0);
    assert_eq!(config.main_window_size, Size::new(1024.0, 768.0));
    assert_eq!(config.new_window_size, Size::new(1000.0, 700.0));
    assert_eq!(config.no_title_bars, cfg!(windows));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = DockConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, DockConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = DockConfig {
        app_name: "Hexplorer".to_string(),
        no_title_bars: true,
        settle_ticks: 7,
        ..DockConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(DockConfig::load_from(&path), config);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "drag_tick_ms: 50\nno_title_bars: true\n").unwrap();

    let config = DockConfig::load_from(&path);
    assert_eq!(config.drag_tick_ms, 50);
    assert!(config.no_title_bars);
    assert_eq!(config.settle_ticks, 4);
    assert_eq!(config.app_name, "Dockhand");
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "drag_tick_ms: [not a number\n").unwrap();

    assert_eq!(DockConfig::load_from(&path), DockConfig::default());
}

#[test]
fn test_zero_tick_is_clamped() {
    let config = DockConfig {
        drag_tick_ms: 0,
        ..DockConfig::default()
    };
    assert_eq!(config.drag_tick().as_millis(), 1);
}
