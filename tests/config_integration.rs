//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hypercycle::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HCY_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    println!("Window title: {}", config.window.title);
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HCY_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_playback_section() {
    std::env::set_var("HCY_PLAYBACK__SPEED", "2.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.playback.speed, 2.0);
    std::env::remove_var("HCY_PLAYBACK__SPEED");
}

#[test]
#[serial]
fn test_default_file_loading() {
    // Remove env vars to test file-based config
    std::env::remove_var("HCY_WINDOW__TITLE");
    std::env::remove_var("HCY_PLAYBACK__SPEED");

    let cwd = std::env::current_dir().unwrap();
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.playback.start_dimension, 2);
    assert!(config.playback.autoplay);
}
