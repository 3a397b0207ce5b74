//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use neonfield::config::AppConfig;
use neonfield_core::{NeonColor, SceneError};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("neonfield-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("NEON_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("NEON_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_nested_env_override() {
    std::env::set_var("NEON_FIELD__COUNT", "250");
    std::env::set_var("NEON_EFFECTS__MAX_CONCURRENT", "8");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("NEON_FIELD__COUNT");
    std::env::remove_var("NEON_EFFECTS__MAX_CONCURRENT");

    assert_eq!(config.field.count, 250);
    let settings = config.to_scene_settings().unwrap();
    assert_eq!(settings.field.unwrap().count, 250);
    assert_eq!(settings.max_concurrent_effects, Some(8));
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.window.title, builtin.window.title);
    assert_eq!(config.camera.fov, 75.0);
    assert_eq!(
        config.to_scene_settings().unwrap(),
        builtin.to_scene_settings().unwrap()
    );
    assert_eq!(config.effects.click_color, NeonColor::Cyan);
    assert_eq!(config.effects.hover_color, NeonColor::Green);
    assert!(!config.interaction.hover_regions.is_empty());
}

#[test]
#[serial]
fn test_user_config_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(
        dir.join("default.toml"),
        "[lines]\ncount = 10\ncolors = [\"cyan\"]\n\n[features]\nparticles = true\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[lines]\ncount = 4\n\n[features]\nparticles = false\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.lines.count, 4);
    assert_eq!(config.lines.colors, vec![NeonColor::Cyan]);
    assert!(config.to_scene_settings().unwrap().field.is_none());
}

#[test]
#[serial]
fn test_empty_palette_is_rejected_on_conversion() {
    let dir = scratch_dir("palette");
    fs::write(dir.join("default.toml"), "[field]\ncolors = []\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(
        config.to_scene_settings().unwrap_err(),
        SceneError::EmptyPalette { what: "particle colour" }
    );
}

#[test]
#[serial]
fn test_unknown_colour_is_load_error() {
    let dir = scratch_dir("colour");
    fs::write(dir.join("default.toml"), "[lines]\ncolors = [\"orange\"]\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.field.count, 1000);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_env_count_error_caught_before_host_start() {
    std::env::set_var("NEON_BODIES__COUNT", "0");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("NEON_BODIES__COUNT");

    assert_eq!(
        config.to_host_settings().unwrap_err(),
        SceneError::InvalidCount { what: "floating body count" }
    );
}

#[test]
#[serial]
fn test_env_camera_error_caught_before_host_start() {
    std::env::set_var("NEON_CAMERA__FAR", "0.05");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("NEON_CAMERA__FAR");

    assert!(matches!(
        config.to_host_settings(),
        Err(SceneError::InvalidRange { what: "camera clip plane", .. })
    ));
}
