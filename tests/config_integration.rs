//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use orient3d::config::AppConfig;
use orient3d_math::{CompositionOrder, MatrixLayout};
use serial_test::serial;

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.convention, builtin.convention);
    assert_eq!(config.axes.yaw, builtin.axes.yaw);
    assert_eq!(config.axes.pitch, builtin.axes.pitch);
    assert_eq!(config.axes.roll, builtin.axes.roll);
    assert_eq!(config.samples.angles, builtin.samples.angles);
    assert_eq!(config.output.layout, MatrixLayout::RowMajor);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ORIENT_CONVENTION__NEGATE_ROLL", "true");
    std::env::set_var("ORIENT_OUTPUT__PRECISION", "7");
    let config = AppConfig::load();
    std::env::remove_var("ORIENT_CONVENTION__NEGATE_ROLL");
    std::env::remove_var("ORIENT_OUTPUT__PRECISION");

    let config = config.unwrap();
    assert!(config.convention.negate_roll);
    assert_eq!(config.output.precision, 7);
    // Untouched keys keep their file values
    assert_eq!(config.convention.order, CompositionOrder::RollPitchYaw);
}

#[test]
#[serial]
fn test_load_from_user_override() {
    let dir = std::env::temp_dir().join(format!("orient3d_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[convention]\norder = \"roll_pitch_yaw\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("user.toml"),
        "[convention]\norder = \"yaw_pitch_roll\"\n\n[axes]\nroll = [0.0, 0.0, 1.0, 0.0]\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.convention.order, CompositionOrder::YawPitchRoll);
    // Wrong-dimension axes load fine; they are rejected when the report is built
    assert_eq!(config.axes.roll.len(), 4);
    assert_eq!(config.axes.yaw, vec![0.0, 1.0, 0.0]);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.samples.angles.len(), 4);
    assert_eq!(config.debug.log_level, "info");
}
