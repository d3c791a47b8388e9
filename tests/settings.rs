//! Integration tests for loading settings from disk.

#![allow(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use proffie_config::{
    ProffieError,
    settings::{LogLevel, Settings, SettingsPaths},
};
use tempfile::TempDir;

fn write_settings(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join("settings.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_every_section() {
    let temp = TempDir::new().unwrap();
    let path = write_settings(
        &temp,
        r#"
[general]
log_level = "debug"

[output]
write_header = false
default_output = "ProffieOS/config/my_saber.h"
"#,
    );

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Debug);
    assert!(!settings.output.write_header);
    assert_eq!(
        settings.output.default_output.unwrap().to_str(),
        Some("ProffieOS/config/my_saber.h")
    );
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_settings(&temp, "[output]\nwrite_header = false\n");

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Warn);
    assert!(!settings.output.write_header);
}

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(&temp.path().join("settings.toml")).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_file_reports_toml_error() {
    let temp = TempDir::new().unwrap();
    let path = write_settings(&temp, "[general]\nlog_level = \"loud\"\n");

    let result = Settings::load_from(&path);

    assert!(matches!(result, Err(ProffieError::TomlParse { .. })));
}

#[test]
fn default_location_follows_xdg_config_home() {
    let temp = TempDir::new().unwrap();
    let settings_dir = temp.path().join("proffie-config");
    fs::create_dir_all(&settings_dir).unwrap();
    fs::write(
        settings_dir.join("settings.toml"),
        "[general]\nlog_level = \"trace\"\n",
    )
    .unwrap();

    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp.path());
    }

    assert_eq!(SettingsPaths::settings_dir().unwrap(), settings_dir);
    assert_eq!(Settings::load().unwrap().general.log_level, LogLevel::Trace);
}
