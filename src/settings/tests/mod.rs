//! Unit tests for settings module
//!
//! Tests settings types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use crate::settings::{LogLevel, Settings};

#[test]
fn settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.general.log_level, LogLevel::Warn);
    assert!(settings.output.write_header);
    assert!(settings.output.default_output.is_none());
}

#[test]
fn settings_serialize_toml() {
    let toml_str = toml::to_string(&Settings::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[output]"));
    assert!(toml_str.contains("log_level = \"warn\""));
}

#[test]
fn settings_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [output]
        write_header = false
        default_output = "out/config.h"
    "#;

    let settings: Settings = toml::from_str(toml_str).unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Debug);
    assert!(!settings.output.write_header);
    assert_eq!(
        settings.output.default_output,
        Some(PathBuf::from("out/config.h"))
    );
    assert!(!settings.output.encode_options().write_header);
}

#[test]
fn settings_partial_sections() {
    let settings: Settings = toml::from_str("[output]\n").unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_empty_toml() {
    let settings: Settings = toml::from_str("").unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_rejects_unknown_level() {
    let result: Result<Settings, _> = toml::from_str("[general]\nlog_level = \"loud\"\n");

    assert!(result.is_err());
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Info.to_string(), "info");
    assert_eq!(LogLevel::Debug.to_string(), "debug");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
