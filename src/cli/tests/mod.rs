//! Unit tests for CLI module
//!
//! Tests command registry, help output and formatting.
//! No filesystem dependencies - commands are only run far enough to
//! exercise argument validation.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::{
    cli::{
        CliError, CliService, CommandRegistry,
        formatting::{describe_blade, format_error, format_summary},
    },
    model::{
        ArrayValue, BladeArray, BladeConfig, BladeType, ConfigDocument, LedColor, PowerPins,
        PresetConfig, StarLed, SubBladeRange,
    },
    settings::Settings,
};

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn command_registry_starts_empty() {
    let registry = CommandRegistry::new(Arc::new(Settings::default()));

    assert!(registry.list_commands().is_empty());
}

#[test]
fn registers_config_commands() {
    let service = CliService::new(Settings::default());

    assert_eq!(
        service.list_all(),
        vec![(
            "config".to_string(),
            vec![
                "build".to_string(),
                "check".to_string(),
                "dump".to_string(),
                "normalize".to_string(),
                "summary".to_string(),
            ]
        )]
    );
}

#[test]
fn unknown_category_and_command() {
    let service = CliService::new(Settings::default());

    let result = service.execute_command("sound", "play", &[]);
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));

    let result = service.execute_command("config", "flash", &[]);
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[test]
fn argument_count_is_validated() {
    let service = CliService::new(Settings::default());

    let result = service.execute_command("config", "check", &[]);
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));

    let args = vec!["a.h".to_string(), "b.h".to_string()];
    let result = service.execute_command("config", "summary", &args);
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[test]
fn missing_file_is_a_config_error() {
    let service = CliService::new(Settings::default());
    let args = vec!["/nonexistent/ProffieConfig.h".to_string()];

    let result = service.execute_command("config", "check", &args);

    assert!(matches!(result, Err(CliError::ConfigError(_))));
}

#[test]
fn help_lists_every_command() {
    let service = CliService::new(Settings::default());

    let help = strip_ansi(&service.execute_command("help", "", &[]).unwrap());

    assert!(help.contains("Usage: proffie-config <category> <command> [args...]"));
    for command in ["build", "check", "dump", "normalize", "summary"] {
        assert!(help.contains(command), "missing {command}");
    }
    assert!(help.contains("normalize <in> [out]"));
}

#[test]
fn category_without_command_shows_its_help() {
    let service = CliService::new(Settings::default());

    let help = strip_ansi(&service.execute_command("config", "", &[]).unwrap());
    assert!(help.contains("check <file>"));

    let result = service.execute_command("help", "sound", &[]);
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[test]
fn describes_each_blade_kind() {
    let mut pixel = BladeConfig::pixel(BladeType::PixelRgbw, 132, "bladePin", "GRBW");
    pixel.power_pins = PowerPins::from_numbers(&[2, 3]);
    pixel.sub_blades = vec![
        SubBladeRange { start: 0, end: 65 },
        SubBladeRange { start: 66, end: 131 },
    ];
    assert_eq!(
        describe_blade(&pixel),
        "WS281X (RGBW), 132 px on bladePin, GRBW, power pins: 2, 3, sub-blades: 0-65 66-131"
    );

    let led = Some(StarLed::new(LedColor::Red, 1000));
    let star = BladeConfig::star(BladeType::TriStar, [led, None, led, None]);
    assert_eq!(
        describe_blade(&star),
        "Tri-Star Star [Red<1000>, Red<1000>], power pins: none"
    );

    assert_eq!(describe_blade(&BladeConfig::default()), "Unset");
}

#[test]
fn summary_lists_arrays_and_presets() {
    let mut array = BladeArray::new("no_blade", ArrayValue::NoBlade);
    array.blades = vec![BladeConfig::pixel(BladeType::PixelRgb, 1, "bladePin", "GRB")];
    array.presets = vec![PresetConfig::new("Idle", "", vec![], "idle")];
    let document = ConfigDocument {
        mass_storage: true,
        blade_arrays: vec![array],
        ..ConfigDocument::default()
    };

    let summary = strip_ansi(&format_summary(&document).unwrap());

    assert!(summary.contains("Board:    ProffieBoard V3"));
    assert!(summary.contains("Buttons:  2"));
    assert!(summary.contains("Features: mass storage"));
    assert!(summary.contains("no_blade value NO_BLADE, 1 blades, 1 presets"));
    assert!(summary.contains("- idle (Idle)"));
}

#[test]
fn error_formatting_keeps_message() {
    assert!(format_error("Blade Array Name cannot be empty.").contains("Blade Array Name"));
}

#[test]
fn category_help_lists_argument_hints_and_examples() {
    let service = CliService::new(Settings::default());

    let help = strip_ansi(&service.execute_command("help", "config", &[]).unwrap());

    assert!(help.starts_with("proffie-config\n"));
    assert!(help.contains("config\n"));
    assert!(help.contains("proffie-config config normalize old_config.h ProffieConfig.h"));
}

#[test]
fn format_failures_surface_as_cli_errors() {
    let error = CliError::from(std::fmt::Error);

    assert!(matches!(error, CliError::FormatError(_)));
    assert!(error.to_string().starts_with("Format error"));
}
