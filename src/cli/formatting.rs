//! Formatting utilities for CLI output.
//!
//! Styled help text and the human-readable document summary.

use std::fmt::{self, Write};

use crate::model::{BladeArray, BladeConfig, BladeType, ConfigDocument};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// One-line description of a blade, without colour.
///
/// # Examples
///
/// ```
/// use proffie_config::{cli::formatting::describe_blade, model::{BladeConfig, BladeType}};
///
/// let blade = BladeConfig::pixel(BladeType::PixelRgb, 144, "bladePin", "GRB");
/// assert_eq!(describe_blade(&blade), "WS281X (RGB), 144 px on bladePin, GRB, power pins: none");
/// ```
pub fn describe_blade(blade: &BladeConfig) -> String {
    let pins: Vec<String> = blade.power_pins.enabled().map(|pin| pin.to_string()).collect();
    let pins = if pins.is_empty() {
        "none".to_string()
    } else {
        pins.join(", ")
    };

    match blade.kind {
        kind if kind.is_pixel() => {
            let mut text = format!(
                "{}, {} px on {}, {}, power pins: {}",
                blade.kind, blade.num_pixels, blade.data_pin, blade.color_order, pins
            );
            if blade.is_sub_blade() {
                let ranges: Vec<String> = blade
                    .sub_blades
                    .iter()
                    .map(|range| format!("{}-{}", range.start, range.end))
                    .collect();
                text.push_str(&format!(", sub-blades: {}", ranges.join(" ")));
            }
            text
        }
        kind if kind.is_star() || kind == BladeType::SingleLed => {
            let leds: Vec<String> = blade
                .leds
                .iter()
                .flatten()
                .map(|led| format!("{}<{}>", led.color.template_name(), led.resistance))
                .collect();
            format!("{} [{}], power pins: {}", blade.kind, leds.join(", "), pins)
        }
        _ => blade.kind.to_string(),
    }
}

/// Multi-line summary of a document for `config summary`.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn format_summary(document: &ConfigDocument) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", format_header("Hardware"))?;
    writeln!(out, "  Board:    {}", document.board)?;
    writeln!(out, "  Prop:     {}", document.prop)?;
    writeln!(out, "  Buttons:  {}", document.buttons().count())?;
    writeln!(out, "  Blades:   {}", document.num_blades())?;
    if let Some(max_leds) = document.max_leds_per_strip {
        writeln!(out, "  Max LEDs: {max_leds}")?;
    }

    let mut features = Vec::new();
    if document.mass_storage {
        features.push("mass storage");
    }
    if document.web_usb {
        features.push("WebUSB");
    }
    if document.blade_id.detect_enabled {
        features.push("blade detect");
    }
    if document.blade_id.id_enabled {
        features.push("blade ID");
    }
    if !features.is_empty() {
        writeln!(out, "  Features: {}", features.join(", "))?;
    }
    if !document.defines.is_empty() {
        writeln!(out, "  Defines:  {}", document.defines.len())?;
    }

    for array in &document.blade_arrays {
        write_array_summary(&mut out, array)?;
    }
    Ok(out.trim_end().to_string())
}

fn write_array_summary(out: &mut String, array: &BladeArray) -> fmt::Result {
    writeln!(
        out,
        "\n{} {}",
        format_subheader(&array.name),
        format_description(&format!(
            "value {}, {} blades, {} presets",
            array.value,
            array.logical_blade_count(),
            array.presets.len()
        ))
    )?;
    for (index, blade) in array.blades.iter().enumerate() {
        writeln!(out, "  {}: {}", index + 1, describe_blade(blade))?;
    }
    for preset in &array.presets {
        writeln!(
            out,
            "  - {} {}",
            preset.name,
            format_description(&format!("({})", preset.directory))
        )?;
    }
    Ok(())
}
