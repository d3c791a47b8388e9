use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::BladeConfig;

/// Detection value that selects a blade array at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArrayValue {
    /// Blade ID resistance (or detect) value.
    Id(u32),

    /// Selected when no blade is inserted.
    NoBlade,
}

impl Default for ArrayValue {
    fn default() -> Self {
        ArrayValue::Id(0)
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayValue::Id(value) => write!(f, "{value}"),
            ArrayValue::NoBlade => write!(f, "NO_BLADE"),
        }
    }
}

/// One lighting preset: font, track, one style per logical blade and a name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PresetConfig {
    /// Sound font directory (may hold several `;`-separated paths).
    pub directory: String,

    /// Music track path.
    pub track: String,

    /// Style expressions, one per logical blade. A style may begin with a
    /// block comment that is kept verbatim.
    pub styles: Vec<String>,

    /// Display name.
    pub name: String,
}

impl PresetConfig {
    /// Creates a preset from its parts.
    pub fn new(directory: &str, track: &str, styles: Vec<String>, name: &str) -> Self {
        Self {
            directory: directory.to_string(),
            track: track.to_string(),
            styles,
            name: name.to_string(),
        }
    }
}

/// A named blade array: the blades installed for one detection value and the
/// presets that drive them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BladeArray {
    /// Identifier used for the preset array and `CONFIGARRAY`.
    pub name: String,

    /// Detection value.
    pub value: ArrayValue,

    /// Physical blade declarations.
    pub blades: Vec<BladeConfig>,

    /// Presets for this array.
    pub presets: Vec<PresetConfig>,
}

impl BladeArray {
    /// Creates an empty array with the given name and value.
    pub fn new(name: &str, value: ArrayValue) -> Self {
        Self {
            name: name.to_string(),
            value,
            ..Self::default()
        }
    }

    /// Number of independently styled blade slots, counting every sub-blade
    /// range as one.
    pub fn logical_blade_count(&self) -> usize {
        self.blades.iter().map(BladeConfig::logical_count).sum()
    }
}
