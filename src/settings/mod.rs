//! Settings for the proffie-config tool itself.
//!
//! Read from `settings.toml` in the XDG config directory. Every field has a
//! default, so a missing or empty file is valid.

mod general;
mod loading;
mod output;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralSettings, LogLevel};
pub use output::OutputSettings;
pub use paths::SettingsPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete settings file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct Settings {
    /// General tool settings.
    #[serde(default)]
    pub general: GeneralSettings,

    /// Header output settings.
    #[serde(default)]
    pub output: OutputSettings,
}
