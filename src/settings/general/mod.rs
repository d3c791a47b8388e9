mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General settings for the proffie-config tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct GeneralSettings {
    /// Logging level for the tool.
    #[serde(default)]
    pub log_level: LogLevel,
}
