use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::EncodeOptions;

/// Settings applied when a config header is written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Emit the generated-by comment at the top of written headers.
    pub write_header: bool,

    /// Output path used by `config build` when none is given.
    pub default_output: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            write_header: true,
            default_output: None,
        }
    }
}

impl OutputSettings {
    /// Encoder options for these settings.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            write_header: self.write_header,
        }
    }
}
