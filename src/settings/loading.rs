use std::{fs, io::ErrorKind, path::Path};

use tracing::debug;

use super::{Settings, SettingsPaths};
use crate::{Result, core::ProffieError};

impl Settings {
    /// Loads settings from the default location, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the settings directory cannot be determined, or
    /// the file exists but cannot be read or parsed
    pub fn load() -> Result<Settings> {
        let path = SettingsPaths::settings_file()
            .map_err(|e| ProffieError::io(e, Path::new("settings.toml")))?;
        Self::load_from(&path)
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Settings> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(ProffieError::io(e, path)),
        };

        toml::from_str(&content).map_err(|e| ProffieError::toml_parse(e, Some(path)))
    }
}
