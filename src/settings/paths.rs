use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Locates the tool's settings following the XDG Base Directory layout.
pub struct SettingsPaths;

impl SettingsPaths {
    /// Returns the settings directory.
    ///
    /// Checks `XDG_CONFIG_HOME` first, then falls back to `$HOME/.config`,
    /// and appends `proffie-config`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn settings_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("proffie-config"))
    }

    /// Returns the path of `settings.toml`.
    ///
    /// # Errors
    /// Returns an error if the settings directory cannot be determined
    pub fn settings_file() -> Result<PathBuf, Error> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }
}
