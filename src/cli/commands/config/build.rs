use std::{fs, path::Path, sync::Arc};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    codec,
    model::ConfigDocument,
    settings::Settings,
};

use super::required_arg;

/// Builds a config header from a TOML document.
///
/// The output path falls back to `output.default_output` from the settings,
/// and to stdout when neither is set.
///
/// # Example Usage
///
/// ```bash
/// proffie-config config build saber.toml ProffieConfig.h
/// ```
pub struct BuildCommand {
    settings: Arc<Settings>,
}

impl BuildCommand {
    /// Creates a new BuildCommand.
    ///
    /// # Arguments
    ///
    /// * `settings` - Shared tool settings, used for output options
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl Command for BuildCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let input = required_arg(args, "toml", "build")?;
        let content = fs::read_to_string(input)?;
        let document: ConfigDocument =
            toml::from_str(&content).map_err(|e| CliError::TomlError(e.to_string()))?;

        let options = self.settings.output.encode_options();
        let output = args
            .get(1)
            .map(|output| Path::new(output).to_path_buf())
            .or_else(|| self.settings.output.default_output.clone());

        match output {
            Some(output) => {
                codec::save(&output, &document, &options)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                Ok(format!("Wrote config to '{}'", output.display()))
            }
            None => codec::encode_with(&document, &options)
                .map_err(|e| CliError::ConfigError(e.to_string())),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "build".to_string(),
            description: "Write a config header from a TOML document".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg {
                    name: "toml".to_string(),
                    description: "TOML document, as produced by 'config dump'".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "out".to_string(),
                    description: "Where to write the header (settings or stdout if omitted)"
                        .to_string(),
                    required: false,
                    value_type: ArgType::Path,
                },
            ],
            examples: vec!["proffie-config config build saber.toml ProffieConfig.h".to_string()],
        }
    }
}
