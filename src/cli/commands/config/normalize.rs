use std::{path::Path, sync::Arc};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    codec,
    settings::Settings,
};

use super::{load_header, required_arg};

/// Decodes a config header and writes it back in canonical form.
///
/// Without an output path the result is printed.
///
/// # Example Usage
///
/// ```bash
/// proffie-config config normalize old_config.h ProffieConfig.h
/// proffie-config config normalize old_config.h > ProffieConfig.h
/// ```
pub struct NormalizeCommand {
    settings: Arc<Settings>,
}

impl NormalizeCommand {
    /// Creates a new NormalizeCommand.
    ///
    /// # Arguments
    ///
    /// * `settings` - Shared tool settings, used for output options
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl Command for NormalizeCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let input = required_arg(args, "in", "normalize")?;
        let document = load_header(input)?;
        let options = self.settings.output.encode_options();

        match args.get(1) {
            Some(output) => {
                codec::save(Path::new(output), &document, &options)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                Ok(format!("Wrote normalized config to '{output}'"))
            }
            None => codec::encode_with(&document, &options)
                .map_err(|e| CliError::ConfigError(e.to_string())),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "normalize".to_string(),
            description: "Rewrite a config header in canonical form".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg {
                    name: "in".to_string(),
                    description: "Config header to read".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "out".to_string(),
                    description: "Where to write the result (stdout if omitted)".to_string(),
                    required: false,
                    value_type: ArgType::Path,
                },
            ],
            examples: vec![
                "proffie-config config normalize old_config.h ProffieConfig.h".to_string(),
                "proffie-config config normalize old_config.h".to_string(),
            ],
        }
    }
}
