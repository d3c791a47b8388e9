use crate::cli::{
    CliError, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::{load_header, required_arg};

/// Prints a config header as a TOML document that `config build` accepts.
pub struct DumpCommand;

impl DumpCommand {
    /// Creates a new DumpCommand.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DumpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for DumpCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = required_arg(args, "file", "dump")?;
        let document = load_header(path)?;

        toml::to_string_pretty(&document).map_err(|e| CliError::TomlError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "dump".to_string(),
            description: "Print a config header as TOML".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "Config header to read".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["proffie-config config dump ProffieConfig.h > saber.toml".to_string()],
        }
    }
}
