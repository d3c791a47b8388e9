use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    codec,
};

use super::{load_header, required_arg};

/// Decodes a config header and runs the structural checks on it.
///
/// # Example Usage
///
/// ```bash
/// proffie-config config check ProffieConfig.h
/// ```
pub struct CheckCommand;

impl CheckCommand {
    /// Creates a new CheckCommand.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CheckCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = required_arg(args, "file", "check")?;
        let document = load_header(path)?;

        codec::check(&document).map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(format!(
            "{path}: OK ({} arrays, {} blades)",
            document.blade_arrays.len(),
            document.num_blades()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "check".to_string(),
            description: "Decode a config header and validate it".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "Config header to check".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["proffie-config config check ProffieConfig.h".to_string()],
        }
    }
}
