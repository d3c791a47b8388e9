use crate::cli::{
    Command, CommandResult,
    formatting::format_summary,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::{load_header, required_arg};

/// Prints board, prop, buttons, blade arrays and presets of a config header.
pub struct SummaryCommand;

impl SummaryCommand {
    /// Creates a new SummaryCommand.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SummaryCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = required_arg(args, "file", "summary")?;
        let document = load_header(path)?;

        Ok(format_summary(&document)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "summary".to_string(),
            description: "Show the hardware and presets of a config header".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "Config header to read".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["proffie-config config summary ProffieConfig.h".to_string()],
        }
    }
}
