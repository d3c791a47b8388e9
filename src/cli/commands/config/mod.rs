//! Config header commands.
mod build;
mod check;
mod dump;
mod normalize;
mod summary;

use std::{path::Path, sync::Arc};

pub use build::BuildCommand;
pub use check::CheckCommand;
pub use dump::DumpCommand;
pub use normalize::NormalizeCommand;
pub use summary::SummaryCommand;

use crate::{
    cli::{CliError, CommandRegistry},
    codec,
    model::ConfigDocument,
    settings::Settings,
};

/// Registers all config header commands with the command registry.
///
/// Registers commands in the "config" category for checking, inspecting,
/// rewriting and converting ProffieOS config headers.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `settings` - Shared tool settings for the commands
pub fn register_commands(registry: &mut CommandRegistry, settings: Arc<Settings>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(CheckCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(SummaryCommand::new()));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(NormalizeCommand::new(settings.clone())),
    );
    registry.register_command(CATEGORY_NAME, Box::new(DumpCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(BuildCommand::new(settings)));
}

fn required_arg<'a>(args: &'a [String], name: &str, command: &str) -> Result<&'a str, CliError> {
    args.first().map(String::as_str).ok_or_else(|| {
        CliError::InvalidArguments(format!("Expected <{name}> argument for '{command}' command"))
    })
}

fn load_header(path: &str) -> Result<ConfigDocument, CliError> {
    codec::load(Path::new(path)).map_err(|e| CliError::ConfigError(e.to_string()))
}
