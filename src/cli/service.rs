use std::sync::Arc;

use crate::settings::Settings;

use super::{CliError, CommandRegistry};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// Initializes the command registry and automatically registers all built-in
    /// commands across all categories. The settings are shared across commands.
    ///
    /// # Arguments
    /// * `settings` - Tool settings loaded at startup
    pub fn new(settings: Settings) -> Self {
        let settings = Arc::new(settings);
        let mut registry = CommandRegistry::new(settings);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// Looks up the command in the specified category and executes it with the
    /// given arguments. Returns the command output as a string on success.
    ///
    /// # Arguments
    /// * `category` - Command category to search in
    /// * `command_name` - Name of the command to execute
    /// * `args` - Command-line arguments to pass to the command
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Returns any error the command raises while running.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match (category, command_name) {
            ("help" | "--help" | "-h", "") => self.registry.help(None),
            ("help" | "--help" | "-h", category) => self.registry.help(Some(category)),
            (category, "" | "help" | "--help" | "-h") => self.registry.help(Some(category)),
            _ => self.registry.execute(category, command_name, args),
        }
    }

    /// Lists all available commands organized by category.
    ///
    /// Returns a vector of tuples where each tuple contains a category name
    /// and a vector of command names within that category. Useful for generating
    /// help text or command discovery interfaces.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }
}
