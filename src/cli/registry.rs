use std::{
    collections::HashMap,
    fmt::{self, Write},
    sync::Arc,
};

use crate::settings::Settings;

use super::{
    CliError, Command,
    commands::config,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// The CommandRegistry provides a hierarchical structure for managing CLI commands,
/// allowing commands to be grouped by logical categories.
///
/// # Example Structure
///
/// ```text
/// registry
/// └── config
///     ├── build
///     ├── check
///     ├── dump
///     ├── normalize
///     └── summary
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    settings: Arc<Settings>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// The registry starts with no commands registered. Commands must be added
    /// using the `register_command` method, typically during application initialization.
    pub fn new(settings: Arc<Settings>) -> Self {
        let categories = HashMap::new();
        Self {
            categories,
            settings,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// Commands are automatically organized by category, with the command's name
    /// (from its metadata) used as the key within that category. If a command
    /// with the same name already exists in the category, it will be replaced.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to register the command under (e.g., "config")
    /// * `command` - The command implementation to register
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// This method looks up the command in the registry's hierarchical structure
    /// and delegates execution to the command implementation. The command is
    /// responsible for its own argument validation and execution logic.
    ///
    /// # Arguments
    ///
    /// * `category` - The category containing the command
    /// * `command_name` - The name of the command to execute
    /// * `args` - Arguments to pass to the command
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if:
    /// - The specified category doesn't exist
    /// - The specified command doesn't exist within the category
    ///
    /// Other errors may be returned by the command's execute method.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Returns a vector of tuples where each tuple contains:
    /// - Category name
    /// - Vector of command names within that category
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Renders help for every category, or for one category when given.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if `category` is not registered.
    pub fn help(&self, category: Option<&str>) -> Result<String, CliError> {
        let mut out = String::new();
        writeln!(out, "{}", format_header("proffie-config"))?;
        writeln!(
            out,
            "{}\n",
            format_usage("Usage: proffie-config <category> <command> [args...]")
        )?;

        let mut categories: Vec<&String> = match category {
            Some(name) => {
                let (found, _) = self.categories.get_key_value(name).ok_or_else(|| {
                    CliError::CommandNotFound(format!("Failed to find category '{name}'"))
                })?;
                vec![found]
            }
            None => self.categories.keys().collect(),
        };
        categories.sort();

        for name in categories {
            writeln!(out, "{}", format_category(name))?;
            let Some(commands) = self.categories.get(name) else {
                continue;
            };
            let mut metadata: Vec<CommandMetadata> =
                commands.values().map(|command| command.metadata()).collect();
            metadata.sort_by(|a, b| a.name.cmp(&b.name));

            for command in metadata {
                Self::write_command_help(&mut out, &command)?;
            }
        }

        Ok(out.trim_end().to_string())
    }

    fn write_command_help(out: &mut String, metadata: &CommandMetadata) -> fmt::Result {
        let args: Vec<String> = metadata
            .args
            .iter()
            .map(|arg| {
                if arg.required {
                    format!("<{}>", arg.name)
                } else {
                    format!("[{}]", arg.name)
                }
            })
            .collect();

        writeln!(
            out,
            "  {} {}  {}",
            format_command(&metadata.name),
            args.join(" "),
            format_description(&metadata.description)
        )?;
        for arg in &metadata.args {
            writeln!(
                out,
                "      {} ({}) {}",
                format_subheader(&arg.name),
                arg.value_type.hint(),
                format_description(&arg.description)
            )?;
        }
        for example in &metadata.examples {
            writeln!(out, "      {}", format_usage(example))?;
        }
        Ok(())
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    ///
    /// This function serves as the central registration point for all CLI commands,
    /// delegating to individual modules to register their commands.
    pub fn register_all_commands(&mut self) {
        config::register_commands(self, self.settings.clone());
    }
}
