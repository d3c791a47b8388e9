//! Command-line interface for config header management.
//!
//! Provides a hierarchical command system for checking, inspecting and
//! converting ProffieOS config headers. Commands are organized by category
//! and generate help text from their metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::config::{
    BuildCommand, CheckCommand, DumpCommand, NormalizeCommand, SummaryCommand,
};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
