//! proffie-config - Reads, checks and writes ProffieOS config headers.
//!
//! Settings are read before tracing starts, so a broken settings file is
//! reported on stderr and the tool carries on with defaults.

use std::{env, error::Error, process};

use proffie_config::{
    cli::{CliService, formatting::format_error},
    settings::Settings,
    tracing_config,
};
use tracing::{debug, instrument};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: {e}", format_error("Ignoring settings"));
            Settings::default()
        }
    };

    tracing_config::init(settings.general.log_level)?;

    run_cli_command(settings, args.get(1..).unwrap_or(&[]));
    Ok(())
}

/// Executes CLI commands through the CliService.
///
/// # Arguments
/// * `settings` - Settings loaded at startup
/// * `args` - Command line arguments (excluding program name)
#[instrument(skip(settings))]
fn run_cli_command(settings: Settings, args: &[String]) {
    let cli_service = CliService::new(settings);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);
    debug!(category, command, "Dispatching command");

    match cli_service.execute_command(category, command, command_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
