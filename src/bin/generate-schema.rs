//! Writes JSON Schema and markdown references for the settings file and
//! the document TOML format.
use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use proffie_config::schema::SchemaTarget;

#[derive(Parser)]
#[command(name = "generate-schema")]
#[command(about = "Generate JSON Schema and reference docs for proffie-config formats")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Settings,
    Document,
}

impl From<Target> for SchemaTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Settings => SchemaTarget::Settings,
            Target::Document => SchemaTarget::Document,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// JSON Schema for one format
    Json {
        target: Target,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Markdown property tables for one format
    Markdown {
        target: Target,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Both outputs for every format, written to a directory
    All {
        #[arg(short, long, default_value = "docs/schema")]
        output: PathBuf,
    },
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Json { target, output } => {
            emit(SchemaTarget::from(target).json()?, output)?;
        }
        Commands::Markdown { target, output } => {
            emit(SchemaTarget::from(target).markdown()?, output)?;
        }
        Commands::All { output } => {
            fs::create_dir_all(&output)?;
            for target in SchemaTarget::ALL {
                let json = output.join(format!("{}.schema.json", target.name()));
                fs::write(&json, target.json()?)?;
                let markdown = output.join(format!("{}.md", target.name()));
                fs::write(&markdown, target.markdown()?)?;
                println!("Wrote {} and {}", json.display(), markdown.display());
            }
        }
        Commands::List => {
            println!("Available formats:");
            for target in SchemaTarget::ALL {
                println!("  - {}", target.name());
            }
        }
    }

    Ok(())
}

fn emit(content: String, output: Option<PathBuf>) -> std::io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
