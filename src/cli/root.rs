use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use super::catalog::CatalogCommand;
use super::config::ConfigCommand;
use super::draft::DraftCommand;
use super::export::ExportCommand;
use super::generate::GenerateCommand;
use super::history::{HistoryCommand, SaveCommand};
use super::schema::SchemaCommand;
use super::watch::WatchCommand;
use crate::config::Config;

/// promptgen - describe a project once, get a ready-to-use AI prompt
#[derive(Parser)]
#[command(
    name = "promptgen",
    version,
    about = "Turn a structured project description into an AI generation prompt",
    long_about = r#"promptgen keeps a working project specification (type, framework, design
style, colors, features) and renders it into a prompt you can paste into an
AI generation service. Prompts can be saved to a local history and exported
as text, JSON or Markdown.

Examples:
  promptgen draft set project-type landing
  promptgen draft set project-name "Acme"
  promptgen draft feature "Contact Form"
  promptgen generate --copy
  promptgen save "Acme landing v1"
  promptgen export --format md"#
)]
pub struct Cli {
    /// Directory holding history and the working draft
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the prompt for the draft or a spec file
    Generate(GenerateCommand),
    /// Edit the working specification
    Draft(DraftCommand),
    /// Save the current prompt to history
    Save(SaveCommand),
    /// List, show, load or delete saved prompts
    History(HistoryCommand),
    /// Export the prompt as text, JSON or Markdown
    Export(ExportCommand),
    /// Browse project types, frameworks, styles, features and color presets
    Catalog(CatalogCommand),
    /// Generate or validate the JSON schema of spec files
    Schema(SchemaCommand),
    /// Re-generate the prompt whenever a spec file changes
    Watch(WatchCommand),
    /// Show the resolved configuration
    Config(ConfigCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let config = Config::init(self.data_dir.as_deref()).await?;
        debug!("Configuration initialized: {:?}", config);

        match self.command {
            Some(Commands::Generate(cmd)) => cmd.execute(&config).await,
            Some(Commands::Draft(cmd)) => cmd.execute(&config).await,
            Some(Commands::Save(cmd)) => cmd.execute(&config).await,
            Some(Commands::History(cmd)) => cmd.execute(&config).await,
            Some(Commands::Export(cmd)) => cmd.execute(&config).await,
            Some(Commands::Catalog(cmd)) => cmd.execute().await,
            Some(Commands::Schema(cmd)) => cmd.execute().await,
            Some(Commands::Watch(cmd)) => cmd.execute(&config).await,
            Some(Commands::Config(cmd)) => cmd.execute(&config).await,
            None => {
                // No subcommand: show the current draft's prompt
                GenerateCommand::default().execute(&config).await
            }
        }
    }
}
