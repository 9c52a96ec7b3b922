//! Save and history commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use tracing::info;

use super::workspace::{report_warning, Workspace};
use crate::config::Config;
use crate::history::{HistoryEntry, HistoryStore, KeyValueStore};
use crate::session::Session;
use crate::utils::text::{format::format_table, string::truncate};

const NAME_COLUMN_WIDTH: usize = 32;
const PROMPT_PREVIEW_WIDTH: usize = 48;

/// Save the current prompt to history
#[derive(Debug, Args)]
pub struct SaveCommand {
    /// Name for the saved prompt
    #[arg(required = true)]
    pub name: Vec<String>,
}

impl SaveCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let mut workspace = Workspace::open(config);
        let entry = save_current(&mut workspace.session, &self.name.join(" "))?;
        println!("Saved '{}' as {}", entry.name, entry.id);
        Ok(())
    }
}

/// Saves the session prompt; a failed write is reported but still returns
/// the entry, which stays in this session's history.
pub fn save_current<S: KeyValueStore>(session: &mut Session<S>, name: &str) -> Result<HistoryEntry> {
    let saved = session.save(name)?;
    if let Some(warning) = &saved.warning {
        report_warning(warning);
    }
    info!("Saved prompt '{}' ({})", saved.value.name, saved.value.id);
    Ok(saved.value)
}

/// List, show, load or delete saved prompts
#[derive(Debug, Args)]
pub struct HistoryCommand {
    #[command(subcommand)]
    pub command: Option<HistorySubcommand>,
}

#[derive(Debug, Subcommand)]
pub enum HistorySubcommand {
    /// List saved prompts, newest first
    List,
    /// Print a saved prompt
    Show {
        id: String,
        /// Print the whole entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Make a saved specification the working draft
    Load { id: String },
    /// Delete a saved prompt
    Delete { id: String },
}

impl HistoryCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let mut workspace = Workspace::open(config);

        match self.command.as_ref().unwrap_or(&HistorySubcommand::List) {
            HistorySubcommand::List => {
                println!("{}", list_table(workspace.session.history()));
            }
            HistorySubcommand::Show { id, json } => {
                let Some(entry) = workspace.session.history().find(id) else {
                    bail!("No saved prompt with id {}", id);
                };
                if *json {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                } else {
                    print!("{}", entry.prompt);
                }
            }
            HistorySubcommand::Load { id } => {
                if !workspace.session.load(id) {
                    bail!("No saved prompt with id {}", id);
                }
                workspace.store_draft();
                print!("{}", workspace.session.prompt());
            }
            HistorySubcommand::Delete { id } => {
                let removed = workspace.session.delete(id);
                if let Some(warning) = &removed.warning {
                    report_warning(warning);
                }
                if removed.value {
                    println!("Deleted {}", id);
                } else {
                    println!("Nothing to delete for {}", id);
                }
            }
        }

        Ok(())
    }
}

/// Tabular listing of the history, newest first.
pub fn list_table<S: KeyValueStore>(history: &HistoryStore<S>) -> String {
    if history.is_empty() {
        return "No saved prompts yet.".to_string();
    }

    let rows: Vec<Vec<String>> = history
        .entries()
        .iter()
        .map(|entry| {
            vec![
                entry.id.clone(),
                truncate(&entry.name, NAME_COLUMN_WIDTH),
                entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
                truncate(entry.prompt.lines().next().unwrap_or(""), PROMPT_PREVIEW_WIDTH),
            ]
        })
        .collect();

    format_table(&["ID", "NAME", "SAVED", "PROMPT"], &rows)
}
