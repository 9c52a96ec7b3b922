use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::workspace::{read_spec_file, Workspace};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::PromptError;
use crate::history::{HistoryStore, KeyValueStore, MemoryStore};
use crate::session::{Session, SystemClipboard};

/// Print the prompt for the working draft or a spec file
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Render this JSON/YAML spec file instead of the working draft
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Also copy the prompt to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl GenerateCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        match &self.spec {
            Some(path) => {
                debug!("Generating prompt from {}", path.display());
                let spec = read_spec_file(path)?;
                // A spec file is rendered without touching the stored history
                let session =
                    Session::with_spec(Catalog::builtin(), HistoryStore::load(MemoryStore::new()), spec);
                self.emit(&session);
            }
            None => {
                let workspace = Workspace::open(config);
                self.emit(&workspace.session);
            }
        }
        Ok(())
    }

    fn emit<S: KeyValueStore>(&self, session: &Session<S>) {
        print!("{}", session.prompt());
        if self.copy {
            copy_prompt(session);
        }
    }
}

/// Copies the session prompt, reporting a refused clipboard as a notice
/// rather than failing the command.
pub fn copy_prompt<S: KeyValueStore>(session: &Session<S>) {
    let result = SystemClipboard::new()
        .map_err(PromptError::Clipboard)
        .and_then(|mut clipboard| session.copy_prompt(&mut clipboard));

    match result {
        Ok(()) => eprintln!("Prompt copied to clipboard."),
        Err(e) => {
            warn!("{}", e);
            eprintln!("notice: {}", e);
        }
    }
}
