use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

use super::workspace::Workspace;
use crate::config::Config;
use crate::export::{render, write_export, ExportFormat};

/// Export the prompt as text, JSON or Markdown
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Export format: txt, json or md
    #[arg(short, long, default_value = "txt")]
    pub format: ExportFormat,

    /// Write every format at once
    #[arg(long, conflicts_with = "format")]
    pub all: bool,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["out", "all"])]
    pub stdout: bool,

    /// Export a saved history entry instead of the working draft
    #[arg(long = "from-history", value_name = "ID")]
    pub from_history: Option<String>,
}

impl ExportCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let workspace = Workspace::open(config);
        let session = &workspace.session;

        let (spec, prompt) = match &self.from_history {
            Some(id) => match session.history().find(id) {
                Some(entry) => (&entry.form_data, entry.prompt.as_str()),
                None => bail!("No saved prompt with id {}", id),
            },
            None => (session.spec(), session.prompt()),
        };

        if self.stdout {
            print!("{}", render(self.format, spec, prompt, session.catalog(), Utc::now())?);
            return Ok(());
        }

        let dir = self.out.clone().unwrap_or_else(|| config.export_dir());
        let formats: &[ExportFormat] = if self.all {
            &ExportFormat::ALL
        } else {
            std::slice::from_ref(&self.format)
        };

        for format in formats {
            let path = write_export(&dir, *format, spec, prompt, session.catalog())?;
            println!("Exported {}", path.display());
        }

        Ok(())
    }
}
