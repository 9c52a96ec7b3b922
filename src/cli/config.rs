use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::version;

/// Show the resolved configuration
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Also list the configuration files that are consulted
    #[arg(long)]
    pub paths: bool,
}

impl ConfigCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        println!("# {}", version::full_version());
        println!("{}", serde_json::to_string_pretty(config)?);

        if self.paths {
            println!();
            println!("Configuration files, highest priority first:");
            for path in Config::config_paths() {
                let marker = if path.exists() { "found" } else { "-" };
                println!("  [{:>5}] {}", marker, path.display());
            }
            println!("Environment: PROMPTGEN_DATA_DIR, PROMPTGEN_DEBOUNCE_MS, PROMPTGEN_EXPORT_DIR");
        }
        Ok(())
    }
}
