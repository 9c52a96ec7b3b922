//! Watch command: re-synthesize a spec file's prompt as it is edited

use anyhow::{Context, Result};
use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::workspace::read_spec_file;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::prompt::synthesize_with_catalog;
use crate::session::{Debouncer, RevisionGate};

/// Re-generate the prompt whenever a spec file changes
#[derive(Debug, Args)]
pub struct WatchCommand {
    /// JSON/YAML spec file to watch
    pub spec: PathBuf,

    /// Quiet period in milliseconds (defaults to the configured value)
    #[arg(long = "debounce-ms")]
    pub debounce_ms: Option<u64>,
}

type RenderResult = std::result::Result<String, String>;

impl WatchCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let path = self
            .spec
            .canonicalize()
            .with_context(|| format!("Cannot watch {}", self.spec.display()))?;
        let quiet = self.quiet_period(config)?;

        let (tx, rx) = mpsc::channel(64);
        // Render once before any edit arrives
        let _ = tx.try_send(());

        let watched = path.clone();
        let event_tx = tx.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if touches(&event, &watched) => {
                // A full channel already has a pending change queued
                let _ = event_tx.try_send(());
            }
            Ok(_) => {}
            Err(e) => warn!("Watch error: {}", e),
        })?;

        // Editors often replace the file, so watch its directory
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        drop(tx);

        info!("Watching {} (debounce {:?})", path.display(), quiet);
        eprintln!("Watching {} - press Ctrl+C to stop", path.display());

        let emit = |revision: u64, result: &RenderResult| match result {
            Ok(prompt) => {
                eprintln!("--- revision {} ---", revision);
                print!("{}", prompt);
            }
            Err(e) => eprintln!("error: {}", e),
        };

        tokio::select! {
            _ = run_pipeline(rx, quiet, path, emit) => {}
            _ = tokio::signal::ctrl_c() => {
                eprintln!("Stopped watching");
            }
        }

        drop(watcher);
        Ok(())
    }

    /// The configured debounce, or the `--debounce-ms` override checked
    /// against the same bounds.
    fn quiet_period(&self, config: &Config) -> Result<Duration> {
        let mut settings = config.clone();
        if let Some(ms) = self.debounce_ms {
            settings.debounce_ms = ms;
            settings.validate()?;
        }
        Ok(Duration::from_millis(settings.debounce_ms))
    }
}

fn touches(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p == path || p.file_name() == path.file_name())
}

/// Debounces change notifications, renders each settled change on the
/// blocking pool and hands results to `emit` in revision order. Results
/// that finish after a newer revision has been applied are dropped.
/// Returns once `changes` is closed and every render has finished.
pub async fn run_pipeline<F>(changes: mpsc::Receiver<()>, quiet: Duration, path: PathBuf, mut emit: F)
where
    F: FnMut(u64, &RenderResult),
{
    let mut debouncer = Debouncer::new(changes, quiet);
    let (result_tx, mut result_rx) = mpsc::channel::<(u64, RenderResult)>(16);
    let catalog = Arc::new(Catalog::builtin());

    tokio::spawn(async move {
        let mut revision = 0u64;
        while debouncer.settled().await.is_some() {
            revision += 1;
            let tx = result_tx.clone();
            let path = path.clone();
            let catalog = Arc::clone(&catalog);
            tokio::task::spawn_blocking(move || {
                let result = read_spec_file(&path)
                    .map(|spec| synthesize_with_catalog(&spec, &catalog))
                    .map_err(|e| format!("{:#}", e));
                let _ = tx.blocking_send((revision, result));
            });
        }
    });

    let mut gate = RevisionGate::new();
    while let Some((revision, result)) = result_rx.recv().await {
        let unchanged = gate.current() == Some(&result);
        if !gate.offer(revision, result) {
            debug!(
                "Dropping stale render of revision {} (applied {:?})",
                revision,
                gate.revision()
            );
            continue;
        }
        if unchanged {
            debug!("Revision {} produced the same prompt", revision);
            continue;
        }
        if let Some(result) = gate.current() {
            emit(revision, result);
        }
    }
}
