//! Shared wiring for commands: storage, session and spec files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::PersistenceWarning;
use crate::history::{FileStore, HistoryStore};
use crate::session::{DraftStore, Session};
use crate::spec::ProjectSpecification;

/// The session for this invocation plus the store its draft lives in.
pub struct Workspace {
    pub session: Session<FileStore>,
    pub drafts: DraftStore<FileStore>,
}

impl Workspace {
    /// Opens history and draft from the configured data directory.
    pub fn open(config: &Config) -> Self {
        let storage = FileStore::new(&config.data_dir);
        debug!("Opening workspace in {}", storage.dir().display());

        let history = HistoryStore::load(storage.clone());
        if let Some(warning) = history.load_warning() {
            report_warning(warning);
        }

        let drafts = DraftStore::new(storage);
        let (draft, warning) = drafts.load();
        if let Some(warning) = warning {
            report_warning(&warning);
        }

        let session = match draft.prompt {
            Some(prompt) => Session::restore(Catalog::builtin(), history, draft.spec, prompt),
            None => Session::with_spec(Catalog::builtin(), history, draft.spec),
        };

        Self { session, drafts }
    }

    /// Writes the session's specification and prompt back as the draft.
    pub fn store_draft(&mut self) {
        if let Some(warning) = self.drafts.save(self.session.spec(), self.session.prompt()) {
            report_warning(&warning);
        }
    }
}

/// Prints a non-fatal persistence notice for the user.
pub fn report_warning(warning: &PersistenceWarning) {
    eprintln!("warning: {}", warning);
}

/// Reads a specification from a JSON or YAML (`.yaml`/`.yml`) file.
pub fn read_spec_file(path: &Path) -> Result<ProjectSpecification> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML spec: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON spec: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_STORAGE_KEY;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_read_json_and_yaml_specs() {
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("spec.json");
        fs::write(&json_path, r#"{"projectType": "blog", "projectName": "Notes"}"#).unwrap();
        let spec = read_spec_file(&json_path).unwrap();
        assert_eq!(spec.project_type, "blog");
        assert_eq!(spec.framework, "nextjs");

        let yaml_path = dir.path().join("spec.yaml");
        fs::write(
            &yaml_path,
            "projectName: Shop\nframework: vue\nfeatures:\n  - Shopping Cart\n  - Wishlist\n",
        )
        .unwrap();
        let spec = read_spec_file(&yaml_path).unwrap();
        assert_eq!(spec.project_name, "Shop");
        assert_eq!(spec.features.as_slice(), &["Shopping Cart", "Wishlist"]);
    }

    #[test]
    fn test_read_missing_spec_file_errors() {
        assert!(read_spec_file(&PathBuf::from("/definitely/not/here.json")).is_err());
    }

    #[test]
    fn test_draft_persists_across_workspaces() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let mut workspace = Workspace::open(&config);
        workspace
            .session
            .update(|spec| spec.project_name = "Carried over".to_string());
        workspace.store_draft();
        workspace.session.save("kept").unwrap();

        let reopened = Workspace::open(&config);
        assert_eq!(reopened.session.spec().project_name, "Carried over");
        assert!(reopened.session.prompt().contains("\"Carried over\""));
        assert_eq!(reopened.session.history().len(), 1);
    }

    #[test]
    fn test_loaded_snapshot_prompt_carries_across_workspaces() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let mut workspace = Workspace::open(&config);
        workspace
            .session
            .update(|spec| spec.project_name = "Snapshot".to_string());
        let id = workspace.session.save("snap").unwrap().value.id;

        // Rewrite the stored entry's prompt so it differs from a fresh synthesis
        let key_path = FileStore::new(dir.path()).path_for(HISTORY_STORAGE_KEY);
        let raw = fs::read_to_string(&key_path).unwrap();
        fs::write(&key_path, raw.replace("Create a web application", "Stored text for")).unwrap();

        let mut workspace = Workspace::open(&config);
        assert!(workspace.session.load(&id));
        workspace.store_draft();

        let reopened = Workspace::open(&config);
        assert_eq!(reopened.session.spec().project_name, "Snapshot");
        assert!(reopened.session.prompt().starts_with("Stored text for called \"Snapshot\""));
    }
}
