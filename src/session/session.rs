//! Session state: the specification being edited, its prompt and history

use tracing::{debug, info};

use super::clipboard::Clipboard;
use crate::catalog::Catalog;
use crate::errors::{Persisted, PromptError, PromptResult};
use crate::history::{HistoryEntry, HistoryStore, KeyValueStore};
use crate::prompt::synthesize_with_catalog;
use crate::spec::ProjectSpecification;

/// One editing session.
///
/// Every change to the specification re-synthesizes the prompt and bumps the
/// revision. Loading a history entry restores its stored prompt as-is rather
/// than re-deriving it.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    catalog: Catalog,
    spec: ProjectSpecification,
    prompt: String,
    revision: u64,
    history: HistoryStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    #[cfg(test)]
    pub fn new(catalog: Catalog, history: HistoryStore<S>) -> Self {
        Self::with_spec(catalog, history, ProjectSpecification::default())
    }

    pub fn with_spec(catalog: Catalog, history: HistoryStore<S>, spec: ProjectSpecification) -> Self {
        let prompt = synthesize_with_catalog(&spec, &catalog);
        Self {
            catalog,
            spec,
            prompt,
            revision: 0,
            history,
        }
    }

    /// Resumes a session from a stored specification and the prompt it was
    /// showing, without re-deriving the prompt.
    pub fn restore(
        catalog: Catalog,
        history: HistoryStore<S>,
        spec: ProjectSpecification,
        prompt: String,
    ) -> Self {
        Self {
            catalog,
            spec,
            prompt,
            revision: 0,
            history,
        }
    }

    pub fn spec(&self) -> &ProjectSpecification {
        &self.spec
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Applies `edit` to the specification and regenerates the prompt.
    pub fn update<F>(&mut self, edit: F) -> &str
    where
        F: FnOnce(&mut ProjectSpecification),
    {
        edit(&mut self.spec);
        self.regenerate();
        &self.prompt
    }

    pub fn replace_spec(&mut self, spec: ProjectSpecification) -> &str {
        self.update(|current| *current = spec)
    }

    /// Flips a feature and returns whether it is now selected.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        let mut selected = false;
        self.update(|spec| selected = spec.features.toggle(feature));
        selected
    }

    fn regenerate(&mut self) {
        self.prompt = synthesize_with_catalog(&self.spec, &self.catalog);
        self.revision += 1;
        debug!("Regenerated prompt at revision {}", self.revision);
    }

    /// Saves the current specification and prompt under `name`.
    pub fn save(&mut self, name: &str) -> PromptResult<Persisted<HistoryEntry>> {
        self.history.save(name, &self.prompt, &self.spec)
    }

    /// Replaces the specification and prompt with a stored snapshot.
    /// Returns false when no entry has that id.
    pub fn load(&mut self, id: &str) -> bool {
        let Some(entry) = self.history.find(id) else {
            return false;
        };
        self.spec = entry.form_data.clone();
        self.prompt = entry.prompt.clone();
        self.revision += 1;
        info!("Loaded '{}' from history", entry.name);
        true
    }

    pub fn delete(&mut self, id: &str) -> Persisted<bool> {
        self.history.remove(id)
    }

    pub fn copy_prompt<C: Clipboard>(&self, clipboard: &mut C) -> PromptResult<()> {
        clipboard
            .set_text(&self.prompt)
            .map_err(PromptError::Clipboard)?;
        debug!("Copied {} characters to the clipboard", self.prompt.chars().count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryStore;
    use crate::prompt::FEATURES_HEADING;

    fn session() -> Session<MemoryStore> {
        Session::new(Catalog::builtin(), HistoryStore::load(MemoryStore::new()))
    }

    struct RecordingClipboard {
        text: Option<String>,
        deny: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), String> {
            if self.deny {
                return Err("permission denied".to_string());
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_new_session_has_prompt_for_defaults() {
        let session = session();
        assert!(session.prompt().starts_with("Create a web application\n"));
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_update_regenerates_and_bumps_revision() {
        let mut session = session();
        session.update(|spec| spec.project_name = "Acme".to_string());
        assert!(session.prompt().contains("called \"Acme\""));
        assert_eq!(session.revision(), 1);

        assert!(session.toggle_feature("Wishlist"));
        assert!(session.prompt().contains(FEATURES_HEADING));
        assert!(!session.toggle_feature("Wishlist"));
        assert!(!session.prompt().contains(FEATURES_HEADING));
        assert_eq!(session.revision(), 3);
    }

    #[test]
    fn test_save_then_load_restores_snapshot() {
        let mut session = session();
        session.update(|spec| spec.project_name = "Saved".to_string());
        let saved_prompt = session.prompt().to_string();
        let id = session.save("snapshot").unwrap().value.id;

        session.update(|spec| spec.project_name = "Edited".to_string());
        assert!(session.load(&id));
        assert_eq!(session.spec().project_name, "Saved");
        assert_eq!(session.prompt(), saved_prompt);

        assert!(!session.load("missing"));
    }

    #[test]
    fn test_load_does_not_rederive_prompt() {
        let mut session = session();
        let id = session.save("original").unwrap().value.id;
        let stored = session.history().find(&id).unwrap().prompt.clone();

        let mut catalog = Catalog::builtin();
        catalog.frameworks[0].label = "Renamed".to_string();
        let mut session = Session::new(catalog, HistoryStore::load(session.history.into_storage()));
        assert!(session.load(&id));
        assert_eq!(session.prompt(), stored);
        assert!(session.prompt().contains("Next.js"));
    }

    #[test]
    fn test_blank_save_name_is_rejected() {
        let mut session = session();
        assert!(matches!(session.save("   "), Err(PromptError::Validation(_))));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_delete_entry() {
        let mut session = session();
        let id = session.save("a").unwrap().value.id;
        assert!(session.delete(&id).value);
        assert!(!session.delete(&id).value);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_copy_prompt() {
        let session = session();
        let mut clipboard = RecordingClipboard { text: None, deny: false };
        session.copy_prompt(&mut clipboard).unwrap();
        assert_eq!(clipboard.text.as_deref(), Some(session.prompt()));

        let mut denied = RecordingClipboard { text: None, deny: true };
        assert!(matches!(
            session.copy_prompt(&mut denied),
            Err(PromptError::Clipboard(_))
        ));
    }
}
