//! The working specification, kept between command invocations

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::PersistenceWarning;
use crate::history::KeyValueStore;
use crate::spec::ProjectSpecification;

pub const DRAFT_STORAGE_KEY: &str = "current-draft";

/// The stored working state. `prompt` is the text the session last showed;
/// it is absent in drafts written before prompts were kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(flatten)]
    pub spec: ProjectSpecification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug)]
pub struct DraftStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the draft; a missing or unreadable draft falls back to the
    /// default specification.
    pub fn load(&self) -> (Draft, Option<PersistenceWarning>) {
        match self.storage.get(DRAFT_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(draft) => (draft, None),
                Err(e) => {
                    let warning = PersistenceWarning::read(format!("draft: {}", e));
                    warn!("{}", warning);
                    (Draft::default(), Some(warning))
                }
            },
            Ok(None) => {
                debug!("No saved draft, using defaults");
                (Draft::default(), None)
            }
            Err(e) => {
                let warning = PersistenceWarning::read(format!("draft: {}", e));
                warn!("{}", warning);
                (Draft::default(), Some(warning))
            }
        }
    }

    pub fn save(&mut self, spec: &ProjectSpecification, prompt: &str) -> Option<PersistenceWarning> {
        let draft = Draft {
            spec: spec.clone(),
            prompt: Some(prompt.to_string()),
        };
        let result = serde_json::to_string_pretty(&draft)
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.storage
                    .set(DRAFT_STORAGE_KEY, &raw)
                    .map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => None,
            Err(e) => {
                let warning = PersistenceWarning::write(format!("draft: {}", e));
                warn!("{}", warning);
                Some(warning)
            }
        }
    }
}
