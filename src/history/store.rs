//! Bounded, newest-first prompt history

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::entry::{decode_history, encode_history, HistoryEntry};
use super::storage::KeyValueStore;
use crate::errors::{PersistenceWarning, Persisted, PromptError, PromptResult};
use crate::spec::ProjectSpecification;

pub const HISTORY_STORAGE_KEY: &str = "prompt-history";
pub const HISTORY_CAPACITY: usize = 20;

/// Owns the history log and writes it through to a [`KeyValueStore`] after
/// every mutation.
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<HistoryEntry>,
    load_warning: Option<PersistenceWarning>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Reads the log from `storage`. Never fails: absent, unreadable or
    /// unparseable storage yields an empty log, with a warning for the
    /// latter two.
    pub fn load(storage: S) -> Self {
        let mut load_warning = None;

        let entries = match storage.get(HISTORY_STORAGE_KEY) {
            Ok(None) => {
                debug!("No stored history, starting empty");
                Vec::new()
            }
            Ok(Some(raw)) => match decode_history(&raw) {
                Ok(mut entries) => {
                    entries.truncate(HISTORY_CAPACITY);
                    debug!("Loaded {} history entries", entries.len());
                    entries
                }
                Err(e) => {
                    let warning = PersistenceWarning::read(e);
                    warn!("{}", warning);
                    load_warning = Some(warning);
                    Vec::new()
                }
            },
            Err(e) => {
                let warning = PersistenceWarning::read(e.to_string());
                warn!("{}", warning);
                load_warning = Some(warning);
                Vec::new()
            }
        };

        Self {
            storage,
            entries,
            load_warning,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn load_warning(&self) -> Option<&PersistenceWarning> {
        self.load_warning.as_ref()
    }

    /// Snapshots `prompt` and `spec` under `name`.
    ///
    /// Fails only on a blank name, leaving the log untouched. The oldest
    /// entry is evicted once the log exceeds [`HISTORY_CAPACITY`].
    pub fn save(
        &mut self,
        name: &str,
        prompt: &str,
        spec: &ProjectSpecification,
    ) -> PromptResult<Persisted<HistoryEntry>> {
        self.save_at(name, prompt, spec, Utc::now())
    }

    pub fn save_at(
        &mut self,
        name: &str,
        prompt: &str,
        spec: &ProjectSpecification,
        now: DateTime<Utc>,
    ) -> PromptResult<Persisted<HistoryEntry>> {
        if name.trim().is_empty() {
            return Err(PromptError::Validation(
                "a name is required to save a prompt".to_string(),
            ));
        }

        let entry = HistoryEntry {
            id: self.next_id(now),
            name: name.to_string(),
            prompt: prompt.to_string(),
            form_data: spec.clone(),
            created_at: now,
        };

        self.entries.insert(0, entry.clone());
        if self.entries.len() > HISTORY_CAPACITY {
            let evicted = self.entries.len() - HISTORY_CAPACITY;
            self.entries.truncate(HISTORY_CAPACITY);
            debug!("Evicted {} oldest history entries", evicted);
        }
        info!("Saved prompt '{}' to history as {}", entry.name, entry.id);

        Ok(match self.persist() {
            Some(warning) => Persisted::degraded(entry, warning),
            None => Persisted::clean(entry),
        })
    }

    /// Removes the entry with `id`. An unknown id is a no-op; the value is
    /// whether anything was removed.
    pub fn remove(&mut self, id: &str) -> Persisted<bool> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;

        if removed {
            info!("Removed history entry {}", id);
        } else {
            debug!("No history entry {} to remove", id);
        }

        match self.persist() {
            Some(warning) => Persisted::degraded(removed, warning),
            None => Persisted::clean(removed),
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Writes the whole log. The in-memory log is kept when this fails.
    fn persist(&mut self) -> Option<PersistenceWarning> {
        let raw = match encode_history(&self.entries) {
            Ok(raw) => raw,
            Err(e) => return Some(self.write_failed(e.to_string())),
        };
        match self.storage.set(HISTORY_STORAGE_KEY, &raw) {
            Ok(()) => None,
            Err(e) => Some(self.write_failed(e.to_string())),
        }
    }

    fn write_failed(&self, message: String) -> PersistenceWarning {
        let warning = PersistenceWarning::write(message);
        warn!("{}", warning);
        warning
    }

    /// Millisecond timestamp, bumped past the newest existing id so two saves
    /// within the same millisecond still get distinct, increasing ids. When
    /// the newest id cannot be bumped, the first free id from the timestamp
    /// on is used instead.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let candidate = now.timestamp_millis();
        let newest = self
            .entries
            .iter()
            .filter_map(|entry| entry.id.parse::<i64>().ok())
            .max();

        let mut next = match newest {
            Some(newest) if newest >= candidate => newest.checked_add(1).unwrap_or(candidate),
            _ => candidate,
        };
        // The log holds at most HISTORY_CAPACITY ids, so this ends quickly
        while self.entries.iter().any(|entry| entry.id == next.to_string()) {
            next = next.wrapping_add(1);
        }
        next.to_string()
    }
}
