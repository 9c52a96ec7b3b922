//! History entries and their persisted record format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::ProjectSpecification;

/// Current schema version written to storage.
pub const HISTORY_SCHEMA_VERSION: u32 = 1;

/// A named snapshot of a specification and the prompt it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub form_data: ProjectSpecification,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct HistoryRecordRef<'a> {
    version: u32,
    entries: &'a [HistoryEntry],
}

#[derive(Deserialize)]
struct HistoryRecord {
    version: u32,
    entries: Vec<HistoryEntry>,
}

/// Serializes a log into the versioned record.
pub fn encode_history(entries: &[HistoryEntry]) -> serde_json::Result<String> {
    serde_json::to_string(&HistoryRecordRef {
        version: HISTORY_SCHEMA_VERSION,
        entries,
    })
}

/// Parses a stored record. Accepts the versioned record as well as the
/// unversioned form, a bare array of entries.
pub fn decode_history(raw: &str) -> Result<Vec<HistoryEntry>, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(|e| e.to_string()),
        Value::Object(_) => {
            let record: HistoryRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;
            if record.version > HISTORY_SCHEMA_VERSION {
                return Err(format!(
                    "unsupported history schema version {} (newest known is {})",
                    record.version, HISTORY_SCHEMA_VERSION
                ));
            }
            Ok(record.entries)
        }
        other => Err(format!("expected a history record, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
