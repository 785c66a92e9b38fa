//! The learner's progress collection.
//!
//! All records live as one JSON array under `PROGRESS_KEY`. Reads are
//! forgiving: a missing key, unparseable text or an unexpected shape all load
//! as "no progress". Writes always replace the whole array.

use std::sync::Arc;

use quiz_core::model::ProgressRecord;
use serde_json::Value;
use tracing::{debug, warn};

use crate::repository::{KeyValueStore, StorageError};

/// Key holding the serialized progress collection.
pub const PROGRESS_KEY: &str = "quiz-progress";

/// Read/merge/write access to progress records.
///
/// This is the only way the rest of the system touches persisted progress.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load every stored record, in stored order.
    ///
    /// Never fails: read errors and corrupt data are logged and treated as an
    /// empty collection.
    pub async fn load(&self) -> Vec<ProgressRecord> {
        let raw = match self.kv.get_value(PROGRESS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "progress store unreadable; treating as empty");
                return Vec::new();
            }
        };
        decode_records(&raw)
    }

    /// Replace the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization fails or the medium rejects the
    /// write. The previous collection is left untouched in that case.
    pub async fn save(&self, records: &[ProgressRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.put_value(PROGRESS_KEY, &raw).await
    }

    /// Insert `record`, replacing any record for the same (category, level).
    ///
    /// The new record goes to the end of the collection. An absent or
    /// undecodable collection starts fresh, but a failed read aborts so other
    /// records are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the current collection cannot be read or the
    /// merged collection cannot be written.
    pub async fn upsert(&self, record: ProgressRecord) -> Result<(), StorageError> {
        let mut records = match self.kv.get_value(PROGRESS_KEY).await? {
            Some(raw) => decode_records(&raw),
            None => Vec::new(),
        };
        records.retain(|existing| !existing.is_for(&record.category_id, &record.level_id));
        debug!(
            category = %record.category_id,
            level = %record.level_id,
            completed = record.completed,
            "upserting progress record"
        );
        records.push(record);
        self.save(&records).await
    }
}

/// Decode a stored collection as leniently as possible.
///
/// - invalid JSON or a non-array value yields an empty list;
/// - array entries that do not look like a record are skipped.
#[must_use]
pub fn decode_records(raw: &str) -> Vec<ProgressRecord> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "stored progress is not valid JSON; ignoring it");
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("stored progress is not a list; ignoring it");
        return Vec::new();
    };

    let total = items.len();
    let records: Vec<ProgressRecord> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if records.len() != total {
        warn!(
            skipped = total - records.len(),
            "dropped malformed progress entries"
        );
    }
    records
}
