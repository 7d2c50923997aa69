//! Record Store
//!
//! Owns the canonical list of one record kind. Every mutation writes the
//! whole list back; a failed write rolls the in-memory list back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::Mutex;

use super::traits::PersistenceBackend;

use crate::domain::{iso_timestamp, Clock, Record, RecordId, StoreError, StoreResult};

struct StoreState<R> {
    records: Vec<R>,
    loaded: bool,
}

/// Canonical list for one record kind, bound to one storage key
///
/// The state lock is held across backend calls, so a `load` issued after a
/// mutation always observes that mutation's write.
pub struct RecordStore<R: Record> {
    backend: Arc<dyn PersistenceBackend>,
    key: String,
    clock: Arc<dyn Clock>,
    duplicate_suffix: String,
    state: Mutex<StoreState<R>>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(backend: Arc<dyn PersistenceBackend>, key: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            backend,
            key: key.into(),
            clock,
            duplicate_suffix: " (copy)".to_string(),
            state: Mutex::new(StoreState {
                records: Vec::new(),
                loaded: false,
            }),
        }
    }

    pub fn with_duplicate_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.duplicate_suffix = suffix.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted list, replacing the in-memory one
    ///
    /// Entries that do not decode are skipped, so a damaged list still
    /// loads. Only a failing backend read leaves the store unloaded.
    pub async fn load(&self) -> StoreResult<Vec<R>> {
        let mut state = self.state.lock().await;
        let mut records = match self.backend.load(&self.key).await? {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => self.decode_lenient(value),
        };
        fill_missing_identity(&mut records, self.clock.now());
        log::debug!("[{}] loaded {} records from {:?}", self.key, records.len(), self.backend.kind());
        state.records = records.clone();
        state.loaded = true;
        Ok(records)
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.lock().await.loaded
    }

    /// Copy of the canonical list in insertion order
    pub async fn snapshot(&self) -> Vec<R> {
        self.state.lock().await.records.clone()
    }

    pub async fn get(&self, id: RecordId) -> Option<R> {
        self.state
            .lock()
            .await
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Create a record from a draft and append it
    pub async fn add(&self, draft: &R::Draft) -> StoreResult<R> {
        let now = self.clock.now();
        let created_at = iso_timestamp(now);
        self.mutate(move |records| {
            let id = next_id(records, now.timestamp_millis());
            let record = R::from_draft(id, created_at, draft);
            records.push(record.clone());
            Ok(record)
        })
        .await
    }

    /// Apply `mutator` to the record with `id`
    pub async fn update<F>(&self, id: RecordId, mutator: F) -> StoreResult<R>
    where
        F: FnOnce(&mut R),
    {
        self.mutate(move |records| {
            let record = records
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or(StoreError::NotFound(id))?;
            mutator(record);
            Ok(record.clone())
        })
        .await
    }

    /// Remove the record with `id`, returning it
    pub async fn remove(&self, id: RecordId) -> StoreResult<R> {
        self.mutate(move |records| {
            let index = records
                .iter()
                .position(|r| r.id() == id)
                .ok_or(StoreError::NotFound(id))?;
            // Colliding ids go together, like a filter on id would
            let removed = records.remove(index);
            records.retain(|r| r.id() != id);
            Ok(removed)
        })
        .await
    }

    /// Append a copy of the record with `id` under a fresh identity
    pub async fn duplicate(&self, id: RecordId) -> StoreResult<R> {
        let now = self.clock.now();
        let created_at = iso_timestamp(now);
        let suffix = self.duplicate_suffix.clone();
        self.mutate(move |records| {
            let source = records
                .iter()
                .find(|r| r.id() == id)
                .ok_or(StoreError::NotFound(id))?;
            let new_id = next_id(records, now.timestamp_millis());
            let copy = source.duplicate(new_id, created_at, &suffix);
            records.push(copy.clone());
            Ok(copy)
        })
        .await
    }

    /// Swap the whole list (import)
    ///
    /// Allowed before a successful load: it does not depend on the old list,
    /// and a successful write leaves the store loaded.
    pub async fn replace_all(&self, mut replacement: Vec<R>) -> StoreResult<usize> {
        fill_missing_identity(&mut replacement, self.clock.now());
        self.write_with(false, move |records| {
            *records = replacement;
            Ok(records.len())
        })
        .await
    }

    /// Run `op` on the list and persist; on any error the list is restored
    async fn mutate<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Vec<R>) -> StoreResult<T>,
    {
        self.write_with(true, op).await
    }

    async fn write_with<T, F>(&self, require_loaded: bool, op: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Vec<R>) -> StoreResult<T>,
    {
        let mut state = self.state.lock().await;
        if require_loaded && !state.loaded {
            return Err(StoreError::NotLoaded);
        }

        let before = state.records.clone();
        let result = match op(&mut state.records) {
            Ok(result) => result,
            Err(e) => {
                state.records = before;
                return Err(e);
            }
        };

        let encoded = serde_json::to_value(&state.records)
            .map_err(|e| StoreError::PersistenceFailed(e.to_string()));
        let written = match encoded {
            Ok(value) => self.backend.save(&self.key, value).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            log::warn!("[{}] write failed, rolling back: {}", self.key, e);
            state.records = before;
            return Err(e);
        }

        state.loaded = true;
        log::debug!("[{}] persisted {} records", self.key, state.records.len());
        Ok(result)
    }

    /// Decode each entry on its own, skipping the unreadable ones
    fn decode_lenient(&self, value: Value) -> Vec<R> {
        let Value::Array(entries) = value else {
            log::warn!("[{}] stored value is not a list, starting empty", self.key);
            return Vec::new();
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("[{}] skipping unreadable record #{}: {}", self.key, index, e);
                    None
                }
            })
            .collect()
    }
}

/// Records stored without an id or timestamp get fresh ones
fn fill_missing_identity<R: Record>(records: &mut [R], now: DateTime<Utc>) {
    let created_at = iso_timestamp(now);
    for index in 0..records.len() {
        if records[index].id() <= 0 {
            let id = next_id(records, now.timestamp_millis());
            records[index].set_id(id);
        }
        if records[index].created_at().is_empty() {
            records[index].set_created_at(created_at.clone());
        }
    }
}

/// Decode a persisted list; anything but an array of records is corrupt
pub(crate) fn decode_list<R: Record>(value: Value) -> StoreResult<Vec<R>> {
    if !value.is_array() {
        return Err(StoreError::Corrupt("expected an array of records".to_string()));
    }
    serde_json::from_value(value).map_err(|e| StoreError::Corrupt(e.to_string()))
}

/// Clock millis, bumped past the largest id when it would collide
fn next_id<R: Record>(records: &[R], now_millis: RecordId) -> RecordId {
    if records.iter().any(|r| r.id() == now_millis) {
        let max = records.iter().map(|r| r.id()).max().unwrap_or(now_millis);
        max + 1
    } else {
        now_millis
    }
}
