//! In-Memory Backend
//!
//! Used by tests and as the last fallback when the popup runs somewhere
//! with neither extension storage nor localStorage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::traits::{BackendKind, PersistenceBackend};
use crate::domain::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Value>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key, as if an earlier session had written it
    pub fn with_entry(key: &str, value: Value) -> Self {
        let mut backend = Self::new();
        backend.entries.get_mut().insert(key.to_string(), value);
        backend
    }

    /// Make every subsequent `save` fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn raw(&self, key: &str) -> Option<Value> {
        self.entries.lock().await.get(key).cloned()
    }
}

#[async_trait(?Send)]
impl PersistenceBackend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: Value) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::PersistenceFailed(format!("write to '{}' rejected", key)));
        }
        self.entries.lock().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
