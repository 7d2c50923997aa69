//! Repository Layer - Persistence Backend Trait
//!
//! Abstract key-value storage the record stores write through.
//! Implementations: extension storage, localStorage, in-memory.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::StoreResult;

/// Which storage area a backend talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// `chrome.storage.local`
    Extension,
    /// `window.localStorage`
    Local,
    /// Process memory, nothing survives a reload
    Memory,
}

/// Asynchronous key-value persistence
///
/// Futures are not `Send`: browser implementations await JS promises.
/// Callers serialize access per key.
#[async_trait(?Send)]
pub trait PersistenceBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Read the value stored under `key`, `None` if absent
    async fn load(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Replace the value stored under `key`
    async fn save(&self, key: &str, value: Value) -> StoreResult<()>;
}
