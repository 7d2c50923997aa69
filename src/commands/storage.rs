//! Storage Backends
//!
//! `chrome.storage.local` inside the extension, `localStorage` when the
//! popup is opened as a plain page.

use std::sync::Arc;

use async_trait::async_trait;
use rapid_copy_core::{BackendKind, MemoryBackend, PersistenceBackend, StoreError, StoreResult};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::{global_has, js_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = get)]
    async fn extension_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = set)]
    async fn extension_set(items: JsValue) -> Result<JsValue, JsValue>;
}

/// Pick the storage area once, at startup
pub fn detect_backend() -> Arc<dyn PersistenceBackend> {
    if global_has(&["chrome", "storage", "local"]) {
        log::info!("Using extension storage");
        return Arc::new(ExtensionStorage);
    }
    if LocalStorage::available() {
        log::info!("Using localStorage");
        return Arc::new(LocalStorage);
    }
    log::warn!("No browser storage available; data will not survive a reload");
    Arc::new(MemoryBackend::new())
}

// ========================
// JSON <-> JS conversion
// ========================

fn to_js(value: &Value) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("JSON parse error: {:?}", e))
}

fn from_js(value: &JsValue) -> Result<Value, String> {
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| format!("JSON stringify error: {:?}", e))?
        .into();
    serde_json::from_str(&json).map_err(|e| e.to_string())
}

// ========================
// Extension storage
// ========================

pub struct ExtensionStorage;

impl ExtensionStorage {
    async fn get(key: &str) -> Result<Option<Value>, String> {
        let keys = js_sys::Array::of1(&JsValue::from_str(key));
        let result = extension_get(keys.into()).await.map_err(js_error)?;
        let entry = js_sys::Reflect::get(&result, &JsValue::from_str(key)).map_err(js_error)?;
        if entry.is_undefined() {
            return Ok(None);
        }
        from_js(&entry).map(Some)
    }

    async fn set(key: &str, value: &Value) -> Result<(), String> {
        let items = js_sys::Object::new();
        js_sys::Reflect::set(&items, &JsValue::from_str(key), &to_js(value)?).map_err(js_error)?;
        extension_set(items.into()).await.map_err(js_error)?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl PersistenceBackend for ExtensionStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Extension
    }

    async fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        Self::get(key).await.map_err(StoreError::Corrupt)
    }

    async fn save(&self, key: &str, value: Value) -> StoreResult<()> {
        Self::set(key, &value).await.map_err(StoreError::PersistenceFailed)
    }
}

// ========================
// localStorage
// ========================

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or("no window")?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| "localStorage is disabled".to_string())
    }

    fn available() -> bool {
        Self::storage().is_ok()
    }

    fn get(key: &str) -> Result<Option<Value>, String> {
        match Self::storage()?.get_item(key).map_err(js_error)? {
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| e.to_string()),
            None => Ok(None),
        }
    }

    fn set(key: &str, value: &Value) -> Result<(), String> {
        let text = serde_json::to_string(value).map_err(|e| e.to_string())?;
        // Quota errors surface here
        Self::storage()?.set_item(key, &text).map_err(js_error)
    }
}

#[async_trait(?Send)]
impl PersistenceBackend for LocalStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    async fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        Self::get(key).map_err(StoreError::Corrupt)
    }

    async fn save(&self, key: &str, value: Value) -> StoreResult<()> {
        Self::set(key, &value).map_err(StoreError::PersistenceFailed)
    }
}
