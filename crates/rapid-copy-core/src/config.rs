//! Popup Configuration
//!
//! Storage keys, notice timing and export names. Every field has a default,
//! so a partial (or empty) config file is valid.

use serde::{Deserialize, Serialize};

use crate::domain::RecordKind;
use crate::repository::BackendKind;

/// Storage keys for one record kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    /// Key in the extension storage area
    pub extension: String,
    /// Key in `localStorage` (also used by the memory backend)
    pub local: String,
}

impl StorageKeys {
    fn new(extension: &str, local: &str) -> Self {
        Self {
            extension: extension.to_string(),
            local: local.to_string(),
        }
    }

    pub fn for_backend(&self, backend: BackendKind) -> &str {
        match backend {
            BackendKind::Extension => &self.extension,
            BackendKind::Local | BackendKind::Memory => &self.local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub snippet_keys: StorageKeys,
    pub bookmark_keys: StorageKeys,
    /// How long a notice stays visible
    pub notice_duration_ms: u32,
    /// Appended to the primary text of a duplicate
    pub duplicate_suffix: String,
    pub snippet_export_file: String,
    pub bookmark_export_file: String,
    /// `log` level name for the console logger
    pub log_level: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            snippet_keys: StorageKeys::new("data", "extensionData"),
            bookmark_keys: StorageKeys::new("savedUrls", "extensionBookmarks"),
            notice_duration_ms: 2000,
            duplicate_suffix: " (copy)".to_string(),
            snippet_export_file: "Rapid-copy-key-value-Data.json".to_string(),
            bookmark_export_file: "Rapid-copy-bookmarks.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PopupConfig {
    /// Parse a JSON config document
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Parse, falling back to defaults on error
    pub fn from_json_or_default(text: &str) -> Self {
        match Self::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn keys(&self, kind: RecordKind) -> &StorageKeys {
        match kind {
            RecordKind::Snippet => &self.snippet_keys,
            RecordKind::Bookmark => &self.bookmark_keys,
        }
    }

    pub fn export_file(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Snippet => &self.snippet_export_file,
            RecordKind::Bookmark => &self.bookmark_export_file,
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
