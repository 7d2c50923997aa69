//! Import / Export
//!
//! Whole-list JSON transfer. Import is all-or-nothing: the text must parse
//! as an array of records before anything is replaced.

use serde_json::Value;
use thiserror::Error;

use crate::domain::Record;
use crate::repository::decode_list;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("expected a JSON array of records")]
    NotAnArray,

    #[error("record has an unexpected shape: {0}")]
    BadRecord(String),
}

/// Pretty-printed JSON array, as offered for download
pub fn export_json<R: Record>(records: &[R]) -> String {
    // Records are plain data; serialization cannot fail
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Parse an import file into records, normalizing older shapes
pub fn parse_import<R: Record>(text: &str) -> Result<Vec<R>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    decode_list(value).map_err(|e| ImportError::BadRecord(e.to_string()))
}
