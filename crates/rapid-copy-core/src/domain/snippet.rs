//! Snippet Entity
//!
//! A saved key/value text pair.

use serde::{Deserialize, Serialize};

use super::entity::{Field, FormMode, Record, RecordId, RecordKind, ValidationError};
use super::status::{null_as_default, Status};

/// A key/value snippet as persisted under the `data` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Zero when the stored record had none
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pinned: bool,
}

/// Snippet form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetDraft {
    pub key: String,
    pub value: String,
}

impl SnippetDraft {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Record for Snippet {
    type Draft = SnippetDraft;

    const KIND: RecordKind = RecordKind::Snippet;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn primary_text(&self) -> &str {
        &self.key
    }

    fn secondary_text(&self) -> &str {
        &self.value
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn set_created_at(&mut self, created_at: String) {
        self.created_at = created_at;
    }

    fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    fn set_pinned(&mut self, pinned: bool) {
        self.is_pinned = pinned;
    }

    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn set_status(&mut self, status: Status) -> bool {
        self.status = status;
        true
    }

    fn clipboard_text(&self) -> &str {
        &self.value
    }

    fn from_draft(id: RecordId, created_at: String, draft: &SnippetDraft) -> Self {
        Self {
            id,
            key: draft.key.trim().to_string(),
            value: draft.value.trim().to_string(),
            status: Status::Active,
            created_at,
            is_pinned: false,
        }
    }

    fn to_draft(&self) -> SnippetDraft {
        SnippetDraft::new(self.key.clone(), self.value.clone())
    }

    fn apply_draft(&mut self, draft: &SnippetDraft) {
        self.key = draft.key.trim().to_string();
        self.value = draft.value.trim().to_string();
    }

    fn duplicate(&self, id: RecordId, created_at: String, suffix: &str) -> Self {
        Self {
            id,
            key: format!("{}{}", self.key, suffix),
            created_at,
            is_pinned: false,
            ..self.clone()
        }
    }

    fn validate(draft: &SnippetDraft, _mode: FormMode) -> Result<(), ValidationError> {
        // Both checks refocus the key input
        if draft.key.trim().is_empty() || draft.value.trim().is_empty() {
            return Err(ValidationError::silent(Field::Primary));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_shape_is_normalized() {
        let json = r#"{"id": 1, "key": "k", "value": "v", "createdAt": "2024-01-01T00:00:00.000Z"}"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert!(!snippet.is_pinned);
        assert_eq!(snippet.status, Status::Active);

        let json = r#"{"id": 2, "key": "k", "value": "v", "status": null, "isPinned": null}"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert!(!snippet.is_pinned);
        assert_eq!(snippet.status, Status::Active);
        assert_eq!(snippet.created_at, "");
    }

    #[test]
    fn test_missing_id_decodes_as_zero() {
        let snippet: Snippet = serde_json::from_str(r#"{"key": "api", "value": "abc"}"#).unwrap();
        assert_eq!(snippet.id, 0);
        assert_eq!(snippet.key, "api");
    }

    #[test]
    fn test_serializes_camel_case() {
        let snippet = Snippet::from_draft(7, "2024-01-01T00:00:00.000Z".into(), &SnippetDraft::new("a", "b"));
        let value = serde_json::to_value(&snippet).unwrap();
        assert_eq!(value["isPinned"], false);
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn test_validation_requires_both_fields() {
        assert!(Snippet::validate(&SnippetDraft::new("api_key", "abc"), FormMode::Create).is_ok());
        let err = Snippet::validate(&SnippetDraft::new("  ", "abc"), FormMode::Create).unwrap_err();
        assert_eq!(err.field, Field::Primary);
        assert!(Snippet::validate(&SnippetDraft::new("k", ""), FormMode::Create).is_err());
    }

    #[test]
    fn test_draft_is_trimmed() {
        let snippet = Snippet::from_draft(1, String::new(), &SnippetDraft::new(" k ", " v\n"));
        assert_eq!(snippet.key, "k");
        assert_eq!(snippet.value, "v");
    }
}
