//! Bookmark Entity
//!
//! A saved page: title and description typed by the user, URL captured
//! from the active tab at creation.

use serde::{Deserialize, Serialize};

use super::entity::{Field, FormMode, Record, RecordId, RecordKind, ValidationError};
use super::status::null_as_default;

/// A page bookmark as persisted under the `savedUrls` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Zero when the stored record had none
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pinned: bool,
}

/// Bookmark form fields
///
/// `url` is filled from the active tab, not typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkDraft {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl BookmarkDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

impl Record for Bookmark {
    type Draft = BookmarkDraft;

    const KIND: RecordKind = RecordKind::Bookmark;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn primary_text(&self) -> &str {
        &self.title
    }

    fn secondary_text(&self) -> &str {
        &self.description
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

    fn clipboard_text(&self) -> &str {
        &self.url
    }

    fn from_draft(id: RecordId, created_at: String, draft: &BookmarkDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            url: draft.url.trim().to_string(),
            description: draft.description.trim().to_string(),
            created_at,
            is_pinned: false,
        }
    }

    fn to_draft(&self) -> BookmarkDraft {
        BookmarkDraft::new(self.title.clone(), self.description.clone(), self.url.clone())
    }

    /// The URL stays the one captured at creation
    fn apply_draft(&mut self, draft: &BookmarkDraft) {
        self.title = draft.title.trim().to_string();
        self.description = draft.description.trim().to_string();
    }

    fn duplicate(&self, id: RecordId, created_at: String, suffix: &str) -> Self {
        Self {
            id,
            title: format!("{}{}", self.title, suffix),
            created_at,
            is_pinned: false,
            ..self.clone()
        }
    }

    fn validate(draft: &BookmarkDraft, mode: FormMode) -> Result<(), ValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::with_message(Field::Primary, "Title is required"));
        }
        if draft.description.trim().is_empty() {
            return Err(ValidationError::with_message(Field::Secondary, "Description is required"));
        }
        if mode == FormMode::Create && draft.url.trim().is_empty() {
            return Err(ValidationError::with_message(Field::Url, "Could not get current page URL"));
        }
        Ok(())
    }
}
