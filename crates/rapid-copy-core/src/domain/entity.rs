//! Domain Layer - Core Record Trait
//!
//! This trait defines the contract shared by every record kind.
//! The store, projector and dispatcher are generic over it.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::status::Status;

/// Record identifier (wall-clock milliseconds at creation)
pub type RecordId = i64;

/// The record kinds the popup manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Snippet,
    Bookmark,
}

impl RecordKind {
    /// Word used in user-facing notices
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Snippet => "Item",
            RecordKind::Bookmark => "Bookmark",
        }
    }
}

/// Which form the dispatcher is validating for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Input a validation failure points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Primary,
    Secondary,
    Url,
}

/// A draft that cannot be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    /// Corrective message, if the kind shows one
    pub message: Option<String>,
}

impl ValidationError {
    pub fn silent(field: Field) -> Self {
        Self { field, message: None }
    }

    pub fn with_message(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: Some(message.into()),
        }
    }
}

/// Core trait for all persisted records
///
/// Implementors serialize to the persisted JSON shape and must tolerate
/// older shapes on deserialize (missing flags default, never fail).
pub trait Record: Sized + Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Form-level field set used to create or edit a record
    type Draft: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    /// Assign an identity to a record that arrived without one
    fn set_id(&mut self, id: RecordId);

    /// The "key" of a snippet, the "title" of a bookmark
    fn primary_text(&self) -> &str;

    /// The "value" of a snippet, the "description" of a bookmark
    fn secondary_text(&self) -> &str;

    /// ISO-8601 creation timestamp, never mutated
    fn created_at(&self) -> &str;

    fn set_created_at(&mut self, created_at: String);

    fn is_pinned(&self) -> bool;

    fn set_pinned(&mut self, pinned: bool);

    /// Archive status, `None` for kinds without one
    fn status(&self) -> Option<Status> {
        None
    }

    /// Returns false when the kind has no status
    fn set_status(&mut self, _status: Status) -> bool {
        false
    }

    /// Text placed on the clipboard by the copy action
    fn clipboard_text(&self) -> &str;

    fn from_draft(id: RecordId, created_at: String, draft: &Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;

    /// Overwrite the editable fields, keeping id, createdAt and pin state
    fn apply_draft(&mut self, draft: &Self::Draft);

    /// Copy with a new identity: suffixed primary text, unpinned
    fn duplicate(&self, id: RecordId, created_at: String, suffix: &str) -> Self;

    fn validate(draft: &Self::Draft, mode: FormMode) -> Result<(), ValidationError>;
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store has not been loaded yet")]
    NotLoaded,

    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("persistence failed: {0}")]
    PersistenceFailed(String),

    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
}
