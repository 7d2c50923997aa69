//! Rapid Copy Core
//!
//! Record store, view projection and action dispatch for the popup.
//! Browser capabilities come in through the `PersistenceBackend` and
//! `ClipboardPort` traits, so everything here runs natively under test.

pub mod domain;
pub mod repository;
pub mod projection;
pub mod dispatch;
pub mod notice;
pub mod transfer;
pub mod clipboard;
pub mod config;

pub use domain::{
    Bookmark, BookmarkDraft, Clock, Field, FormMode, Record, RecordId, RecordKind, Snippet,
    SnippetDraft, Status, StoreError, StoreResult, SystemClock,
};
pub use repository::{BackendKind, MemoryBackend, PersistenceBackend, RecordStore};
pub use projection::project;
pub use dispatch::{Action, ActionDispatcher, FormState, Outcome};
pub use notice::{Notice, NoticeBoard, NoticeTicket, Tone};
pub use transfer::{export_json, parse_import, ImportError};
pub use clipboard::{ClipboardError, ClipboardPort};
pub use config::{PopupConfig, StorageKeys};
