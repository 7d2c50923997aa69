//! Domain Layer
//!
//! Record kinds and the contracts they share.
//! No storage or browser dependencies live here.

mod entity;
mod status;
mod snippet;
mod bookmark;
mod clock;

pub use entity::{
    Field, FormMode, Record, RecordId, RecordKind, StoreError, StoreResult, ValidationError,
};
pub use status::Status;
pub use snippet::{Snippet, SnippetDraft};
pub use bookmark::{Bookmark, BookmarkDraft};
pub use clock::{iso_timestamp, parse_timestamp, Clock, FixedClock, SystemClock};
