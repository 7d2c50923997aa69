//! Action Dispatcher
//!
//! Maps one user intent onto at most one store call and one notice.
//! Owns the form state (`Idle` / open for create / open for edit).

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clipboard::{copy_with_fallback, ClipboardPort};
use crate::domain::{Field, FormMode, Record, RecordId, RecordKind, StoreError};
use crate::notice::Notice;
use crate::repository::RecordStore;
use crate::transfer::{export_json, parse_import};

/// A discrete user intent
#[derive(Debug, Clone)]
pub enum Action<R: Record> {
    /// Open an empty (or prefilled) create form
    OpenCreate(R::Draft),
    /// Stage an edit of an existing record
    OpenEdit(RecordId),
    Cancel,
    /// Submit the open form
    Save(R::Draft),
    TogglePin(RecordId),
    ToggleArchive(RecordId),
    Duplicate(RecordId),
    Delete(RecordId),
    Copy(RecordId),
    /// Replace the list with the contents of an import file
    Import(String),
}

/// What the shell should do after a dispatch
#[derive(Debug, Clone)]
pub enum Outcome<R: Record> {
    /// Show the form with `draft` as its content
    FormOpened { mode: FormMode, draft: R::Draft },
    FormClosed,
    /// The store changed; re-project and show `notice`
    Done { notice: Notice, record: Option<R> },
    /// Refocus `field`; nothing was stored
    Invalid { field: Field, notice: Option<Notice> },
    Failed { notice: Notice },
    /// Unknown id, no open form, or an action the kind does not support
    Ignored,
}

impl<R: Record> Outcome<R> {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Outcome::Done { notice, .. } | Outcome::Failed { notice } => Some(notice),
            Outcome::Invalid { notice, .. } => notice.as_ref(),
            _ => None,
        }
    }

    /// True when the shell should refresh its projection
    pub fn needs_refresh(&self) -> bool {
        matches!(self, Outcome::Done { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Open(FormMode),
}

pub struct ActionDispatcher<R: Record> {
    store: Arc<RecordStore<R>>,
    clipboard: Arc<dyn ClipboardPort>,
    form: Mutex<FormState>,
}

impl<R: Record> ActionDispatcher<R> {
    pub fn new(store: Arc<RecordStore<R>>, clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self {
            store,
            clipboard,
            form: Mutex::new(FormState::Idle),
        }
    }

    pub fn store(&self) -> &Arc<RecordStore<R>> {
        &self.store
    }

    pub async fn form_state(&self) -> FormState {
        *self.form.lock().await
    }

    pub async fn is_form_open(&self) -> bool {
        matches!(self.form_state().await, FormState::Open(_))
    }

    /// Pretty JSON of the current canonical list
    pub async fn export(&self) -> String {
        export_json(&self.store.snapshot().await)
    }

    pub async fn dispatch(&self, action: Action<R>) -> Outcome<R> {
        let label = R::KIND.label();
        match action {
            Action::OpenCreate(prefill) => {
                *self.form.lock().await = FormState::Open(FormMode::Create);
                Outcome::FormOpened {
                    mode: FormMode::Create,
                    draft: prefill,
                }
            }
            Action::OpenEdit(id) => {
                let mut form = self.form.lock().await;
                match self.store.get(id).await {
                    Some(record) => {
                        *form = FormState::Open(FormMode::Edit(id));
                        Outcome::FormOpened {
                            mode: FormMode::Edit(id),
                            draft: record.to_draft(),
                        }
                    }
                    None => Outcome::Ignored,
                }
            }
            Action::Cancel => {
                *self.form.lock().await = FormState::Idle;
                Outcome::FormClosed
            }
            Action::Save(draft) => self.save(draft).await,
            Action::TogglePin(id) => {
                let result = self.store.update(id, |r| r.set_pinned(!r.is_pinned())).await;
                self.settle(result, |r| {
                    let verb = if r.is_pinned() { "pinned" } else { "unpinned" };
                    format!("{} {}!", label, verb)
                })
            }
            Action::ToggleArchive(id) => {
                if self.store.get(id).await.and_then(|r| r.status()).is_none() {
                    return Outcome::Ignored;
                }
                // Read the status under the store lock so concurrent toggles compose
                let result = self.store.update(id, |r| {
                    if let Some(status) = r.status() {
                        r.set_status(status.toggled());
                    }
                }).await;
                self.settle(result, |r| {
                    let archived = r.status().map(|s| s.is_archived()).unwrap_or(false);
                    let verb = if archived { "archived" } else { "unarchived" };
                    format!("{} {}!", label, verb)
                })
            }
            Action::Duplicate(id) => {
                let result = self.store.duplicate(id).await;
                self.settle(result, |_| format!("{} duplicated successfully!", label))
            }
            Action::Delete(id) => {
                let mut form = self.form.lock().await;
                let result = self.store.remove(id).await;
                if result.is_ok() && *form == FormState::Open(FormMode::Edit(id)) {
                    *form = FormState::Idle;
                }
                self.settle(result, |_| format!("{} deleted successfully!", label))
            }
            Action::Copy(id) => {
                let Some(record) = self.store.get(id).await else {
                    return Outcome::Ignored;
                };
                match copy_with_fallback(self.clipboard.as_ref(), record.clipboard_text()).await {
                    Ok(()) => Outcome::Done {
                        notice: Notice::success(format!("Copied \"{}\" to clipboard!", record.primary_text())),
                        record: None,
                    },
                    Err(e) => {
                        log::error!("Legacy copy failed: {}", e);
                        Outcome::Failed {
                            notice: Notice::error("Failed to copy to clipboard"),
                        }
                    }
                }
            }
            Action::Import(text) => self.import(&text).await,
        }
    }

    async fn save(&self, draft: R::Draft) -> Outcome<R> {
        // Held for the whole save: a second submit waits, then finds the form closed
        let mut form = self.form.lock().await;
        let mode = match *form {
            FormState::Idle => return Outcome::Ignored,
            FormState::Open(mode) => mode,
        };

        if let Err(invalid) = R::validate(&draft, mode) {
            return Outcome::Invalid {
                field: invalid.field,
                notice: invalid.message.map(Notice::error),
            };
        }

        let label = R::KIND.label();
        let result = match mode {
            FormMode::Create => self.store.add(&draft).await,
            FormMode::Edit(id) => self.store.update(id, |r| r.apply_draft(&draft)).await,
        };

        match result {
            Ok(record) => {
                *form = FormState::Idle;
                let text = match (mode, R::KIND) {
                    (FormMode::Create, RecordKind::Snippet) => "Data saved successfully!".to_string(),
                    (FormMode::Create, _) => format!("{} saved successfully!", label),
                    (FormMode::Edit(_), _) => format!("{} updated successfully!", label),
                };
                Outcome::Done {
                    notice: Notice::success(text),
                    record: Some(record),
                }
            }
            Err(StoreError::NotFound(id)) => {
                log::warn!("Edited record {} disappeared before save", id);
                *form = FormState::Idle;
                Outcome::Failed {
                    notice: Notice::error(format!("{} no longer exists", label)),
                }
            }
            // Form stays open so the user can retry
            Err(e) => Outcome::Failed { notice: failure_notice(&e) },
        }
    }

    async fn import(&self, text: &str) -> Outcome<R> {
        let records = match parse_import::<R>(text) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Import rejected: {}", e);
                return Outcome::Failed {
                    notice: Notice::error(format!("Import failed: {}", e)),
                };
            }
        };
        match self.store.replace_all(records).await {
            Ok(count) => Outcome::Done {
                notice: Notice::success(format!("Imported {} records", count)),
                record: None,
            },
            Err(e) => Outcome::Failed { notice: failure_notice(&e) },
        }
    }

    /// Turn a store result into an outcome; unknown ids are ignored
    fn settle(&self, result: Result<R, StoreError>, message: impl FnOnce(&R) -> String) -> Outcome<R> {
        match result {
            Ok(record) => Outcome::Done {
                notice: Notice::success(message(&record)),
                record: Some(record),
            },
            Err(StoreError::NotFound(id)) => {
                log::debug!("Ignoring action on unknown id {}", id);
                Outcome::Ignored
            }
            Err(e) => Outcome::Failed { notice: failure_notice(&e) },
        }
    }
}

fn failure_notice(error: &StoreError) -> Notice {
    log::error!("Store operation failed: {}", error);
    match error {
        StoreError::NotLoaded => Notice::error("Data is still loading, try again"),
        _ => Notice::error("Failed to save changes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::domain::{Bookmark, BookmarkDraft, FixedClock, Snippet, SnippetDraft, Status};
    use crate::projection::project;
    use crate::domain::{Clock, StoreResult};
    use crate::repository::{BackendKind, MemoryBackend, PersistenceBackend};
    use async_trait::async_trait;

    struct FakeClipboard {
        modern_ok: bool,
        legacy_ok: bool,
        written: std::sync::Mutex<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(modern_ok: bool, legacy_ok: bool) -> Self {
            Self {
                modern_ok,
                legacy_ok,
                written: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ClipboardPort for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if !self.modern_ok {
                return Err(ClipboardError::Denied("document not focused".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn write_text_legacy(&self, text: &str) -> Result<(), ClipboardError> {
            if !self.legacy_ok {
                return Err(ClipboardError::Unavailable("copy command refused".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Fixture<R: Record> {
        dispatcher: ActionDispatcher<R>,
        backend: Arc<MemoryBackend>,
        clock: Arc<FixedClock>,
        clipboard: Arc<FakeClipboard>,
    }

    async fn fixture<R: Record>(clipboard: FakeClipboard) -> Fixture<R> {
        let backend = Arc::new(MemoryBackend::new());
        let clock = Arc::new(FixedClock::at_millis(1_700_000_000_000));
        let store = Arc::new(RecordStore::new(backend.clone(), "test", clock.clone()));
        store.load().await.expect("Failed to load");
        let clipboard = Arc::new(clipboard);
        Fixture {
            dispatcher: ActionDispatcher::new(store, clipboard.clone()),
            backend,
            clock,
            clipboard,
        }
    }

    async fn snippets() -> Fixture<Snippet> {
        fixture(FakeClipboard::new(true, true)).await
    }

    async fn create(f: &Fixture<Snippet>, key: &str, value: &str) -> Snippet {
        f.dispatcher.dispatch(Action::OpenCreate(SnippetDraft::default())).await;
        match f.dispatcher.dispatch(Action::Save(SnippetDraft::new(key, value))).await {
            Outcome::Done { record: Some(record), .. } => record,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    fn notice_text<R: Record>(outcome: &Outcome<R>) -> &str {
        outcome.notice().map(|n| n.text.as_str()).unwrap_or("")
    }

    #[tokio::test]
    async fn test_add_search_pin_flow() {
        let f = snippets().await;
        let api = create(&f, "api_key", "abc123").await;
        assert_eq!(f.dispatcher.store().len().await, 1);

        let hits = project(&f.dispatcher.store().snapshot().await, "api");
        assert_eq!(hits, vec![api.clone()]);

        let pinned = f.dispatcher.dispatch(Action::TogglePin(api.id)).await;
        assert_eq!(notice_text(&pinned), "Item pinned!");

        f.clock.advance(60_000);
        let later = create(&f, "phone", "555-0100").await;

        let view = project(&f.dispatcher.store().snapshot().await, "");
        assert_eq!(view[0].id, api.id);
        assert_eq!(view[1].id, later.id);
    }

    #[tokio::test]
    async fn test_double_save_creates_one_record() {
        let f = snippets().await;
        f.dispatcher.dispatch(Action::OpenCreate(SnippetDraft::default())).await;

        let draft = SnippetDraft::new("k", "v");
        let first = f.dispatcher.dispatch(Action::Save(draft.clone())).await;
        let second = f.dispatcher.dispatch(Action::Save(draft)).await;

        assert_eq!(notice_text(&first), "Data saved successfully!");
        assert!(matches!(second, Outcome::Ignored));
        assert_eq!(f.dispatcher.store().len().await, 1);
        assert_eq!(f.dispatcher.form_state().await, FormState::Idle);
    }

    #[tokio::test]
    async fn test_interleaved_double_save_creates_one_record() {
        let f = snippets().await;
        f.dispatcher.dispatch(Action::OpenCreate(SnippetDraft::default())).await;

        let draft = SnippetDraft::new("k", "v");
        let (a, b) = tokio::join!(
            f.dispatcher.dispatch(Action::Save(draft.clone())),
            f.dispatcher.dispatch(Action::Save(draft.clone()))
        );
        assert!(a.needs_refresh() ^ b.needs_refresh());
        assert_eq!(f.dispatcher.store().len().await, 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_makes_no_store_call() {
        let f = snippets().await;
        f.dispatcher.dispatch(Action::OpenCreate(SnippetDraft::default())).await;

        let outcome = f.dispatcher.dispatch(Action::Save(SnippetDraft::new("", "value"))).await;
        assert!(matches!(outcome, Outcome::Invalid { field: Field::Primary, notice: None }));
        assert_eq!(f.backend.write_count(), 0);
        assert!(f.dispatcher.is_form_open().await);
    }

    #[tokio::test]
    async fn test_staged_edit_cancel_keeps_record() {
        let f = snippets().await;
        let original = create(&f, "token", "old").await;

        match f.dispatcher.dispatch(Action::OpenEdit(original.id)).await {
            Outcome::FormOpened { mode, draft } => {
                assert_eq!(mode, FormMode::Edit(original.id));
                assert_eq!(draft, SnippetDraft::new("token", "old"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        f.dispatcher.dispatch(Action::Cancel).await;

        assert_eq!(f.dispatcher.store().snapshot().await, vec![original]);
    }

    #[tokio::test]
    async fn test_edit_save_updates_in_place() {
        let f = snippets().await;
        let original = create(&f, "token", "old").await;
        f.dispatcher.dispatch(Action::TogglePin(original.id)).await;
        f.clock.advance(5_000);

        f.dispatcher.dispatch(Action::OpenEdit(original.id)).await;
        let outcome = f.dispatcher.dispatch(Action::Save(SnippetDraft::new("token", "new"))).await;
        assert_eq!(notice_text(&outcome), "Item updated successfully!");

        let records = f.dispatcher.store().snapshot().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, original.id);
        assert_eq!(records[0].value, "new");
        assert_eq!(records[0].created_at, original.created_at);
        assert!(records[0].is_pinned);
    }

    #[tokio::test]
    async fn test_delete_while_editing_closes_form() {
        let f = snippets().await;
        let record = create(&f, "a", "b").await;
        f.dispatcher.dispatch(Action::OpenEdit(record.id)).await;

        let outcome = f.dispatcher.dispatch(Action::Delete(record.id)).await;
        assert_eq!(notice_text(&outcome), "Item deleted successfully!");
        assert_eq!(f.dispatcher.form_state().await, FormState::Idle);
        assert!(matches!(
            f.dispatcher.dispatch(Action::Save(SnippetDraft::new("a", "c"))).await,
            Outcome::Ignored
        ));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_ignored() {
        let f = snippets().await;
        for action in [
            Action::TogglePin(1),
            Action::ToggleArchive(1),
            Action::Duplicate(1),
            Action::Delete(1),
            Action::Copy(1),
            Action::OpenEdit(1),
        ] {
            assert!(matches!(f.dispatcher.dispatch(action).await, Outcome::Ignored));
        }
        assert_eq!(f.backend.write_count(), 0);
    }

    #[tokio::test]
    async fn test_archive_toggle() {
        let f = snippets().await;
        let record = create(&f, "a", "b").await;

        let archived = f.dispatcher.dispatch(Action::ToggleArchive(record.id)).await;
        assert_eq!(notice_text(&archived), "Item archived!");
        assert_eq!(f.dispatcher.store().get(record.id).await.unwrap().status, Status::Archived);

        let restored = f.dispatcher.dispatch(Action::ToggleArchive(record.id)).await;
        assert_eq!(notice_text(&restored), "Item unarchived!");
    }

    struct YieldingBackend {
        inner: MemoryBackend,
    }

    #[async_trait(?Send)]
    impl PersistenceBackend for YieldingBackend {
        fn kind(&self) -> BackendKind {
            BackendKind::Memory
        }

        async fn load(&self, key: &str) -> StoreResult<Option<serde_json::Value>> {
            tokio::task::yield_now().await;
            self.inner.load(key).await
        }

        async fn save(&self, key: &str, value: serde_json::Value) -> StoreResult<()> {
            tokio::task::yield_now().await;
            self.inner.save(key, value).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_archive_toggles_compose() {
        let backend = Arc::new(YieldingBackend { inner: MemoryBackend::new() });
        let clock = Arc::new(FixedClock::at_millis(1_700_000_000_000));
        let store: Arc<RecordStore<Snippet>> = Arc::new(RecordStore::new(backend, "test", clock));
        store.load().await.unwrap();
        let id = store.add(&SnippetDraft::new("k", "v")).await.unwrap().id;
        let dispatcher = ActionDispatcher::new(store, Arc::new(FakeClipboard::new(true, true)));

        let (first, second) = tokio::join!(
            dispatcher.dispatch(Action::ToggleArchive(id)),
            dispatcher.dispatch(Action::ToggleArchive(id))
        );
        assert_eq!(notice_text(&first), "Item archived!");
        assert_eq!(notice_text(&second), "Item unarchived!");
        assert_eq!(dispatcher.store().get(id).await.unwrap().status, Status::Active);
    }

    #[tokio::test]
    async fn test_bookmarks_have_no_archive() {
        let f: Fixture<Bookmark> = fixture(FakeClipboard::new(true, true)).await;
        f.dispatcher.dispatch(Action::OpenCreate(BookmarkDraft::default())).await;
        let saved = f
            .dispatcher
            .dispatch(Action::Save(BookmarkDraft::new("Docs", "API docs", "https://docs.rs")))
            .await;
        assert_eq!(notice_text(&saved), "Bookmark saved successfully!");

        let id = f.dispatcher.store().snapshot().await[0].id;
        assert!(matches!(f.dispatcher.dispatch(Action::ToggleArchive(id)).await, Outcome::Ignored));
        assert_eq!(f.backend.write_count(), 1);

        let dup = f.dispatcher.dispatch(Action::Duplicate(id)).await;
        assert_eq!(notice_text(&dup), "Bookmark duplicated successfully!");
    }

    #[tokio::test]
    async fn test_bookmark_validation_messages() {
        let f: Fixture<Bookmark> = fixture(FakeClipboard::new(true, true)).await;
        f.dispatcher.dispatch(Action::OpenCreate(BookmarkDraft::new("Prefilled", "", "https://a.dev"))).await;

        let outcome = f.dispatcher.dispatch(Action::Save(BookmarkDraft::new("Prefilled", "", "https://a.dev"))).await;
        assert_eq!(notice_text(&outcome), "Description is required");
        assert!(matches!(outcome, Outcome::Invalid { field: Field::Secondary, .. }));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_form_open() {
        let f = snippets().await;
        f.dispatcher.dispatch(Action::OpenCreate(SnippetDraft::default())).await;
        f.backend.set_fail_writes(true);

        let outcome = f.dispatcher.dispatch(Action::Save(SnippetDraft::new("k", "v"))).await;
        assert!(matches!(outcome, Outcome::Failed { .. }));
        assert_eq!(notice_text(&outcome), "Failed to save changes");
        assert!(f.dispatcher.is_form_open().await);
        assert!(f.dispatcher.store().is_empty().await);

        f.backend.set_fail_writes(false);
        let retried = f.dispatcher.dispatch(Action::Save(SnippetDraft::new("k", "v"))).await;
        assert!(retried.needs_refresh());
    }

    #[tokio::test]
    async fn test_copy_uses_value() {
        let f = snippets().await;
        let record = create(&f, "api_key", "abc123").await;
        let outcome = f.dispatcher.dispatch(Action::Copy(record.id)).await;
        assert_eq!(notice_text(&outcome), "Copied \"api_key\" to clipboard!");
        assert_eq!(*f.clipboard.written.lock().unwrap(), vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_falls_back_then_reports() {
        let f: Fixture<Snippet> = fixture(FakeClipboard::new(false, true)).await;
        let record = create(&f, "k", "v").await;
        assert!(f.dispatcher.dispatch(Action::Copy(record.id)).await.needs_refresh());
        assert_eq!(f.clipboard.written.lock().unwrap().len(), 1);

        let f: Fixture<Snippet> = fixture(FakeClipboard::new(false, false)).await;
        let record = create(&f, "k", "v").await;
        let outcome = f.dispatcher.dispatch(Action::Copy(record.id)).await;
        assert_eq!(notice_text(&outcome), "Failed to copy to clipboard");
        assert!(outcome.notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_import_is_all_or_nothing() {
        let f = snippets().await;
        let kept = create(&f, "keep", "me").await;

        let outcome = f.dispatcher.dispatch(Action::Import(r#"{"id": 1}"#.to_string())).await;
        assert!(matches!(outcome, Outcome::Failed { .. }));
        let outcome = f.dispatcher.dispatch(Action::Import("not json".to_string())).await;
        assert!(matches!(outcome, Outcome::Failed { .. }));
        assert_eq!(f.dispatcher.store().snapshot().await, vec![kept]);

        let outcome = f
            .dispatcher
            .dispatch(Action::Import(r#"[{"id": 1, "key": "a", "value": "1"}, {"id": 2, "key": "b", "value": "2"}]"#.to_string()))
            .await;
        assert_eq!(notice_text(&outcome), "Imported 2 records");
        assert_eq!(f.dispatcher.store().len().await, 2);
    }

    #[tokio::test]
    async fn test_import_fills_missing_identity() {
        let f = snippets().await;
        let outcome = f
            .dispatcher
            .dispatch(Action::Import(r#"[{"key": "api", "value": "abc"}, {"key": "b", "value": "2"}]"#.to_string()))
            .await;
        assert_eq!(notice_text(&outcome), "Imported 2 records");

        let records = f.dispatcher.store().snapshot().await;
        assert_ne!(records[0].id, 0);
        assert_ne!(records[0].id, records[1].id);
        let stamp = crate::domain::iso_timestamp(f.clock.now());
        assert!(records.iter().all(|r| r.created_at == stamp));
    }

    #[tokio::test]
    async fn test_damaged_storage_still_accepts_save_and_import() {
        let backend = Arc::new(MemoryBackend::with_entry("test", serde_json::json!("garbage")));
        let clock = Arc::new(FixedClock::at_millis(1_700_000_000_000));
        let store: Arc<RecordStore<Snippet>> = Arc::new(RecordStore::new(backend.clone(), "test", clock));
        assert!(store.load().await.unwrap().is_empty());
        let dispatcher = ActionDispatcher::new(store, Arc::new(FakeClipboard::new(true, true)));

        dispatcher.dispatch(Action::OpenCreate(SnippetDraft::default())).await;
        let saved = dispatcher.dispatch(Action::Save(SnippetDraft::new("k", "v"))).await;
        assert!(saved.needs_refresh());

        let imported = dispatcher
            .dispatch(Action::Import(r#"[{"key": "a", "value": "1"}]"#.to_string()))
            .await;
        assert_eq!(notice_text(&imported), "Imported 1 records");
        assert_eq!(backend.write_count(), 2);
    }

    #[tokio::test]
    async fn test_export_is_pretty_json_of_canonical_list() {
        let f = snippets().await;
        create(&f, "a", "1").await;
        let text = f.dispatcher.export().await;
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["key"], "a");
        assert!(text.contains('\n'));
    }
}
