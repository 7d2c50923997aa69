//! Application Context
//!
//! Dispatchers, notice state and configuration, provided via the Leptos
//! Context API.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rapid_copy_core::{
    Action, ActionDispatcher, Bookmark, ClipboardPort, Notice, NoticeBoard, Outcome, PersistenceBackend,
    PopupConfig, Record, RecordKind, RecordStore, Snippet, SystemClock,
};

use crate::store::{PopupStateStoreFields, PopupStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    snippets: StoredValue<Arc<ActionDispatcher<Snippet>>>,
    bookmarks: StoredValue<Arc<ActionDispatcher<Bookmark>>>,
    board: StoredValue<Arc<NoticeBoard>>,
    /// Visible notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Visible notice - write
    set_notice: WriteSignal<Option<Notice>>,
    pub config: StoredValue<PopupConfig>,
}

fn dispatcher_for<R: Record>(
    config: &PopupConfig,
    backend: &Arc<dyn PersistenceBackend>,
    clipboard: &Arc<dyn ClipboardPort>,
) -> Arc<ActionDispatcher<R>> {
    let key = config.keys(R::KIND).for_backend(backend.kind());
    let store = RecordStore::new(backend.clone(), key, Arc::new(SystemClock))
        .with_duplicate_suffix(config.duplicate_suffix.clone());
    Arc::new(ActionDispatcher::new(Arc::new(store), clipboard.clone()))
}

impl AppContext {
    pub fn new(config: PopupConfig, backend: Arc<dyn PersistenceBackend>, clipboard: Arc<dyn ClipboardPort>) -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            snippets: StoredValue::new(dispatcher_for(&config, &backend, &clipboard)),
            bookmarks: StoredValue::new(dispatcher_for(&config, &backend, &clipboard)),
            board: StoredValue::new(Arc::new(NoticeBoard::new())),
            notice,
            set_notice,
            config: StoredValue::new(config),
        }
    }

    pub fn snippets(&self) -> Arc<ActionDispatcher<Snippet>> {
        self.snippets.get_value()
    }

    pub fn bookmarks(&self) -> Arc<ActionDispatcher<Bookmark>> {
        self.bookmarks.get_value()
    }

    pub fn export_file(&self, kind: RecordKind) -> String {
        self.config.with_value(|c| c.export_file(kind).to_string())
    }

    /// Show `notice` and schedule its dismissal; a newer notice restarts the countdown
    pub fn show_notice(&self, notice: Notice) {
        let board = self.board.get_value();
        let ticket = board.show(notice.clone());
        self.set_notice.set(Some(notice));

        let millis = self.config.with_value(|c| c.notice_duration_ms);
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if board.dismiss(ticket) {
                set_notice.set(None);
            }
        });
    }
}

// ========================
// Dispatch
// ========================

/// A record kind the popup renders, with its dispatcher and mirrored list
pub trait PopupRecord: Record {
    fn dispatcher(ctx: &AppContext) -> Arc<ActionDispatcher<Self>>;

    fn publish(store: &PopupStore, records: Vec<Self>);
}

impl PopupRecord for Snippet {
    fn dispatcher(ctx: &AppContext) -> Arc<ActionDispatcher<Self>> {
        ctx.snippets()
    }

    fn publish(store: &PopupStore, records: Vec<Self>) {
        store.snippets().set(records);
    }
}

impl PopupRecord for Bookmark {
    fn dispatcher(ctx: &AppContext) -> Arc<ActionDispatcher<Self>> {
        ctx.bookmarks()
    }

    fn publish(store: &PopupStore, records: Vec<Self>) {
        store.bookmarks().set(records);
    }
}

/// Dispatch `action`, refresh the mirrored list and show the notice
pub async fn dispatch<R: PopupRecord>(ctx: AppContext, store: PopupStore, action: Action<R>) -> Outcome<R> {
    let dispatcher = R::dispatcher(&ctx);
    let outcome = dispatcher.dispatch(action).await;
    if outcome.needs_refresh() {
        R::publish(&store, dispatcher.store().snapshot().await);
    }
    if let Some(notice) = outcome.notice() {
        ctx.show_notice(notice.clone());
    }
    outcome
}

/// Load one kind from storage into the popup
pub async fn load<R: PopupRecord>(ctx: AppContext, store: PopupStore) {
    match R::dispatcher(&ctx).store().load().await {
        Ok(records) => R::publish(&store, records),
        Err(e) => {
            log::error!("Failed to load {:?} records: {}", R::KIND, e);
            ctx.show_notice(Notice::error("Failed to load saved data"));
        }
    }
}

/// Fire-and-forget dispatch for event handlers
pub fn spawn_dispatch<R: PopupRecord>(ctx: AppContext, store: PopupStore, action: Action<R>) {
    spawn_local(async move {
        dispatch(ctx, store, action).await;
    });
}
