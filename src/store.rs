//! Popup State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The lists here
//! mirror the record stores; they are only written after a dispatch
//! reports a change.

use leptos::prelude::*;
use rapid_copy_core::{Bookmark, RecordId, Snippet};
use reactive_stores::Store;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupTab {
    #[default]
    Data,
    Url,
}

/// Popup state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PopupState {
    /// Snippets in canonical (insertion) order
    pub snippets: Vec<Snippet>,
    /// Bookmarks in canonical (insertion) order
    pub bookmarks: Vec<Bookmark>,
    pub snippet_search: String,
    pub bookmark_search: String,
    pub active_tab: PopupTab,
    /// Card whose dropdown menu is open
    pub open_menu: Option<RecordId>,
}

pub type PopupStore = Store<PopupState>;

/// Get the popup store from context
pub fn use_popup_store() -> PopupStore {
    expect_context::<PopupStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the dropdown for `id`, or close it if it is already open
pub fn store_toggle_menu(store: &PopupStore, id: RecordId) {
    let open = store.open_menu().get_untracked();
    store.open_menu().set(if open == Some(id) { None } else { Some(id) });
}

pub fn store_close_menu(store: &PopupStore) {
    if store.open_menu().get_untracked().is_some() {
        store.open_menu().set(None);
    }
}
