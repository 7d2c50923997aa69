//! Rapid Copy Popup App
//!
//! Tabbed layout: saved data on one tab, bookmarks on the other.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use rapid_copy_core::{Bookmark, PopupConfig, Snippet};
use reactive_stores::Store;

use crate::commands;
use crate::components::{BookmarkPanel, NoticeToast, SnippetPanel, TabBar};
use crate::context::{load, AppContext};
use crate::store::{store_close_menu, PopupState, PopupStateStoreFields, PopupTab};

#[component]
pub fn App(config: PopupConfig) -> impl IntoView {
    let ctx = AppContext::new(config, commands::detect_backend(), Arc::new(commands::BrowserClipboard));
    let store = Store::new(PopupState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load both lists on mount; the stores are independent
    spawn_local(async move {
        load::<Snippet>(ctx, store).await;
        load::<Bookmark>(ctx, store).await;
    });

    let panel_class = move |tab: PopupTab| {
        move || if store.active_tab().get() == tab { "tabcontent active" } else { "tabcontent" }
    };

    view! {
        <div class="popup" on:click=move |_| store_close_menu(&store)>
            <h1>"Rapid Copy"</h1>
            <TabBar />

            // Both panels stay mounted so a staged edit survives a tab switch
            <div class=panel_class(PopupTab::Data)>
                <SnippetPanel />
            </div>
            <div class=panel_class(PopupTab::Url)>
                <BookmarkPanel />
            </div>

            <NoticeToast />
        </div>
    }
}
