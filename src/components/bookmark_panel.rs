//! Bookmark Panel Component
//!
//! The "URL" tab. The bookmark form is always open: after a save or a
//! cancel it returns to create mode, prefilled with the active tab's title.

use leptos::html::{Input, Textarea};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rapid_copy_core::{project, Action, Bookmark, BookmarkDraft, Field, FormMode, FormState, Outcome, RecordKind};

use super::{BookmarkForm, MenuAction, RecordCard, SearchBox, TransferBar};
use crate::commands;
use crate::context::{dispatch, AppContext};
use crate::store::{use_popup_store, PopupStateStoreFields};

/// Title of the active tab, empty if it cannot be read
async fn active_title() -> String {
    match commands::active_tab().await {
        Ok(tab) => tab.title,
        Err(e) => {
            log::warn!("Failed to read active tab: {}", e);
            String::new()
        }
    }
}

#[component]
pub fn BookmarkPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_popup_store();

    let form_mode = RwSignal::new(None::<FormMode>);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let title_ref = NodeRef::<Input>::new();
    let description_ref = NodeRef::<Textarea>::new();

    let visible = Memo::new(move |_| project(&store.bookmarks().get(), &store.bookmark_search().get()));

    let fill = move |draft: BookmarkDraft| {
        title.set(draft.title);
        description.set(draft.description);
    };

    let settle = move |action: Action<Bookmark>| async move {
        match dispatch(ctx, store, action).await {
            Outcome::FormOpened { draft, .. } => fill(draft),
            Outcome::Invalid { field, .. } => {
                let focused = match field {
                    Field::Secondary => description_ref.get().map(|el| el.focus()),
                    _ => title_ref.get().map(|el| el.focus()),
                };
                if let Some(Err(e)) = focused {
                    log::debug!("Failed to focus field: {:?}", e);
                }
            }
            _ => {}
        }

        let dispatcher = ctx.bookmarks();
        if dispatcher.form_state().await == FormState::Idle {
            let prefill = BookmarkDraft::new(active_title().await, "", "");
            if let Outcome::FormOpened { draft, .. } = dispatcher.dispatch(Action::OpenCreate(prefill)).await {
                fill(draft);
            }
        }
        form_mode.set(match dispatcher.form_state().await {
            FormState::Open(mode) => Some(mode),
            FormState::Idle => None,
        });
    };
    let run = move |action: Action<Bookmark>| spawn_local(settle(action));

    // Open the create form for the current page
    run(Action::Cancel);

    let on_save = move |_: ()| {
        spawn_local(async move {
            let mut draft = BookmarkDraft::new(title.get_untracked(), description.get_untracked(), "");
            if form_mode.get_untracked() == Some(FormMode::Create) {
                match commands::active_tab().await {
                    Ok(tab) => draft.url = tab.url,
                    Err(e) => log::warn!("Failed to read active tab: {}", e),
                }
            }
            settle(Action::Save(draft)).await;
        });
    };

    // Cancelling a new bookmark clears it; cancelling an edit returns to the current page
    let on_cancel = move |_: ()| match form_mode.get_untracked() {
        Some(FormMode::Edit(_)) => run(Action::Cancel),
        _ => run(Action::OpenCreate(BookmarkDraft::default())),
    };

    let on_export = move |_: ()| {
        spawn_local(async move {
            let text = ctx.bookmarks().export().await;
            if let Err(e) = commands::download_json(&ctx.export_file(RecordKind::Bookmark), &text) {
                log::error!("Failed to export bookmarks: {}", e);
            }
        });
    };

    let visit = move |url: String| {
        spawn_local(async move {
            if let Err(e) = commands::open_tab(&url).await {
                log::error!("Failed to open {}: {}", url, e);
            }
        });
    };

    view! {
        <div class="panel">
            <BookmarkForm
                title=title
                description=description
                title_ref=title_ref
                description_ref=description_ref
                editing=Signal::derive(move || matches!(form_mode.get(), Some(FormMode::Edit(_))))
                on_save=on_save
                on_cancel=on_cancel
            />

            <SearchBox
                value=Signal::derive(move || store.bookmark_search().get())
                on_input=move |term: String| store.bookmark_search().set(term)
                placeholder="Search bookmarks..."
            />

            <div class="data-container">
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-state-icon">"🔗"</div>
                            <p>"No bookmarks yet. Save the current page to create your first bookmark."</p>
                        </div>
                    }
                >
                    <For
                        each=move || visible.get()
                        key=|b: &Bookmark| (b.id, b.is_pinned, b.title.clone(), b.description.clone(), b.url.clone())
                        children=move |b: Bookmark| {
                            let id = b.id;
                            let url = b.url.clone();
                            let body = if b.description.is_empty() {
                                "No description".to_string()
                            } else {
                                b.description.clone()
                            };
                            view! {
                                <RecordCard
                                    id=id
                                    title=b.title.clone()
                                    body=body
                                    pinned=b.is_pinned
                                    archived=None
                                    primary_label="Visit"
                                    on_primary=move |_: ()| visit(url.clone())
                                    on_menu=move |action: MenuAction| run(action.into_action(id))
                                    copy_label="🔗 Copy URL"
                                />
                            }
                        }
                    />
                </Show>
            </div>

            <TransferBar
                on_export=on_export
                on_import=move |text: String| run(Action::Import(text))
            />
        </div>
    }
}
