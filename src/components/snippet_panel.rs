//! Snippet Panel Component
//!
//! The "Data" tab: add form, search, snippet cards and transfer bar.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rapid_copy_core::{project, Action, Field, FormState, Outcome, RecordKind, Snippet, SnippetDraft};

use super::{MenuAction, RecordCard, SearchBox, SnippetForm, TransferBar};
use crate::commands;
use crate::context::{dispatch, AppContext};
use crate::store::{use_popup_store, PopupStateStoreFields};

#[component]
pub fn SnippetPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_popup_store();

    let form_open = RwSignal::new(false);
    let key = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());
    let key_ref = NodeRef::<Input>::new();
    let value_ref = NodeRef::<Input>::new();

    let visible = Memo::new(move |_| project(&store.snippets().get(), &store.snippet_search().get()));

    // Dispatch, then mirror the dispatcher's form state into the view
    let settle = move |action: Action<Snippet>| async move {
        match dispatch(ctx, store, action).await {
            Outcome::FormOpened { draft, .. } => {
                key.set(draft.key);
                value.set(draft.value);
            }
            Outcome::Invalid { field, .. } => {
                let target = match field {
                    Field::Secondary => value_ref.get(),
                    _ => key_ref.get(),
                };
                if let Some(input) = target {
                    let _ = input.focus();
                }
            }
            _ => {}
        }
        let state = ctx.snippets().form_state().await;
        form_open.set(matches!(state, FormState::Open(_)));
    };
    let run = move |action: Action<Snippet>| spawn_local(settle(action));

    let on_save = move |_: ()| run(Action::Save(SnippetDraft::new(key.get_untracked(), value.get_untracked())));

    let on_export = move |_: ()| {
        spawn_local(async move {
            let text = ctx.snippets().export().await;
            if let Err(e) = commands::download_json(&ctx.export_file(RecordKind::Snippet), &text) {
                log::error!("Failed to export snippets: {}", e);
            }
        });
    };

    view! {
        <div class="panel">
            <div class="panel-header">
                <button class="btn" on:click=move |_| run(Action::OpenCreate(SnippetDraft::default()))>
                    "Add"
                </button>
                <SearchBox
                    value=Signal::derive(move || store.snippet_search().get())
                    on_input=move |term: String| store.snippet_search().set(term)
                    placeholder="Search data..."
                />
            </div>

            <Show when=move || form_open.get()>
                <SnippetForm
                    key=key
                    value=value
                    key_ref=key_ref
                    value_ref=value_ref
                    on_save=on_save
                    on_cancel=move |_: ()| run(Action::Cancel)
                />
            </Show>

            <div class="data-container">
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-state-icon">"📦"</div>
                            <p>"No data items yet. Click \"Add\" to create your first entry."</p>
                        </div>
                    }
                >
                    <For
                        each=move || visible.get()
                        key=|s: &Snippet| (s.id, s.is_pinned, s.status.as_str(), s.key.clone(), s.value.clone())
                        children=move |s: Snippet| {
                            let id = s.id;
                            view! {
                                <RecordCard
                                    id=id
                                    title=s.key.clone()
                                    body=s.value.clone()
                                    pinned=s.is_pinned
                                    archived=Some(s.status.is_archived())
                                    primary_label="Copy"
                                    on_primary=move |_: ()| run(Action::Copy(id))
                                    on_menu=move |action: MenuAction| run(action.into_action(id))
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
