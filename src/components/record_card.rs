//! Record Card Component
//!
//! One row of the list: text, a primary action button and a dropdown menu.

use leptos::prelude::*;
use rapid_copy_core::{Action, Record, RecordId};

use super::DeleteConfirmItem;
use crate::store::{store_close_menu, store_toggle_menu, use_popup_store, PopupStateStoreFields};

/// Entries of the card dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Pin,
    Edit,
    Duplicate,
    Archive,
    Copy,
    Delete,
}

impl MenuAction {
    pub fn into_action<R: Record>(self, id: RecordId) -> Action<R> {
        match self {
            MenuAction::Pin => Action::TogglePin(id),
            MenuAction::Edit => Action::OpenEdit(id),
            MenuAction::Duplicate => Action::Duplicate(id),
            MenuAction::Archive => Action::ToggleArchive(id),
            MenuAction::Copy => Action::Copy(id),
            MenuAction::Delete => Action::Delete(id),
        }
    }
}

#[component]
pub fn RecordCard(
    id: RecordId,
    title: String,
    body: String,
    pinned: bool,
    /// `Some` for kinds with an archive status
    archived: Option<bool>,
    #[prop(into)] primary_label: String,
    #[prop(into)] on_primary: Callback<()>,
    #[prop(into)] on_menu: Callback<MenuAction>,
    /// Label of an extra "copy" entry in the menu
    #[prop(optional)]
    copy_label: Option<&'static str>,
) -> impl IntoView {
    let store = use_popup_store();
    let is_archived = archived.unwrap_or(false);

    let mut card_class = String::from("data-item");
    if pinned {
        card_class.push_str(" pinned");
    }
    if is_archived {
        card_class.push_str(" archived");
    }

    let menu_open = move || store.open_menu().get() == Some(id);
    let pick = move |action: MenuAction| {
        store_close_menu(&store);
        on_menu.run(action);
    };

    view! {
        <div class=card_class>
            <div class="data-content">
                <div class="data-key">
                    {pinned.then_some("📌 ")}
                    {title}
                    {is_archived.then_some(" (Archived)")}
                </div>
                <div class="data-value">{body}</div>
            </div>
            <div class="data-actions">
                <button class="action-btn" on:click=move |_| on_primary.run(())>
                    {primary_label}
                </button>
                <div class=move || if menu_open() { "dropdown active" } else { "dropdown" }>
                    <button
                        class="dropdown-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_toggle_menu(&store, id);
                        }
                    >
                        "⋯"
                    </button>
                    <Show when=menu_open>
                        <div class="dropdown-content" on:click=|ev| ev.stop_propagation()>
                            <div class="dropdown-item" on:click=move |_| pick(MenuAction::Pin)>
                                {if pinned { "📌 Unpin" } else { "📌 Pin" }}
                            </div>
                            <div class="dropdown-item" on:click=move |_| pick(MenuAction::Edit)>
                                "✏️ Edit"
                            </div>
                            <div class="dropdown-item" on:click=move |_| pick(MenuAction::Duplicate)>
                                "📋 Duplicate"
                            </div>
                            {copy_label.map(|label| view! {
                                <div class="dropdown-item" on:click=move |_| pick(MenuAction::Copy)>
                                    {label}
                                </div>
                            })}
                            {archived.map(|archived| view! {
                                <div class="dropdown-item" on:click=move |_| pick(MenuAction::Archive)>
                                    {if archived { "📤 Unarchive" } else { "📦 Archive" }}
                                </div>
                            })}
                            <DeleteConfirmItem on_confirm=move |_: ()| pick(MenuAction::Delete) />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
