//! Tab Bar Component
//!
//! Switches between the "Data" and "URL" panels.

use leptos::prelude::*;

use crate::store::{use_popup_store, PopupStateStoreFields, PopupTab};

const TABS: &[(PopupTab, &str)] = &[(PopupTab::Data, "Data"), (PopupTab::Url, "URL")];

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_popup_store();

    view! {
        <div class="tab">
            {TABS.iter().map(|&(tab, label)| {
                let is_active = move || store.active_tab().get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tablinks active" } else { "tablinks" }
                        on:click=move |_| store.active_tab().set(tab)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
