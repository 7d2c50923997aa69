//! Bookmark Form Component
//!
//! Title and description for the current page. The URL is read from the
//! active tab at save time, so it is not an input.

use leptos::html::{Input, Textarea};
use leptos::prelude::*;

#[component]
pub fn BookmarkForm(
    title: RwSignal<String>,
    description: RwSignal<String>,
    title_ref: NodeRef<Input>,
    description_ref: NodeRef<Textarea>,
    /// True while an existing bookmark is staged for editing
    #[prop(into)]
    editing: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="input-form bookmark-form">
            <input
                type="text"
                placeholder="Bookmark title..."
                node_ref=title_ref
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description..."
                node_ref=description_ref
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <div class="form-actions">
                <button class="btn secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button class="btn" on:click=move |_| on_save.run(())>
                    {move || if editing.get() { "Update Bookmark" } else { "Save Bookmark" }}
                </button>
            </div>
        </div>
    }
}
