//! Snippet Form Component
//!
//! Key/value inputs with Save and Cancel. Enter in either input saves.

use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn SnippetForm(
    key: RwSignal<String>,
    value: RwSignal<String>,
    key_ref: NodeRef<Input>,
    value_ref: NodeRef<Input>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    // Focus the key input once it is mounted
    Effect::new(move |_| {
        if let Some(input) = key_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            on_save.run(());
        }
    };

    view! {
        <div class="input-form">
            <input
                type="text"
                placeholder="Enter key..."
                node_ref=key_ref
                prop:value=move || key.get()
                on:input=move |ev| key.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <input
                type="text"
                placeholder="Enter value..."
                node_ref=value_ref
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class="form-actions">
                <button class="btn secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button class="btn" on:click=move |_| on_save.run(())>"Save"</button>
            </div>
        </div>
    }
}
