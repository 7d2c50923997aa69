//! Search Box Component

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
