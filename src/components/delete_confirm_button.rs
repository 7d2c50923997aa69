//! Delete Confirm Item Component
//!
//! Dropdown entry that asks once before deleting.

use leptos::prelude::*;

/// Inline delete confirmation inside a dropdown menu
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with ✓/✗ buttons.
#[component]
pub fn DeleteConfirmItem(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <div
                class="dropdown-item danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "🗑️ Delete"
            </div>
        </Show>
        <Show when=move || confirm_delete.get()>
            <div class="dropdown-item danger delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </div>
        </Show>
    }
}
