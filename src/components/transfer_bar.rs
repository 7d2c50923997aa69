//! Transfer Bar Component
//!
//! Export the list as a JSON download, or import one from a file.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rapid_copy_core::Notice;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn TransferBar(
    #[prop(into)] on_export: Callback<()>,
    #[prop(into)] on_import: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");

        spawn_local(async move {
            match commands::read_file_text(file).await {
                Ok(text) => on_import.run(text),
                Err(e) => {
                    log::error!("Failed to read import file: {}", e);
                    ctx.show_notice(Notice::error(format!("Import failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="transfer-bar">
            <button class="btn secondary" on:click=move |_| on_export.run(())>
                "Export"
            </button>
            <label class="btn secondary">
                "Import"
                <input type="file" accept=".json,application/json" style="display: none;" on:change=on_file />
            </label>
        </div>
    }
}
