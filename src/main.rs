//! Rapid Copy Popup Entry Point

mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use rapid_copy_core::PopupConfig;

const CONFIG_JSON: &str = include_str!("../popup.config.json");

fn main() {
    console_error_panic_hook::set_once();
    // Everything is let through until the configured level is known
    let _ = console_log::init_with_level(log::Level::Trace);

    let config = PopupConfig::from_json_or_default(CONFIG_JSON);
    log::set_max_level(config.log_level().to_level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
