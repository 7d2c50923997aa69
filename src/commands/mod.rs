//! Browser Commands
//!
//! Thin wrappers over the extension and web APIs the popup needs,
//! organized by concern. Wrappers return `Result<T, String>`; the
//! trait implementations convert those into core errors.

mod storage;
mod clipboard;
mod tabs;
mod files;

use wasm_bindgen::prelude::*;

pub use storage::{detect_backend, ExtensionStorage, LocalStorage};
pub use clipboard::BrowserClipboard;
pub use tabs::{active_tab, open_tab, TabInfo};
pub use files::{download_json, read_file_text};

/// Walk `globalThis` along `path`; true if every step is defined
fn global_has(path: &[&str]) -> bool {
    let mut current: JsValue = js_sys::global().into();
    for part in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(part)).unwrap_or(JsValue::UNDEFINED);
        if current.is_undefined() || current.is_null() {
            return false;
        }
    }
    true
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
