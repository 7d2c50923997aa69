//! Clipboard
//!
//! `navigator.clipboard.writeText`, with the hidden-textarea
//! `execCommand("copy")` path as the fallback.

use async_trait::async_trait;
use rapid_copy_core::{ClipboardError, ClipboardPort};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::js_error;

pub struct BrowserClipboard;

fn legacy_copy(text: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let textarea = document
        .create_element("textarea")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| "not a textarea".to_string())?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("style", "position: fixed; opacity: 0;");
    body.append_child(&textarea).map_err(js_error)?;
    textarea.select();

    let copied = document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| "not an HTML document".to_string())
        .and_then(|doc| doc.exec_command("copy").map_err(js_error));
    let _ = body.remove_child(&textarea);

    match copied? {
        true => Ok(()),
        false => Err("copy command was refused".to_string()),
    }
}

#[async_trait(?Send)]
impl ClipboardPort for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or_else(|| ClipboardError::Unavailable("no window".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Denied(js_error(e)))
    }

    fn write_text_legacy(&self, text: &str) -> Result<(), ClipboardError> {
        legacy_copy(text).map_err(ClipboardError::Unavailable)
    }
}
