//! File Transfer
//!
//! Download a JSON document and read an uploaded file as text.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::js_error;

/// Object URLs outlive the click by this long so the download can start
const REVOKE_DELAY_MS: u32 = 1_000;

/// Offer `contents` for download as `file_name`
pub fn download_json(file_name: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&contents.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke download URL: {}", js_error(e));
        }
    })
    .forget();
    Ok(())
}

pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text()).await.map_err(js_error)?;
    text.as_string().ok_or_else(|| "file is not text".to_string())
}
