//! Browser Tabs
//!
//! Reads the active tab for new bookmarks and opens bookmarked pages.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::{global_has, js_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn tabs_query(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = create)]
    async fn tabs_create(properties: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TabInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl TabInfo {
    /// Stand-in used when the popup runs outside an extension
    fn sample() -> Self {
        Self {
            title: "Sample Page".to_string(),
            url: "https://example.com".to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActiveTabQuery {
    active: bool,
    current_window: bool,
}

#[derive(Serialize)]
struct CreateTabArgs<'a> {
    url: &'a str,
}

/// The focused tab of the current window
pub async fn active_tab() -> Result<TabInfo, String> {
    if !global_has(&["chrome", "tabs"]) {
        return Ok(TabInfo::sample());
    }
    let query = serde_wasm_bindgen::to_value(&ActiveTabQuery {
        active: true,
        current_window: true,
    })
    .map_err(|e| e.to_string())?;
    let result = tabs_query(query).await.map_err(js_error)?;
    let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    tabs.into_iter().next().ok_or_else(|| "no active tab".to_string())
}

/// Open `url` in a new tab
pub async fn open_tab(url: &str) -> Result<(), String> {
    if global_has(&["chrome", "tabs"]) {
        let args = serde_wasm_bindgen::to_value(&CreateTabArgs { url }).map_err(|e| e.to_string())?;
        tabs_create(args).await.map_err(js_error)?;
        return Ok(());
    }
    web_sys::window()
        .ok_or("no window")?
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error)?;
    Ok(())
}
