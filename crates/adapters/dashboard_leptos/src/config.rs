//! Reads the client configuration from the host page.
//!
//! `<html data-api-base="/some/prefix">` moves every `/api/*` call under that
//! prefix. Without the attribute the dashboard talks to its own origin.

use pkgtracker_app::config::ClientConfig;
use wasm_bindgen::JsCast;

/// Read `data-api-base` from the `<html>` element.
pub fn from_document() -> ClientConfig {
    let api_base = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.unchecked_into::<web_sys::HtmlElement>().dataset().get("apiBase"));
    ClientConfig::new(api_base.as_deref())
}
