//! Browser Helpers
//!
//! Thin wrappers over `window` APIs the handlers need.

use js_sys::{Array, Date, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Document, HtmlAnchorElement, Url};

pub fn web_document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Blocking confirmation dialog; a missing window counts as "cancel"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!("[NAV] Failed to open {}: {:?}", url, e);
    }
}

/// Local date as `(day, month, year)`
pub fn today() -> (u32, u32, i32) {
    let now = Date::new_0();
    (now.get_date(), now.get_month() + 1, now.get_full_year() as i32)
}

/// Save bytes through a temporary `<a download>` and revoke its object URL
pub fn download_bytes(bytes: &[u8], filename: &str) -> Result<(), String> {
    let doc = web_document().ok_or("no document")?;
    let body = doc.body().ok_or("no body")?;

    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|e| format!("{:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor = doc
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    if let Err(e) = body.append_child(&anchor) {
        let _ = Url::revoke_object_url(&url);
        return Err(format!("{:?}", e));
    }
    anchor.click();
    anchor.remove();
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

/// True when the click landed on `element` itself rather than a descendant
pub fn is_self_click(ev: &web_sys::Event, element: &impl AsRef<JsValue>) -> bool {
    let element: &JsValue = element.as_ref();
    ev.target()
        .is_some_and(|target| AsRef::<JsValue>::as_ref(&target) == element)
}
