//! Clipboard access for the copy button
//!
//! Wraps `navigator.clipboard.writeText` from the Web Clipboard API.

use wasm_bindgen::JsValue;

/// Write `text` to the system clipboard, unchanged.
///
/// # Returns
/// * `Ok(())` once the browser resolved the write
/// * `Err(JsValue)` if there is no window or the browser rejected the write
///   (e.g. no user activation or denied permission)
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}
