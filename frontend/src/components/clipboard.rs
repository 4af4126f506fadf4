use log::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Reflect;

/// Best-effort clipboard write. Failures are logged and otherwise ignored;
/// the caller shows its "copied" feedback either way.
pub fn copy_text(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    // Insecure origins have no `navigator.clipboard` at all.
    let available = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined())
        .unwrap_or(false);
    if !available {
        warn!("clipboard unavailable, skipping copy");
        return;
    }
    let promise = navigator.clipboard().write_text(text);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            warn!("clipboard write failed: {:?}", err);
        }
    });
}
