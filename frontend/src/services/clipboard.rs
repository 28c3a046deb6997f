//! Clipboard bridge.
//!
//! Writes are fire-and-forget: the caller shows its confirmation right away
//! and a rejected write is only logged.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult};

/// Start a `navigator.clipboard.writeText(text)` call.
pub fn copy_to_clipboard(text: &str) {
    match write_text(text) {
        Ok(promise) => {
            leptos::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Clipboard write rejected: {:?}", e);
                }
            });
        }
        Err(e) => log::warn!("{}", e),
    }
}

fn write_text(text: &str) -> AppResult<js_sys::Promise> {
    let navigator = gloo_utils::window().navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| AppError::Clipboard("navigator.clipboard is not available".to_string()))?;

    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| AppError::Clipboard("clipboard.writeText is not a function".to_string()))?;

    let result = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?;

    result
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".to_string()))
}
