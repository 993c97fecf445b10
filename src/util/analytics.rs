//! Optional analytics bridge.
//!
//! Events are forwarded to a global `gtag` function when the host page
//! ships one; without the script this logs at debug and does nothing.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Emit a page-view event for a completed navigation.
pub fn page_view(route: &str, title: &str) {
    let path = format!("/#/{route}");
    track("page_view", &[("page_title", title), ("page_path", &path)]);
}

/// Emit a named event with string parameters.
pub fn track(event: &str, params: &[(&str, &str)]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(hook) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = hook.dyn_ref::<Function>() else {
        log::debug!("analytics: no gtag global, dropping {event}");
        return;
    };

    let detail = Object::new();
    for (key, value) in params {
        let _ = Reflect::set(&detail, &JsValue::from_str(key), &JsValue::from_str(value));
    }

    if let Err(err) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event),
        &detail,
    ) {
        log::warn!("analytics: gtag call failed: {err:?}");
    }
}
