//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, CustomEvent, CustomEventInit, Document, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a localStorage entry.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a localStorage entry. Returns `false` if storage is unavailable.
pub fn storage_set(key: &str, value: &str) -> bool {
    local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
}

/// Remove a localStorage entry.
pub fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Monotonic milliseconds since page load, the clock for playback
/// suppression. Falls back to the wall clock where `performance` is missing.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current pathname (`/` when unavailable).
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Current query string, including the leading `?` when present.
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Current origin (`scheme://host:port`).
pub fn current_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Push a same-origin URL onto the session history.
pub fn push_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Replace the current history entry without adding a new one.
pub fn replace_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Full page navigation to an external URL.
pub fn redirect(url: &str) {
    if let Some(window) = window()
        && window.location().set_href(url).is_err()
    {
        web_sys::console::error_1(&format!("Failed to redirect to {}", url).into());
    }
}

// =============================================================================
// Events
// =============================================================================

/// Dispatch a `CustomEvent` with no detail on `window`.
pub fn dispatch_window_event(name: &str) {
    let Some(window) = window() else {
        return;
    };
    let init = CustomEventInit::new();
    init.set_bubbles(false);
    if let Ok(event) = CustomEvent::new_with_event_init_dict(name, &init) {
        let _ = window.dispatch_event(&event);
    }
}

/// Listen for `name` on `window` for the lifetime of the page.
///
/// # Note
/// The closure is intentionally leaked using `forget()` since this is a
/// single-page application where the listener should persist for the
/// entire lifetime of the page.
pub fn on_window_event(name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(window) = window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`on_window_event`], but on `document` in the capture phase.
pub fn on_document_capture(name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(document) = document() else {
        return;
    };
    let options = AddEventListenerOptions::new();
    options.set_capture(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}
