//! Reads the browser facts the capability model needs.

use folio_core::Capabilities;
use js_sys::Reflect;

use crate::utils::dom;

/// `navigator.connection.effectiveType`, where supported.
fn effective_connection_type() -> Option<String> {
    let navigator = dom::window()?.navigator();
    let connection = Reflect::get(&navigator, &"connection".into()).ok()?;
    if connection.is_undefined() || connection.is_null() {
        return None;
    }
    Reflect::get(&connection, &"effectiveType".into())
        .ok()?
        .as_string()
}

/// Resolve capabilities once from the current browser.
pub fn detect() -> Capabilities {
    let user_agent = dom::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    let effective_type = effective_connection_type();
    Capabilities::detect(&user_agent, effective_type.as_deref())
}
