//! Navigation interceptor.
//!
//! Catches anchor clicks in the capture phase, before any element handler,
//! and turns qualifying ones into a delayed, animated route change.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ClickModifiers, LinkTarget, intercept};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, MouseEvent};

use crate::components::router::RouterState;
use crate::config::{NAVIGATION_DELAY_MS, TRANSITION_START_EVENT};
use crate::utils::dom;

/// Nearest anchor with an `href` at or above the event target.
fn anchor_for(event: &web_sys::Event) -> Option<HtmlAnchorElement> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target
        .closest("a[href]")
        .ok()
        .flatten()?
        .dyn_into::<HtmlAnchorElement>()
        .ok()
}

fn link_target(anchor: &HtmlAnchorElement) -> LinkTarget {
    LinkTarget {
        href: anchor.get_attribute("href").unwrap_or_default(),
        origin: anchor.origin(),
        pathname: anchor.pathname(),
        search: anchor.search(),
        hash: anchor.hash(),
        target: anchor.get_attribute("target"),
        download: anchor.has_attribute("download"),
    }
}

fn modifiers(event: &MouseEvent) -> ClickModifiers {
    ClickModifiers {
        button: event.button(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
    }
}

/// Install the document-level click interceptor.
///
/// Only one navigation is ever pending: a new qualifying click drops the
/// previous timer, so only the last click navigates.
pub fn install(router: RouterState) {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    dom::on_document_capture("click", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(anchor) = anchor_for(&event) else {
            return;
        };

        let link = link_target(&anchor);
        let Some(url) = intercept(
            &link,
            &dom::current_origin(),
            &dom::current_path(),
            modifiers(mouse),
        ) else {
            return;
        };

        event.prevent_default();
        event.stop_propagation();
        dom::dispatch_window_event(TRANSITION_START_EVENT);

        let timer = Timeout::new(NAVIGATION_DELAY_MS, move || router.push(&url));
        pending.borrow_mut().replace(timer);
    });
}
