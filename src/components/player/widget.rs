//! Embedded video widget backend.
//!
//! Commands go to the iframe as JSON strings through `postMessage`; state
//! changes come back as window `message` events from the widget's origin.

use folio_core::iframe::{
    WIDGET_ORIGIN, WidgetCommand, decode_state, is_widget_source, listening_message,
};
use folio_core::{MessageError, Player};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{HtmlIFrameElement, MessageEvent};
use leptos::prelude::GetUntracked;

use super::{Backend, PlayerContext};
use crate::config::{VIDEOS, WIDGET_FRAME_ID};
use crate::utils::dom;

/// [`Player`] over the widget iframe.
pub struct WidgetPlayer {
    frame: HtmlIFrameElement,
}

impl WidgetPlayer {
    pub fn new(frame: HtmlIFrameElement) -> Self {
        Self { frame }
    }

    fn post(&self, message: &str) {
        if let Some(target) = self.frame.content_window() {
            let _ = target.post_message(&JsValue::from_str(message), WIDGET_ORIGIN);
        }
    }

    fn send(&self, command: WidgetCommand<'_>) {
        self.post(&command.encode());
    }

    /// Ask the widget to start reporting state.
    pub fn handshake(&self) {
        self.post(&listening_message(WIDGET_FRAME_ID));
    }
}

impl Player for WidgetPlayer {
    fn load(&self, index: usize, autoplay: bool) {
        let Some(video) = VIDEOS.get(index) else {
            return;
        };
        let video_id = video.video_id;
        self.send(if autoplay {
            WidgetCommand::Load { video_id }
        } else {
            WidgetCommand::Cue { video_id }
        });
    }

    fn play(&self) {
        self.send(WidgetCommand::Play);
    }

    fn pause(&self) {
        self.send(WidgetCommand::Pause);
    }
}

/// Window of the mounted widget iframe.
fn widget_window() -> Option<JsValue> {
    dom::document()?
        .get_element_by_id(WIDGET_FRAME_ID)?
        .dyn_into::<HtmlIFrameElement>()
        .ok()?
        .content_window()
        .map(JsValue::from)
}

/// Route widget state messages to `ctx` for the lifetime of the page.
///
/// Only messages posted by our own iframe count. Other senders and
/// malformed payloads are dropped silently.
pub fn listen(ctx: PlayerContext) {
    dom::on_window_event("message", move |event| {
        let Some(message) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        if ctx.backend.get_untracked() != Backend::Widget {
            return;
        }
        let source = message.source().map(JsValue::from);
        if !is_widget_source(source.as_ref(), widget_window().as_ref()) {
            return;
        }
        let Some(data) = message.data().as_string() else {
            return;
        };

        match decode_state(&message.origin(), &data) {
            Ok(state) => ctx.on_state(state),
            Err(MessageError::UnknownState(code)) => {
                web_sys::console::log_1(&format!("widget state {} ignored", code).into());
            }
            Err(_) => {}
        }
    });
}
