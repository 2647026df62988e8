//! Audio provider SDK backend.
//!
//! The SDK script is injected on demand. Once it calls the global ready hook
//! a `Spotify.Player` is constructed through Reflect, its events are wired to
//! the [`PlayerContext`], and playback of a specific track is started through
//! the Web API on the SDK's device.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::sdk::{SdkSnapshot, classify};
use folio_core::Player;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlScriptElement;
use leptos::prelude::GetUntracked;

use super::{Backend, PlayerContext};
use crate::config::spotify::SDK_URL;
use crate::config::{SDK_PLAYER_NAME, SDK_PLAYER_VOLUME};
use crate::core::error::PlayerError;
use crate::core::spotify;
use crate::utils::dom;

/// Global the SDK calls once it has loaded.
const READY_HOOK: &str = "onSpotifyWebPlaybackSDKReady";

/// SDK events that only need to be reported.
const REPORTED_ERRORS: [&str; 3] = ["initialization_error", "account_error", "playback_error"];

struct SdkInner {
    handle: JsValue,
    token: String,
    device_id: Option<String>,
    uris: Vec<String>,
    current: usize,
    started: bool,
}

/// [`Player`] over a connected `Spotify.Player`.
pub struct SdkPlayer {
    inner: RefCell<SdkInner>,
}

impl SdkPlayer {
    fn new(handle: JsValue, token: String) -> Self {
        Self {
            inner: RefCell::new(SdkInner {
                handle,
                token,
                device_id: None,
                uris: Vec::new(),
                current: 0,
                started: false,
            }),
        }
    }

    /// Track URIs in playlist order.
    pub fn set_uris(&self, uris: Vec<String>) {
        self.inner.borrow_mut().uris = uris;
    }

    fn set_device(&self, device_id: Option<String>) {
        self.inner.borrow_mut().device_id = device_id;
    }

    pub fn disconnect(&self) {
        self.call("disconnect");
    }

    fn call(&self, method: &str) {
        let handle = self.inner.borrow().handle.clone();
        if let Err(e) = call_method(&handle, method) {
            web_sys::console::warn_1(&format!("SDK {}: {}", method, e).into());
        }
    }

    /// Start track `index` on our device through the Web API.
    fn start(&self, index: usize) {
        let (token, device_id, uri) = {
            let inner = self.inner.borrow();
            (
                inner.token.clone(),
                inner.device_id.clone(),
                inner.uris.get(index).cloned(),
            )
        };
        let (Some(device_id), Some(uri)) = (device_id, uri) else {
            web_sys::console::warn_1(&"SDK player not ready".into());
            return;
        };

        spawn_local(async move {
            if let Err(e) = spotify::start_playback(&token, &device_id, &uri).await {
                web_sys::console::error_1(&e.to_string().into());
            }
        });
    }
}

impl Player for SdkPlayer {
    fn load(&self, index: usize, autoplay: bool) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.current = index;
            inner.started = autoplay;
        }
        if autoplay {
            self.start(index);
        }
    }

    fn play(&self) {
        let (started, current) = {
            let mut inner = self.inner.borrow_mut();
            let started = inner.started;
            inner.started = true;
            (started, inner.current)
        };
        if started {
            self.call("resume");
        } else {
            self.start(current);
        }
    }

    fn pause(&self) {
        self.call("pause");
    }
}

fn call_method(target: &JsValue, method: &str) -> Result<JsValue, PlayerError> {
    let function = Reflect::get(target, &method.into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(PlayerError::SdkUnavailable)?;
    function
        .call0(target)
        .map_err(|_| PlayerError::SdkUnavailable)
}

/// `player.addListener(event, callback)`, keeping the callback alive.
fn add_listener(
    handle: &JsValue,
    event: &str,
    callback: impl FnMut(JsValue) + 'static,
) -> Result<(), PlayerError> {
    let add = Reflect::get(handle, &"addListener".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(PlayerError::SdkUnavailable)?;

    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(JsValue)>);
    add.call2(handle, &event.into(), closure.as_ref())
        .map_err(|_| PlayerError::SdkUnavailable)?;
    closure.forget();
    Ok(())
}

fn error_message(event: &JsValue) -> String {
    Reflect::get(event, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_default()
}

/// Construct and connect a `Spotify.Player`, wiring its events to `ctx`.
fn create_player(ctx: PlayerContext, token: String) -> Result<(), PlayerError> {
    let window = dom::window().ok_or(PlayerError::NoWindow)?;
    let constructor = Reflect::get(&window, &"Spotify".into())
        .and_then(|sdk| Reflect::get(&sdk, &"Player".into()))
        .ok()
        .and_then(|c| c.dyn_into::<Function>().ok())
        .ok_or(PlayerError::SdkUnavailable)?;

    let sdk_token = token.clone();
    let get_token = Closure::wrap(Box::new(move |callback: Function| {
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&sdk_token));
    }) as Box<dyn Fn(Function)>);

    let options = Object::new();
    for (key, value) in [
        ("name", JsValue::from_str(SDK_PLAYER_NAME)),
        ("getOAuthToken", get_token.as_ref().clone()),
        ("volume", JsValue::from_f64(SDK_PLAYER_VOLUME)),
    ] {
        Reflect::set(&options, &key.into(), &value).map_err(|_| PlayerError::SdkUnavailable)?;
    }
    get_token.forget();

    let handle = Reflect::construct(&constructor, &Array::of1(&options))
        .map_err(|_| PlayerError::SdkUnavailable)?;
    let player = Rc::new(SdkPlayer::new(handle.clone(), token));

    let ready_player = Rc::clone(&player);
    add_listener(&handle, "ready", move |event| {
        let device_id = Reflect::get(&event, &"device_id".into())
            .ok()
            .and_then(|d| d.as_string());
        web_sys::console::log_1(&format!("SDK ready: {:?}", device_id).into());
        ready_player.set_device(device_id);

        // reconnect of the device we already play on
        if ctx.is_active_sdk(&ready_player) {
            return;
        }

        let player = Rc::clone(&ready_player);
        spawn_local(async move {
            match spotify::fetch_playlist().await {
                Ok(tracks) => ctx.use_sdk(player, tracks),
                Err(e) => web_sys::console::error_1(&format!("playlist: {}", e).into()),
            }
        });
    })?;

    let offline_player = Rc::clone(&player);
    add_listener(&handle, "not_ready", move |_| {
        web_sys::console::warn_1(&"SDK device went offline".into());
        offline_player.set_device(None);
    })?;

    let mut previous: Option<SdkSnapshot> = None;
    add_listener(&handle, "player_state_changed", move |state| {
        if state.is_null() || state.is_undefined() {
            return;
        }
        match serde_wasm_bindgen::from_value::<SdkSnapshot>(state) {
            Ok(current) => {
                let reported = classify(previous.as_ref(), &current);
                previous = Some(current);
                if ctx.backend.get_untracked() == Backend::Sdk {
                    ctx.on_state(reported);
                }
            }
            Err(e) => web_sys::console::warn_1(&format!("SDK state: {}", e).into()),
        }
    })?;

    for kind in REPORTED_ERRORS {
        add_listener(&handle, kind, move |event| {
            let e = PlayerError::Sdk {
                kind: kind.to_string(),
                message: error_message(&event),
            };
            web_sys::console::error_1(&e.to_string().into());
        })?;
    }

    add_listener(&handle, "authentication_error", move |event| {
        let e = PlayerError::Sdk {
            kind: "authentication_error".to_string(),
            message: error_message(&event),
        };
        web_sys::console::error_1(&e.to_string().into());
        ctx.logout();
    })?;

    call_method(&handle, "connect")?;
    Ok(())
}

fn inject_script() -> Result<(), PlayerError> {
    let document = dom::document().ok_or(PlayerError::NoWindow)?;
    let selector = format!("script[src=\"{}\"]", SDK_URL);
    if document.query_selector(&selector).ok().flatten().is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")
        .ok()
        .and_then(|e| e.dyn_into::<HtmlScriptElement>().ok())
        .ok_or(PlayerError::SdkUnavailable)?;
    script.set_src(SDK_URL);
    script.set_async(true);

    let head = document.head().ok_or(PlayerError::NoWindow)?;
    head.append_child(&script)
        .map_err(|_| PlayerError::SdkUnavailable)?;
    Ok(())
}

/// Bring up the SDK backend for `token`.
///
/// Failures are logged; the widget backend stays active.
pub fn connect(ctx: PlayerContext, token: String) {
    let result = (|| {
        let window = dom::window().ok_or(PlayerError::NoWindow)?;
        let loaded = Reflect::has(&window, &"Spotify".into()).unwrap_or(false);
        if loaded {
            return create_player(ctx, token);
        }

        let ready = Closure::once_into_js(move || {
            if let Err(e) = create_player(ctx, token) {
                web_sys::console::error_1(&e.to_string().into());
            }
        });
        Reflect::set(&window, &READY_HOOK.into(), &ready)
            .map_err(|_| PlayerError::SdkUnavailable)?;
        inject_script()
    })();

    if let Err(e) = result {
        web_sys::console::error_1(&e.to_string().into());
    }
}
