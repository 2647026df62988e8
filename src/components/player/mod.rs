//! Music player.
//!
//! - [`PlayerContext`] - Reactive wrapper around the playback bridge
//! - [`widget`] - Embedded video widget backend (postMessage)
//! - [`sdk`] - Audio provider SDK backend
//! - [`MusicPlayer`] - Player panel UI

pub mod sdk;
mod view;
pub mod widget;

use std::rc::Rc;

use folio_core::{Handover, PlaybackBridge, Player, PlayerCommand, PlayerState, Track, handover};
use leptos::prelude::*;

use crate::config::VIDEOS;
use crate::core::spotify;
use crate::utils::dom;

pub use view::MusicPlayer;

/// Which backend is producing sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Embedded video widget over the built-in video list.
    Widget,
    /// Audio provider SDK over the fetched playlist.
    Sdk,
}

/// Display data for one playlist entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub title: String,
    pub artist: String,
    pub image_url: Option<String>,
}

/// Player state shared through [`AppContext`](crate::app::AppContext).
///
/// All transport goes through the bridge, which is the only writer of
/// selection and playing state; signals mirror it for the views.
#[derive(Clone, Copy)]
pub struct PlayerContext {
    bridge: StoredValue<PlaybackBridge>,
    active: StoredValue<Option<Rc<dyn Player>>, LocalStorage>,
    widget: StoredValue<Option<Rc<dyn Player>>, LocalStorage>,
    sdk: StoredValue<Option<Rc<sdk::SdkPlayer>>, LocalStorage>,
    pub index: RwSignal<usize>,
    pub playing: RwSignal<bool>,
    pub backend: RwSignal<Backend>,
    pub tracks: RwSignal<Vec<Track>>,
    /// Access token while logged in to the audio provider.
    pub token: RwSignal<Option<String>>,
}

impl PlayerContext {
    pub fn new() -> Self {
        Self {
            bridge: StoredValue::new(PlaybackBridge::new(VIDEOS.len())),
            active: StoredValue::new_local(None),
            widget: StoredValue::new_local(None),
            sdk: StoredValue::new_local(None),
            index: RwSignal::new(0),
            playing: RwSignal::new(false),
            backend: RwSignal::new(Backend::Widget),
            tracks: RwSignal::new(Vec::new()),
            token: RwSignal::new(spotify::stored_token()),
        }
    }

    /// Entries of the active list.
    pub fn items(&self) -> Signal<Vec<Item>> {
        let (backend, tracks) = (self.backend, self.tracks);
        Signal::derive(move || match backend.get() {
            Backend::Widget => VIDEOS
                .iter()
                .map(|v| Item {
                    title: v.title.to_string(),
                    artist: v.artist.to_string(),
                    image_url: None,
                })
                .collect(),
            Backend::Sdk => tracks.with(|tracks| {
                tracks
                    .iter()
                    .map(|t| Item {
                        title: t.title.clone(),
                        artist: t.artist.clone(),
                        image_url: t.image_url.clone(),
                    })
                    .collect()
            }),
        })
    }

    fn sync(&self) {
        self.bridge.with_value(|b| {
            self.index.set(b.index());
            self.playing.set(b.is_playing());
        });
    }

    fn dispatch(&self, commands: &[PlayerCommand]) {
        if commands.is_empty() {
            return;
        }
        if let Some(player) = self.active.get_value() {
            player.dispatch(commands);
        }
    }

    fn run(&self, op: impl FnOnce(&mut PlaybackBridge, f64) -> Vec<PlayerCommand>) {
        let now = dom::now_ms();
        let commands = self
            .bridge
            .try_update_value(|b| op(b, now))
            .unwrap_or_default();
        self.dispatch(&commands);
        self.sync();
    }

    pub fn next(&self) {
        self.run(|b, now| b.next(now));
    }

    pub fn previous(&self) {
        self.run(|b, now| b.previous(now));
    }

    pub fn toggle(&self) {
        self.run(|b, now| b.toggle(now));
    }

    pub fn select(&self, index: usize) {
        self.run(|b, now| b.select(index, now));
    }

    /// Notification from the active backend.
    pub fn on_state(&self, state: PlayerState) {
        self.run(|b, now| b.on_player_state(state, now));
    }

    /// Make `player` the active backend over a list of `len` items.
    ///
    /// Re-attaching the active player changes nothing, and a new instance of
    /// the active backend picks up the current selection.
    fn attach(&self, player: Rc<dyn Player>, backend: Backend, len: usize) {
        let previous = self.active.get_value();
        let same_instance = previous.as_ref().is_some_and(|p| Rc::ptr_eq(p, &player));
        let same_len = self.bridge.with_value(|b| b.len() == len);
        let active = previous.as_ref().map(|_| self.backend.get_untracked());

        match handover(active, backend, same_instance, same_len) {
            Handover::Unchanged => return,
            Handover::Rebind => {
                let commands = self
                    .bridge
                    .try_update_value(|b| b.restore(dom::now_ms()))
                    .unwrap_or_default();
                player.dispatch(&commands);
            }
            Handover::Switch => {
                if let Some(previous) = previous {
                    previous.pause();
                }
                self.bridge.update_value(|b| b.reset(len));
                player.load(0, false);
            }
        }
        self.active.set_value(Some(player));
        self.backend.set(backend);
        self.sync();
    }

    /// Whether `player` is the SDK player currently producing sound.
    pub fn is_active_sdk(&self, player: &Rc<sdk::SdkPlayer>) -> bool {
        self.backend.get_untracked() == Backend::Sdk
            && self
                .sdk
                .with_value(|sdk| sdk.as_ref().is_some_and(|p| Rc::ptr_eq(p, player)))
    }

    /// Register the widget backend once its iframe has loaded.
    pub fn register_widget(&self, player: Rc<dyn Player>) {
        self.widget.set_value(Some(Rc::clone(&player)));
        if self.backend.get_untracked() == Backend::Widget {
            self.attach(player, Backend::Widget, VIDEOS.len());
        }
    }

    /// Switch to the SDK backend once its device is ready and the playlist
    /// is known.
    pub fn use_sdk(&self, player: Rc<sdk::SdkPlayer>, tracks: Vec<Track>) {
        let len = tracks.len();
        player.set_uris(tracks.iter().map(Track::uri).collect());
        self.tracks.set(tracks);
        self.sdk.set_value(Some(Rc::clone(&player)));
        self.attach(player, Backend::Sdk, len);
    }

    /// Log in with `token` and bring up the SDK backend.
    pub fn login(&self, token: String) {
        self.token.set(Some(token.clone()));
        sdk::connect(*self, token);
    }

    /// Drop the token and SDK player, falling back to the widget.
    pub fn logout(&self) {
        spotify::clear_token();
        self.token.set(None);
        if let Some(player) = self.sdk.get_value() {
            player.disconnect();
        }
        self.sdk.set_value(None);
        self.tracks.set(Vec::new());

        match self.widget.get_value() {
            Some(widget) => self.attach(widget, Backend::Widget, VIDEOS.len()),
            None => {
                self.active.set_value(None);
                self.bridge.update_value(|b| b.reset(VIDEOS.len()));
                self.backend.set(Backend::Widget);
                self.sync();
            }
        }
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new()
    }
}
