//! Player panel.

use std::rc::Rc;

use folio_core::iframe::embed_url;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::Backend;
use super::widget::WidgetPlayer;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{VIDEOS, WIDGET_FRAME_ID};
use crate::core::spotify;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/player/player.module.css");

/// Music player panel: now playing, transport, queue, and provider login.
///
/// The widget iframe is always mounted; it becomes the active backend once
/// loaded unless the SDK backend has taken over.
#[component]
pub fn MusicPlayer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let player = ctx.player;
    let items = player.items();
    let current = Memo::new(move |_| items.with(|items| items.get(player.index.get()).cloned()));

    let frame_ref = NodeRef::<leptos::html::Iframe>::new();
    let widget_src = VIDEOS
        .first()
        .map(|v| embed_url(v.video_id, &dom::current_origin()))
        .unwrap_or_default();
    let on_frame_load = move |_: leptos::ev::Event| {
        if let Some(frame) = frame_ref.get_untracked() {
            let widget = WidgetPlayer::new(frame);
            widget.handshake();
            player.register_widget(Rc::new(widget));
        }
    };

    let login = move |_: MouseEvent| {
        if let Err(e) = spotify::begin_login() {
            web_sys::console::error_1(&e.to_string().into());
        }
    };
    let logout = move |_: MouseEvent| player.logout();

    let source_label = move || match player.backend.get() {
        Backend::Widget => "Radio",
        Backend::Sdk => "Spotify",
    };

    view! {
        <section class=css::player aria-label="Music player">
            <div class=css::nowPlaying>
                <span class=css::icon><Icon icon=ic::MUSIC /></span>
                {move || match current.get() {
                    Some(item) => view! {
                        {item.image_url.map(|src| view! { <img class=css::art src=src alt="" /> })}
                        <div class=css::meta>
                            <span class=css::title>{item.title}</span>
                            <span class=css::artist>{item.artist}</span>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class=css::meta>
                            <span class=css::title>"Nothing queued"</span>
                        </div>
                    }.into_any(),
                }}
                <span class=css::source>{source_label}</span>
            </div>

            <div class=css::controls>
                <button class=css::control title="Previous" on:click=move |_| player.previous()>
                    <Icon icon=ic::SKIP_BACK />
                </button>
                <button
                    class=css::controlPrimary
                    title=move || if player.playing.get() { "Pause" } else { "Play" }
                    on:click=move |_| player.toggle()
                >
                    {move || if player.playing.get() {
                        view! { <Icon icon=ic::PAUSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::PLAY /> }.into_any()
                    }}
                </button>
                <button class=css::control title="Next" on:click=move |_| player.next()>
                    <Icon icon=ic::SKIP_FORWARD />
                </button>
            </div>

            <ol class=css::queue>
                {move || items.get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let class = move || {
                            if player.index.get() == i { css::queueItemActive } else { css::queueItem }
                        };
                        view! {
                            <li class=class>
                                <button class=css::queueButton on:click=move |_| player.select(i)>
                                    <span class=css::title>{item.title}</span>
                                    <span class=css::artist>{item.artist}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
                }
            </ol>

            <div class=css::account>
                {move || if player.token.get().is_some() {
                    view! {
                        <button class=css::accountButton on:click=logout>
                            <Icon icon=ic::LOGOUT />
                            "Disconnect Spotify"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button class=css::accountButton on:click=login>
                            <Icon icon=ic::LOGIN />
                            "Connect Spotify"
                        </button>
                    }.into_any()
                }}
            </div>

            <iframe
                id=WIDGET_FRAME_ID
                class=css::widget
                node_ref=frame_ref
                src=widget_src
                title="Music widget"
                allow="autoplay; encrypted-media"
                on:load=on_frame_load
            />
        </section>
    }
}
