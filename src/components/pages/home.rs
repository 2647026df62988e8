//! Landing page.

use folio_core::{Capabilities, MediaPolicy};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{INTRO_POSTER, INTRO_VIDEO_KEY, SITE_TAGLINE, VIDEO_API};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Background loop, loaded according to the browser's media policy.
#[component]
fn IntroVideo(capabilities: Capabilities) -> impl IntoView {
    let policy = capabilities.media_policy();
    let src = format!("{}/{}", VIDEO_API, INTRO_VIDEO_KEY);

    match policy {
        MediaPolicy::PosterOnly => view! {
            <img class=css::backdrop src=INTRO_POSTER alt="" />
        }
        .into_any(),
        _ => view! {
            <video
                class=css::backdrop
                src=src
                poster=INTRO_POSTER
                preload=policy.preload()
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            />
        }
        .into_any(),
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::hero>
            <IntroVideo capabilities=ctx.capabilities />
            <div class=css::heroText>
                <h1 class=css::heading>"Hi, I build things."</h1>
                <p class=css::lead>{SITE_TAGLINE}</p>
                <p class=css::lead>
                    "Have a look at my "<a href="/projects">"projects"</a>
                    " or read a "<a href="/memos">"memo"</a>"."
                </p>
            </div>
        </section>
    }
}
