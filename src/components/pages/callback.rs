//! Audio-provider login callback.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::spotify;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Exchanges the authorization code, then returns home.
#[component]
pub fn Callback() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let search = dom::current_search();

    spawn_local(async move {
        match spotify::complete_login(&search).await {
            Ok(token) => ctx.player.login(token),
            Err(e) => web_sys::console::error_1(&format!("Spotify login: {}", e).into()),
        }
        ctx.router.replace("/");
    });

    view! {
        <section class=css::page>
            <p class=css::muted>"Connecting to Spotify..."</p>
        </section>
    }
}
