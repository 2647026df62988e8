//! Fallback page for unknown paths.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::heading>"404"</h1>
            <p class=css::lead>"Nothing lives at "<code>{path}</code>"."</p>
            <a href="/">"Back home"</a>
        </section>
    }
}
