//! Site header with section links.
//!
//! Links are plain anchors; the navigation interceptor turns clicks on them
//! into animated route changes.

use folio_core::AppRoute;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::SITE_NAME;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

const SECTIONS: [(&str, &str); 3] = [("/", "Home"), ("/projects", "Projects"), ("/memos", "Memos")];

#[component]
pub fn NavHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let displayed = ctx.transition.displayed_path();
    let section = Memo::new(move |_| AppRoute::from_path(&displayed.get()).section());

    view! {
        <header class=css::header>
            <a class=css::brand href="/">{SITE_NAME}</a>
            <nav class=css::links>
                {SECTIONS
                    .into_iter()
                    .map(|(path, label)| {
                        let class = move || {
                            if section.get() == Some(path) { css::linkActive } else { css::link }
                        };
                        view! { <a class=class href=path>{label}</a> }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
