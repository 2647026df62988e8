//! Memo index and memo pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::NotFound;
use crate::components::icons as ic;
use crate::core::content;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn Memos() -> impl IntoView {
    let memos = content::memos();

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Memos"</h1>
            <ul class=css::memoList>
                {memos
                    .into_iter()
                    .map(|memo| {
                        let href = format!("/memos/{}", memo.slug);
                        view! {
                            <li class=css::memoItem>
                                <a href=href>{memo.title}</a>
                                <span class=css::muted>{memo.date}</span>
                                <p class=css::muted>{memo.summary}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// A single memo, rendered from markdown.
#[component]
pub fn MemoPage(slug: String) -> impl IntoView {
    let Some((entry, body)) = content::memo(&slug) else {
        return view! { <NotFound path=format!("/memos/{}", slug) /> }.into_any();
    };
    let html = markdown_to_html(body);

    view! {
        <article class=css::page>
            <a class=css::back href="/memos"><Icon icon=ic::ARROW_LEFT />" All memos"</a>
            <p class=css::muted>{entry.date}</p>
            <div class=css::prose inner_html=html />
        </article>
    }
    .into_any()
}
