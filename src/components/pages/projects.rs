//! Project cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::content;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn Projects() -> impl IntoView {
    let projects = content::projects();

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Projects"</h1>
            <ul class=css::cards>
                {projects
                    .into_iter()
                    .map(|project| {
                        let year = project.year.map(|y| y.to_string()).unwrap_or_default();
                        view! {
                            <li class=css::card>
                                <div class=css::cardHeader>
                                    <h2 class=css::cardTitle>{project.title}</h2>
                                    <span class=css::muted>{year}</span>
                                </div>
                                <p>{project.summary}</p>
                                <ul class=css::tags>
                                    {project.tags
                                        .into_iter()
                                        .map(|tag| view! { <li class=css::tag>{tag}</li> })
                                        .collect_view()}
                                </ul>
                                {project.url.map(|url| view! {
                                    <a class=css::external href=url target="_blank" rel="noopener noreferrer">
                                        "Source "<Icon icon=ic::EXTERNAL_LINK />
                                    </a>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
