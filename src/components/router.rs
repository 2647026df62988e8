//! Application router.
//!
//! Handles path-based routing with the History API. Uses a native popstate
//! listener instead of leptos_router so route changes can be delayed and
//! animated by the transition overlay.
//!
//! # Architecture
//!
//! - **The location signal follows the URL**: [`RouterState::push`] and
//!   popstate both update it, tagged with their [`NavigationCause`]
//! - **Pages follow the displayed path**: the transition coordinator decides
//!   when the new page replaces the old one

use folio_core::{AppRoute, NavigationCause};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::pages::{Callback, Home, MemoPage, Memos, NotFound, Projects};
use crate::utils::dom;

/// Most recent path change and what caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub cause: NavigationCause,
}

/// Client-side router state.
#[derive(Clone, Copy)]
pub struct RouterState {
    location: RwSignal<Location>,
}

impl RouterState {
    /// Creates a router at the current browser location.
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(Location {
                path: dom::current_path(),
                cause: NavigationCause::Push,
            }),
        }
    }

    /// Reactive current location.
    pub fn location(&self) -> ReadSignal<Location> {
        self.location.read_only()
    }

    /// Navigate to `url` (path plus optional query), adding a history entry.
    pub fn push(&self, url: &str) {
        dom::push_url(url);
        self.set(url, NavigationCause::Push);
    }

    /// Navigate to `url` replacing the current history entry.
    pub fn replace(&self, url: &str) {
        dom::replace_url(url);
        self.set(url, NavigationCause::Push);
    }

    fn set(&self, url: &str, cause: NavigationCause) {
        let path = url.split(['?', '#']).next().unwrap_or("/");
        self.location.set(Location {
            path: path.to_string(),
            cause,
        });
    }

    /// Follow browser back/forward for the lifetime of the page.
    pub fn listen_popstate(&self) {
        let location = self.location;
        dom::on_window_event("popstate", move |_| {
            location.set(Location {
                path: dom::current_path(),
                cause: NavigationCause::Pop,
            });
        });
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the page for the path the transition coordinator has on screen.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let displayed = ctx.transition.displayed_path();
    let route = Memo::new(move |_| AppRoute::from_path(&displayed.get()));

    move || match route.get() {
        AppRoute::Home => view! { <Home /> }.into_any(),
        AppRoute::Projects => view! { <Projects /> }.into_any(),
        AppRoute::Memos => view! { <Memos /> }.into_any(),
        AppRoute::Memo { slug } => view! { <MemoPage slug=slug /> }.into_any(),
        AppRoute::Callback => view! { <Callback /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
    }
}
