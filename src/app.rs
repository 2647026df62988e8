//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use folio_core::Capabilities;
use leptos::prelude::*;

use crate::components::player::{MusicPlayer, PlayerContext, sdk, widget};
use crate::components::{
    AppRouter, NavHeader, RouterState, TransitionOverlay, TransitionState, interceptor,
};
use crate::utils::{capability, dom};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Router**: URL location and the cause of its last change
/// - **Transition**: overlay stage and the path whose page is displayed
/// - **Player**: playback selection, backends, and provider login
/// - **Capabilities**: browser facts resolved once at startup
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, stored values,
/// or plain data.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub router: RouterState,
    pub transition: TransitionState,
    pub player: PlayerContext,
    pub capabilities: Capabilities,
}

impl AppContext {
    pub fn new() -> Self {
        let router = RouterState::new();
        let initial_path = dom::current_path();
        Self {
            router,
            transition: TransitionState::new(&initial_path),
            player: PlayerContext::new(),
            capabilities: capability::detect(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Installs the popstate, click, and widget message listeners
/// - Resumes the SDK backend when a token is already stored
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.router.listen_popstate();
    interceptor::install(ctx.router);
    widget::listen(ctx.player);
    if let Some(token) = ctx.player.token.get_untracked() {
        sdk::connect(ctx.player, token);
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::shell>
                <NavHeader />
                <main class=css::main>
                    <AppRouter />
                </main>
                // outside the router so playback survives page swaps
                <aside class=css::dock>
                    <MusicPlayer />
                </aside>
                <TransitionOverlay />
            </div>
        </ErrorBoundary>
    }
}
