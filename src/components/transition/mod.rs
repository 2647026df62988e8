//! Transition overlay.
//!
//! Owns the [`TransitionCoordinator`] and the timers that drive it. A path
//! change starts a sweep; each step of the sweep is a cancellable timeout,
//! and starting a newer sweep drops (cancels) the timers of the old one.

use folio_core::transition::{OverlayFrame, overlay_frame};
use folio_core::{Direction, NavigationCause, Sweep, TransitionCoordinator, TransitionStage};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::config::{REDUCED_MOTION_QUERY, TRANSITION_START_EVENT};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/transition/transition.module.css");

/// Reactive view of the transition coordinator.
///
/// Signals mirror the coordinator after every accepted step, so views never
/// borrow the coordinator itself.
#[derive(Clone, Copy)]
pub struct TransitionState {
    coordinator: StoredValue<TransitionCoordinator>,
    timers: StoredValue<Vec<Timeout>, LocalStorage>,
    stage: RwSignal<TransitionStage>,
    direction: RwSignal<Direction>,
    displayed: RwSignal<String>,
}

impl TransitionState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            coordinator: StoredValue::new(TransitionCoordinator::new(initial_path)),
            timers: StoredValue::new_local(Vec::new()),
            stage: RwSignal::new(TransitionStage::Idle),
            direction: RwSignal::new(Direction::Forward),
            displayed: RwSignal::new(initial_path.to_string()),
        }
    }

    /// Path whose page is currently rendered.
    pub fn displayed_path(&self) -> ReadSignal<String> {
        self.displayed.read_only()
    }

    /// Current overlay transform.
    pub fn frame(&self) -> Signal<OverlayFrame> {
        let (direction, stage) = (self.direction, self.stage);
        Signal::derive(move || overlay_frame(direction.get(), stage.get()))
    }

    fn sync(&self) {
        self.coordinator.with_value(|c| {
            self.stage.set(c.stage());
            self.direction.set(c.direction());
            if self.displayed.get_untracked() != c.displayed_path() {
                self.displayed.set(c.displayed_path().to_string());
            }
        });
    }

    /// Transition-start signal from the interceptor.
    pub fn start(&self) {
        if self
            .coordinator
            .try_update_value(|c| c.on_transition_start())
            .unwrap_or(false)
        {
            self.sync();
        }
    }

    /// Path change from the router.
    pub fn navigate(&self, path: &str, cause: NavigationCause, reduced_motion: bool) {
        let Some(sweep) = self
            .coordinator
            .try_update_value(|c| c.on_navigation(path, cause))
            .flatten()
        else {
            return;
        };

        // Dropping a Timeout cancels it.
        self.timers.update_value(|timers| timers.clear());

        if reduced_motion {
            self.coordinator.update_value(|c| c.complete(sweep));
            self.sync();
        } else {
            self.schedule(sweep);
        }
    }

    fn schedule(&self, sweep: Sweep) {
        let state = *self;
        let timers = sweep
            .schedule()
            .map(|(delay, step)| {
                Timeout::new(delay, move || {
                    let applied = state
                        .coordinator
                        .try_update_value(|c| c.apply(sweep.generation, step))
                        .unwrap_or(false);
                    if applied {
                        state.sync();
                    }
                })
            })
            .collect::<Vec<_>>();
        self.timers.set_value(timers);
    }
}

/// Full-viewport overlay that sweeps across the page on navigation.
///
/// Also wires the coordinator to its inputs: the transition-start window
/// event and the router's location signal.
#[component]
pub fn TransitionOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transition = ctx.transition;
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    dom::on_window_event(TRANSITION_START_EVENT, move |_| transition.start());

    let location = ctx.router.location();
    Effect::new(move |_| {
        let location = location.get();
        transition.navigate(
            &location.path,
            location.cause,
            reduced_motion.get_untracked(),
        );
    });

    let frame = transition.frame();
    let class = move || {
        if frame.get().animated {
            format!("{} {}", css::overlay, css::animated)
        } else {
            css::overlay.to_string()
        }
    };

    view! {
        <Show when=move || !reduced_motion.get()>
            <div class=class style:transform=move || frame.get().transform() aria-hidden="true" />
        </Show>
    }
}
