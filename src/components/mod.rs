//! UI components built with Leptos.
//!
//! - [`router`] - History-based routing (main entry point)
//! - [`interceptor`] - Turns anchor clicks into animated navigations
//! - [`transition`] - Overlay sweep driven by the transition coordinator
//! - [`player`] - Music player context, backends, and panel
//! - [`nav`] - Site header
//! - [`pages`] - One component per route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod interceptor;
pub mod nav;
pub mod pages;
pub mod player;
pub mod router;
pub mod transition;

pub use nav::NavHeader;
pub use router::{AppRouter, RouterState};
pub use transition::{TransitionOverlay, TransitionState};
