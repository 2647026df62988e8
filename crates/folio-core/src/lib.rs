//! Host-testable core of the folio site.
//!
//! Everything in here is plain Rust with no browser dependency, so the
//! behavior the site and the proxy rely on can be exercised with `cargo test`:
//!
//! - [`route`] - Application routes and the forward/backward heuristic
//! - [`transition`] - Page-transition state machine and sweep scheduling
//! - [`intercept`] - Decision whether an anchor click becomes a transition
//! - [`playback`] - Music player bridge and the [`Player`](playback::Player) capability
//! - [`iframe`] - Embedded video widget message codec
//! - [`sdk`] - Playback SDK state classification
//! - [`playlist`] - Playlist wire types shared with the proxy
//! - [`pkce`] - Proof-key-for-code-exchange helpers
//! - [`capability`] - Browser capability model and media policy

pub mod capability;
pub mod error;
pub mod iframe;
pub mod intercept;
pub mod pkce;
pub mod playback;
pub mod playlist;
pub mod route;
pub mod sdk;
pub mod transition;

pub use capability::{Capabilities, ConnectionSpeed, MediaPolicy};
pub use error::{MessageError, PkceError};
pub use intercept::{ClickModifiers, LinkTarget, intercept};
pub use playback::{Handover, PlaybackBridge, Player, PlayerCommand, PlayerState, handover};
pub use playlist::{ErrorBody, PlaylistResponse, Track};
pub use route::{AppRoute, Direction, ROUTE_ORDER, direction_between};
pub use transition::{
    NavigationCause, OverlayFrame, Step, Sweep, TransitionCoordinator, TransitionStage,
};
