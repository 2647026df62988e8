//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuExternalLink as ExternalLink, LuLogIn as Login,
        LuLogOut as Logout, LuMusic as Music, LuPause as Pause, LuPlay as Play,
        LuSkipBack as SkipBack, LuSkipForward as SkipForward,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsBoxArrowInRight as Login, BsBoxArrowRight as Logout,
        BsBoxArrowUpRight as ExternalLink, BsMusicNoteBeamed as Music, BsPauseFill as Pause,
        BsPlayFill as Play, BsSkipBackwardFill as SkipBack, BsSkipForwardFill as SkipForward,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(SKIP_BACK, SkipBack);
themed_icon!(SKIP_FORWARD, SkipForward);
themed_icon!(MUSIC, Music);
themed_icon!(LOGIN, Login);
themed_icon!(LOGOUT, Logout);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(ARROW_LEFT, ArrowLeft);
