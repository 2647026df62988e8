//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Static content is loaded at compile time using `include_str!`.

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Project cards shown on the projects page.
pub const PROJECTS_TOML: &str = include_str!("../assets/content/projects.toml");

/// Memo index shown on the memos page.
pub const MEMOS_TOML: &str = include_str!("../assets/content/memos.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Site owner name displayed in the header.
pub const SITE_NAME: &str = "folio";

/// Tagline displayed on the home page.
pub const SITE_TAGLINE: &str = "Software engineer. Builds small tools, writes short memos.";

// =============================================================================
// Navigation & Transitions
// =============================================================================

/// Delay between an intercepted click and the actual route change.
pub const NAVIGATION_DELAY_MS: u32 = 300;

/// Window event dispatched when an intercepted click starts a transition.
pub const TRANSITION_START_EVENT: &str = "folio:transition-start";

/// Media query used to skip the overlay sweep.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// Same-origin playlist endpoint served by the proxy.
pub const PLAYLIST_API: &str = "/api/spotify/playlist";

/// Same-origin video endpoint prefix served by the proxy.
pub const VIDEO_API: &str = "/api/video";

/// Background loop on the home page (object key under [`VIDEO_API`]).
pub const INTRO_VIDEO_KEY: &str = "intro.mp4";

/// Poster shown while the intro video loads, or instead of it on slow links.
pub const INTRO_POSTER: &str = "/assets/images/intro-poster.jpg";

// =============================================================================
// Music Player
// =============================================================================

/// An entry of the built-in video playlist played through the embedded widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEntry {
    pub video_id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
}

/// Built-in playlist used until the audio provider is connected.
pub const VIDEOS: &[VideoEntry] = &[
    VideoEntry {
        video_id: "jfKfPfyJRdk",
        title: "lofi hip hop radio",
        artist: "Lofi Girl",
    },
    VideoEntry {
        video_id: "5qap5aO4i9A",
        title: "beats to sleep/chill to",
        artist: "Lofi Girl",
    },
    VideoEntry {
        video_id: "DWcJFNfaw9c",
        title: "Coffee Shop Radio",
        artist: "Chillhop Music",
    },
    VideoEntry {
        video_id: "lTRiuFIWV54",
        title: "Jazz Piano Radio",
        artist: "Cafe Music BGM",
    },
];

/// DOM id of the embedded widget iframe.
pub const WIDGET_FRAME_ID: &str = "folio-widget";

/// Name under which the SDK player registers as a device.
pub const SDK_PLAYER_NAME: &str = "folio web player";

/// Initial SDK player volume (0.0 - 1.0).
pub const SDK_PLAYER_VOLUME: f64 = 0.5;

// =============================================================================
// Audio Provider (Spotify)
// =============================================================================

/// Spotify endpoints and client configuration.
pub mod spotify {
    /// Public client id of the site's Spotify application.
    pub const CLIENT_ID: &str = "0d3f5c7e9a1b4c2d8e6f0a1b2c3d4e5f";

    /// Permissions requested at login.
    pub const SCOPES: &str =
        "streaming user-read-email user-read-private user-read-playback-state user-modify-playback-state";

    pub const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
    pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
    pub const PLAY_URL: &str = "https://api.spotify.com/v1/me/player/play";

    /// Playback SDK script.
    pub const SDK_URL: &str = "https://sdk.scdn.co/spotify-player.js";

    /// localStorage key for the PKCE verifier between redirect and callback.
    pub const VERIFIER_KEY: &str = "spotify_code_verifier";

    /// localStorage key for the access token.
    pub const TOKEN_KEY: &str = "spotify_access_token";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
