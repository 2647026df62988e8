//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Playlist served when none is configured.
pub const DEFAULT_PLAYLIST_ID: &str = "37i9dQZF1DX0SM0LYsmbMT";

/// Upstream timeout for the video origin.
pub const DEFAULT_VIDEO_TIMEOUT_SECS: u64 = 10;

/// Proxy server for the folio site.
///
/// Serves the built site and the playlist/video proxy endpoints.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio-proxy", version)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "FOLIO_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Directory with the built site (index.html, wasm, assets).
    #[arg(long, env = "FOLIO_SITE_DIR", default_value = "dist")]
    pub site_dir: PathBuf,

    /// Audio provider client id for the client-credentials exchange.
    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    pub spotify_client_id: Option<String>,

    /// Audio provider client secret.
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    /// Playlist whose tracks the playlist endpoint serves.
    #[arg(long, env = "SPOTIFY_PLAYLIST_ID", default_value = DEFAULT_PLAYLIST_ID)]
    pub playlist_id: String,

    /// Object-storage base URL videos are fetched from.
    #[arg(long, env = "VIDEO_ORIGIN", default_value = "https://media.folio.example")]
    pub video_origin: String,

    /// Seconds before an upstream video request is abandoned.
    #[arg(long, env = "VIDEO_TIMEOUT_SECS", default_value_t = DEFAULT_VIDEO_TIMEOUT_SECS)]
    pub video_timeout_secs: u64,
}

impl Config {
    /// Client id and secret, when both are set and non-empty.
    pub fn spotify_credentials(&self) -> Option<(String, String)> {
        let id = self.spotify_client_id.as_deref().filter(|s| !s.is_empty())?;
        let secret = self
            .spotify_client_secret
            .as_deref()
            .filter(|s| !s.is_empty())?;
        Some((id.to_string(), secret.to_string()))
    }

    pub fn video_timeout(&self) -> Duration {
        Duration::from_secs(self.video_timeout_secs)
    }
}
