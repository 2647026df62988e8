//! Proxy error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Client id or secret missing from the configuration.
    #[error("Spotify credentials are not configured")]
    MissingCredentials,
    /// Token exchange or playlist fetch failed.
    #[error("Spotify request failed: {0}")]
    Playlist(String),
    /// Video origin answered with a non-success status, or the key is invalid.
    #[error("video not found")]
    VideoNotFound,
    /// Video origin unreachable or too slow.
    #[error("video origin request failed: {0}")]
    Network(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials | Self::Playlist(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::VideoNotFound => (StatusCode::NOT_FOUND, "Video not found").into_response(),
            Self::Network(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
