//! Custom error types for the site.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`AuthError`] - Audio-provider login (PKCE) failures
//! - [`PlayerError`] - Playback backend setup and command failures

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Audio-provider login errors.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// localStorage not available.
    StorageUnavailable,
    /// Callback reached without a stored verifier.
    MissingVerifier,
    /// Callback carried neither `code` nor `error`.
    MissingCode,
    /// Provider redirected back with an `error` parameter.
    Denied(String),
    /// PKCE helper failure (randomness, verifier shape).
    Pkce(String),
    /// Token exchange failed.
    Exchange(FetchError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::MissingVerifier => write!(f, "no login in progress"),
            Self::MissingCode => write!(f, "authorization code missing from callback"),
            Self::Denied(reason) => write!(f, "login denied: {}", reason),
            Self::Pkce(msg) => write!(f, "PKCE error: {}", msg),
            Self::Exchange(e) => write!(f, "token exchange failed: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<folio_core::PkceError> for AuthError {
    fn from(e: folio_core::PkceError) -> Self {
        Self::Pkce(e.to_string())
    }
}

/// Playback backend errors.
#[derive(Debug, Clone)]
pub enum PlayerError {
    /// Browser window or document not available
    NoWindow,
    /// SDK script could not be injected or its globals are missing.
    SdkUnavailable,
    /// SDK reported an initialization, account, or playback error.
    Sdk { kind: String, message: String },
    /// Play request to the Web API failed.
    Command(FetchError),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::SdkUnavailable => write!(f, "playback SDK unavailable"),
            Self::Sdk { kind, message } => write!(f, "SDK {}: {}", kind, message),
            Self::Command(e) => write!(f, "player command failed: {}", e),
        }
    }
}

impl std::error::Error for PlayerError {}
