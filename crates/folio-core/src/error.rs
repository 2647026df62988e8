//! Error types for the core crate.
//!
//! - [`PkceError`] - verifier generation and validation
//! - [`MessageError`] - embedded player messages that could not be understood

use thiserror::Error;

/// Errors raised while preparing a PKCE authorization request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PkceError {
    /// The platform random source failed.
    #[error("random source unavailable: {0}")]
    RandomUnavailable(String),
    /// Verifier length is outside the 43..=128 range allowed by RFC 7636.
    #[error("code verifier must be 43 to 128 characters, got {0}")]
    InvalidVerifierLength(usize),
}

/// Errors raised while decoding a message from the embedded video widget.
///
/// Callers swallow these; they exist so the codec can be tested precisely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Message came from an origin we do not talk to.
    #[error("untrusted origin: {0}")]
    UntrustedOrigin(String),
    /// Payload was not valid JSON.
    #[error("malformed payload: {0}")]
    Malformed(String),
    /// Valid JSON, but not a state-change notification.
    #[error("not a state change")]
    NotStateChange,
    /// State code outside the widget's enumeration.
    #[error("unknown player state code: {0}")]
    UnknownState(i64),
}
