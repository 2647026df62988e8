//! Site-side services that talk to the browser or the network.
//!
//! - [`content`] - Compiled-in projects and memos
//! - [`spotify`] - Audio-provider login and Web API calls
//! - [`error`] - Error types surfaced to the console

pub mod content;
pub mod error;
pub mod spotify;
