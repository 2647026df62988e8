//! Utility modules for browser and network operations.
//!
//! Provides:
//! - [`dom`] - Window, storage, history, and event helpers
//! - [`fetch_json`], [`post_form`], [`put_json`] - Network requests with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`capability`] - Browser capability detection

pub mod capability;
pub mod dom;
mod fetch;
mod markdown;

pub use fetch::{fetch_json, post_form, put_json};
pub use markdown::markdown_to_html;
