//! Page components, one per [`AppRoute`](folio_core::AppRoute).

mod callback;
mod home;
mod memos;
mod not_found;
mod projects;

pub use callback::Callback;
pub use home::Home;
pub use memos::{MemoPage, Memos};
pub use not_found::NotFound;
pub use projects::Projects;
