//! # folio proxy server
//!
//! Serves the built site and the two same-origin proxy endpoints it relies on.
//!
//! ## Endpoints
//!
//! | Path | Description |
//! |------|-------------|
//! | `/api/spotify/playlist` | Tracks of the configured playlist as JSON |
//! | `/api/video/{*key}` | Range-capable pass-through to the video origin |
//! | everything else | Static site, falling back to `index.html` |

pub mod config;
pub mod error;
pub mod logging;
pub mod playlist;
pub mod video;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ProxyError;
pub use playlist::{PlaylistSource, SpotifyPlaylist};
pub use video::{ObjectStorage, VideoOrigin};

/// Path of the playlist endpoint.
pub const PLAYLIST_ROUTE: &str = "/api/spotify/playlist";

/// Path of the video endpoint.
pub const VIDEO_ROUTE: &str = "/api/video/{*key}";

/// Shared state passed to all request handlers.
pub struct ProxyState<P, V> {
    pub playlist: Arc<P>,
    pub video: Arc<V>,
}

impl<P, V> ProxyState<P, V> {
    pub fn new(playlist: P, video: V) -> Self {
        Self {
            playlist: Arc::new(playlist),
            video: Arc::new(video),
        }
    }
}

impl<P, V> Clone for ProxyState<P, V> {
    fn clone(&self) -> Self {
        Self {
            playlist: Arc::clone(&self.playlist),
            video: Arc::clone(&self.video),
        }
    }
}

/// Builds the application router.
///
/// When `site_dir` is given, unknown paths are served from it and fall back
/// to its `index.html` so client-side routes survive a reload.
pub fn router<P: PlaylistSource, V: VideoOrigin>(
    state: ProxyState<P, V>,
    site_dir: Option<&Path>,
) -> Router {
    let api = Router::new()
        .route(PLAYLIST_ROUTE, get(playlist::serve_playlist::<P, V>))
        .route(VIDEO_ROUTE, get(video::serve_video::<P, V>))
        .with_state(state);

    let app = match site_dir {
        Some(dir) => {
            let site = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            api.fallback_service(site)
        }
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use axum::http::{HeaderMap, StatusCode};
    use folio_core::Track;

    use super::*;
    use crate::video::Upstream;

    pub struct FakePlaylist(Mutex<Option<Result<Vec<Track>, ProxyError>>>);

    impl FakePlaylist {
        pub fn ok(tracks: Vec<Track>) -> Self {
            Self(Mutex::new(Some(Ok(tracks))))
        }

        pub fn err(error: ProxyError) -> Self {
            Self(Mutex::new(Some(Err(error))))
        }
    }

    impl PlaylistSource for FakePlaylist {
        fn tracks(&self) -> impl Future<Output = Result<Vec<Track>, ProxyError>> + Send {
            let result = self
                .0
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()));
            async move { result }
        }
    }

    type Reply = fn() -> Result<Upstream, ProxyError>;

    pub struct FakeOrigin {
        reply: Reply,
        seen: Mutex<Option<(String, HeaderMap)>>,
    }

    impl FakeOrigin {
        pub fn replying(reply: Reply) -> Self {
            Self {
                reply,
                seen: Mutex::new(None),
            }
        }

        pub fn not_found() -> Self {
            Self::replying(|| {
                Ok(Upstream {
                    status: StatusCode::NOT_FOUND,
                    headers: HeaderMap::new(),
                    body: axum::body::Body::empty(),
                })
            })
        }

        pub fn last_request(&self) -> Option<(String, HeaderMap)> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl VideoOrigin for FakeOrigin {
        fn fetch(
            &self,
            key: &str,
            headers: HeaderMap,
        ) -> impl Future<Output = Result<Upstream, ProxyError>> + Send {
            *self.seen.lock().unwrap() = Some((key.to_string(), headers));
            let result = (self.reply)();
            async move { result }
        }
    }

    pub fn state(playlist: FakePlaylist, video: FakeOrigin) -> ProxyState<FakePlaylist, FakeOrigin> {
        ProxyState::new(playlist, video)
    }

    #[test]
    fn test_router_builds_with_and_without_site() {
        let _ = router(state(FakePlaylist::ok(vec![]), FakeOrigin::not_found()), None);
        let _ = router(
            state(FakePlaylist::ok(vec![]), FakeOrigin::not_found()),
            Some(Path::new("dist")),
        );
    }
}
