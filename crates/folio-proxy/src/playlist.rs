//! Playlist proxy endpoint.
//!
//! Exchanges the server's client credentials for an app token, pulls every
//! item of the configured playlist, and reshapes them into [`Track`]s.

use std::future::Future;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use folio_core::playlist::join_artists;
use folio_core::{PlaylistResponse, Track};
use rspotify::model::{FullTrack, PlayableItem, PlaylistId};
use rspotify::prelude::*;
use rspotify::{ClientCredsSpotify, Credentials};

use crate::ProxyState;
use crate::error::ProxyError;
use crate::video::VideoOrigin;

/// Cache directive for a successful playlist response (24 hours).
pub const PLAYLIST_CACHE_CONTROL: &str = "public, max-age=86400";

/// Items requested per page; the provider's maximum.
const PAGE_SIZE: u32 = 100;

/// Where playlist tracks come from.
pub trait PlaylistSource: Send + Sync + 'static {
    fn tracks(&self) -> impl Future<Output = Result<Vec<Track>, ProxyError>> + Send;
}

/// Playlist fetched from the audio provider's Web API.
#[derive(Debug, Clone)]
pub struct SpotifyPlaylist {
    credentials: Option<(String, String)>,
    playlist_id: String,
}

impl SpotifyPlaylist {
    pub fn new(credentials: Option<(String, String)>, playlist_id: impl Into<String>) -> Self {
        Self {
            credentials,
            playlist_id: playlist_id.into(),
        }
    }
}

impl PlaylistSource for SpotifyPlaylist {
    fn tracks(&self) -> impl Future<Output = Result<Vec<Track>, ProxyError>> + Send {
        let credentials = self.credentials.clone();
        let playlist_id = self.playlist_id.clone();

        async move {
            let (client_id, client_secret) = credentials.ok_or(ProxyError::MissingCredentials)?;

            let spotify = ClientCredsSpotify::new(Credentials::new(&client_id, &client_secret));
            spotify
                .request_token()
                .await
                .map_err(|e| ProxyError::Playlist(e.to_string()))?;

            let id = PlaylistId::from_id(playlist_id.as_str())
                .map_err(|e| ProxyError::Playlist(e.to_string()))?;

            let mut tracks = Vec::new();
            let mut offset = 0;
            loop {
                let page = spotify
                    .playlist_items_manual(id.clone(), None, None, Some(PAGE_SIZE), Some(offset))
                    .await
                    .map_err(|e| ProxyError::Playlist(e.to_string()))?;

                for item in &page.items {
                    if let Some(PlayableItem::Track(track)) = &item.track {
                        tracks.push(reshape(tracks.len(), track));
                    }
                }

                offset += page.items.len() as u32;
                if page.next.is_none() || page.items.is_empty() {
                    break;
                }
            }

            tracing::debug!(playlist = %playlist_id, count = tracks.len(), "Fetched playlist items");
            Ok(tracks)
        }
    }
}

/// Provider track -> wire track at playlist position `position`.
fn reshape(position: usize, track: &FullTrack) -> Track {
    Track {
        id: position,
        title: track.name.clone(),
        artist: join_artists(track.artists.iter().map(|a| a.name.as_str())),
        track_id: track
            .id
            .as_ref()
            .map(|id| id.id().to_string())
            .unwrap_or_default(),
        image_url: track.album.images.first().map(|image| image.url.clone()),
        preview_url: track.preview_url.clone(),
    }
}

/// `GET /api/spotify/playlist`
pub async fn serve_playlist<P: PlaylistSource, V: VideoOrigin>(
    State(state): State<ProxyState<P, V>>,
) -> Response {
    match state.playlist.tracks().await {
        Ok(tracks) => {
            tracing::info!(count = tracks.len(), "Serving playlist");
            (
                [(header::CACHE_CONTROL, PLAYLIST_CACHE_CONTROL)],
                Json(PlaylistResponse { tracks }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Playlist request failed");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use folio_core::ErrorBody;

    use super::*;
    use crate::tests::{FakeOrigin, FakePlaylist, state};

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn track(id: usize, title: &str) -> Track {
        Track {
            id,
            title: title.to_string(),
            artist: "Artist".to_string(),
            track_id: format!("track{id}"),
            image_url: None,
            preview_url: None,
        }
    }

    #[tokio::test]
    async fn test_tracks_with_cache_header() {
        let playlist = FakePlaylist::ok(vec![track(0, "One"), track(1, "Two")]);
        let response = serve_playlist(State(state(playlist, FakeOrigin::not_found()))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            PLAYLIST_CACHE_CONTROL
        );
        let body: PlaylistResponse = body_json(response).await;
        assert_eq!(body.tracks.len(), 2);
        assert_eq!(body.tracks[1].title, "Two");
    }

    #[tokio::test]
    async fn test_empty_playlist_is_ok() {
        let response =
            serve_playlist(State(state(FakePlaylist::ok(vec![]), FakeOrigin::not_found()))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"tracks":[]}"#);
    }

    #[tokio::test]
    async fn test_missing_credentials_is_500() {
        let source = SpotifyPlaylist::new(None, "37i9dQZF1DX0SM0LYsmbMT");
        assert!(matches!(
            source.tracks().await,
            Err(ProxyError::MissingCredentials)
        ));

        let response = serve_playlist(State(state(
            FakePlaylist::err(ProxyError::MissingCredentials),
            FakeOrigin::not_found(),
        )))
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = body_json(response).await;
        assert_eq!(body.error, "Spotify credentials are not configured");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500() {
        let response = serve_playlist(State(state(
            FakePlaylist::err(ProxyError::Playlist("401 Unauthorized".to_string())),
            FakeOrigin::not_found(),
        )))
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = body_json(response).await;
        assert!(body.error.contains("401"));
    }
}
