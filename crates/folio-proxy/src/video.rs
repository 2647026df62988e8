//! Video proxy endpoint.
//!
//! Streams objects from the storage origin through our own origin so the
//! site can use range requests without CORS configuration on the bucket.

use std::future::Future;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::ProxyState;
use crate::error::ProxyError;
use crate::playlist::PlaylistSource;

/// Request headers passed to the origin verbatim.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [
    header::RANGE,
    header::IF_RANGE,
    header::IF_NONE_MATCH,
    header::IF_MODIFIED_SINCE,
];

/// Origin response headers passed back to the caller when present.
pub const PROPAGATED_RESPONSE_HEADERS: [HeaderName; 7] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CONTENT_RANGE,
    header::ACCEPT_RANGES,
    header::ETAG,
    header::LAST_MODIFIED,
    header::CACHE_CONTROL,
];

/// Used when the origin sends no cache directive of its own.
pub const VIDEO_CACHE_CONTROL: &str = "public, max-age=86400";

const EXPOSED_HEADERS: &str = "Content-Range, Content-Length, Accept-Ranges";

/// Response from the storage origin.
pub struct Upstream {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Body,
}

/// Where video objects are fetched from.
pub trait VideoOrigin: Send + Sync + 'static {
    fn fetch(
        &self,
        key: &str,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<Upstream, ProxyError>> + Send;
}

/// HTTP object storage reachable at `base_url`.
///
/// `timeout` bounds connecting and receiving the response head. The body is
/// streamed for as long as the caller keeps reading it.
#[derive(Debug, Clone)]
pub struct ObjectStorage {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ObjectStorage {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| ProxyError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

impl VideoOrigin for ObjectStorage {
    fn fetch(
        &self,
        key: &str,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<Upstream, ProxyError>> + Send {
        let request = self.client.get(self.object_url(key)).headers(headers);
        let timeout = self.timeout;

        async move {
            let response = tokio::time::timeout(timeout, request.send())
                .await
                .map_err(|_| ProxyError::Network("timed out".to_string()))?
                .map_err(|e| {
                    if e.is_timeout() {
                        ProxyError::Network("timed out".to_string())
                    } else {
                        ProxyError::Network(e.to_string())
                    }
                })?;

            Ok(Upstream {
                status: response.status(),
                headers: response.headers().clone(),
                body: Body::from_stream(response.bytes_stream()),
            })
        }
    }
}

/// Object keys are plain relative paths; no empty or parent segments.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.split('/').all(|segment| !segment.is_empty() && segment != "..")
}

/// Copies the headers we forward from an incoming request.
pub fn forward_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::new();
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = incoming.get(&name) {
            forwarded.insert(name, value.clone());
        }
    }
    forwarded
}

/// Builds the caller-facing response around an origin response.
fn relay(upstream: Upstream) -> Response {
    let mut response = Response::new(upstream.body);
    *response.status_mut() = upstream.status;

    let headers = response.headers_mut();
    for name in PROPAGATED_RESPONSE_HEADERS {
        if let Some(value) = upstream.headers.get(&name) {
            headers.insert(name, value.clone());
        }
    }
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(VIDEO_CACHE_CONTROL),
        );
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static(EXPOSED_HEADERS),
    );

    response
}

/// `GET /api/video/{*key}`
pub async fn serve_video<P: PlaylistSource, V: VideoOrigin>(
    State(state): State<ProxyState<P, V>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !is_valid_key(&key) {
        tracing::warn!(key = %key, "Rejected video key");
        return ProxyError::VideoNotFound.into_response();
    }

    let forwarded = forward_headers(&headers);
    let range = forwarded
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    match state.video.fetch(&key, forwarded).await {
        Ok(upstream) if upstream.status.is_success() || upstream.status == StatusCode::NOT_MODIFIED => {
            tracing::debug!(key = %key, range = %range, status = %upstream.status, "Relaying video");
            relay(upstream)
        }
        Ok(upstream) => {
            tracing::warn!(key = %key, status = %upstream.status, "Video origin returned non-success");
            ProxyError::VideoNotFound.into_response()
        }
        Err(e) => {
            tracing::error!(key = %key, error = %e, "Video origin request failed");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::tests::{FakeOrigin, FakePlaylist, state};

    fn upstream(status: StatusCode, headers: &[(HeaderName, &'static str)], body: &'static str) -> Upstream {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(name.clone(), HeaderValue::from_static(value));
        }
        Upstream {
            status,
            headers: map,
            body: Body::from(body),
        }
    }

    #[test]
    fn test_key_validation() {
        assert!(is_valid_key("intro.mp4"));
        assert!(is_valid_key("reels/2024/intro.mp4"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("../secret"));
        assert!(!is_valid_key("reels//intro.mp4"));
    }

    #[test]
    fn test_forward_headers_filters() {
        let mut incoming = HeaderMap::new();
        incoming.insert(header::RANGE, HeaderValue::from_static("bytes=0-1023"));
        incoming.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"abc\""));
        incoming.insert(header::COOKIE, HeaderValue::from_static("session=1"));

        let forwarded = forward_headers(&incoming);
        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded[header::RANGE], "bytes=0-1023");
        assert!(!forwarded.contains_key(header::COOKIE));
    }

    #[tokio::test]
    async fn test_range_is_forwarded_and_content_range_propagated() {
        let origin = FakeOrigin::replying(|| {
            Ok(upstream(
                StatusCode::PARTIAL_CONTENT,
                &[
                    (header::CONTENT_TYPE, "video/mp4"),
                    (header::CONTENT_RANGE, "bytes 0-3/100"),
                    (header::CONTENT_LENGTH, "4"),
                    (header::SET_COOKIE, "tracking=1"),
                ],
                "mp4!",
            ))
        });
        let state = state(FakePlaylist::ok(vec![]), origin);

        let mut headers = HeaderMap::new();
        headers.insert(header::RANGE, HeaderValue::from_static("bytes=0-3"));
        let response = serve_video(
            State(state.clone()),
            Path("intro.mp4".to_string()),
            headers,
        )
        .await;

        let (key, seen) = state.video.last_request().unwrap();
        assert_eq!(key, "intro.mp4");
        assert_eq!(seen[header::RANGE], "bytes=0-3");

        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        let out = response.headers();
        assert_eq!(out[header::CONTENT_RANGE], "bytes 0-3/100");
        assert_eq!(out[header::CONTENT_LENGTH], "4");
        assert_eq!(out[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(out[header::CACHE_CONTROL], VIDEO_CACHE_CONTROL);
        assert!(!out.contains_key(header::SET_COOKIE));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"mp4!");
    }

    #[tokio::test]
    async fn test_origin_cache_control_wins() {
        let origin = FakeOrigin::replying(|| {
            Ok(upstream(
                StatusCode::OK,
                &[(header::CACHE_CONTROL, "no-store")],
                "",
            ))
        });
        let response = serve_video(
            State(state(FakePlaylist::ok(vec![]), origin)),
            Path("intro.mp4".to_string()),
            HeaderMap::new(),
        )
        .await;
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn test_non_success_is_404() {
        let response = serve_video(
            State(state(FakePlaylist::ok(vec![]), FakeOrigin::not_found())),
            Path("missing.mp4".to_string()),
            HeaderMap::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_not_modified_passes_through() {
        let origin =
            FakeOrigin::replying(|| Ok(upstream(StatusCode::NOT_MODIFIED, &[(header::ETAG, "\"v1\"")], "")));
        let response = serve_video(
            State(state(FakePlaylist::ok(vec![]), origin)),
            Path("intro.mp4".to_string()),
            HeaderMap::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(response.headers()[header::ETAG], "\"v1\"");
    }

    #[tokio::test]
    async fn test_network_failure_is_500() {
        let origin = FakeOrigin::replying(|| Err(ProxyError::Network("timed out".to_string())));
        let response = serve_video(
            State(state(FakePlaylist::ok(vec![]), origin)),
            Path("intro.mp4".to_string()),
            HeaderMap::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn test_invalid_key_skips_origin() {
        let origin = FakeOrigin::not_found();
        let state = state(FakePlaylist::ok(vec![]), origin);
        let response = serve_video(
            State(state.clone()),
            Path("../etc/passwd".to_string()),
            HeaderMap::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(state.video.last_request().is_none());
    }

    /// Origin that sends its head at once, then `body` one byte per `gap`.
    async fn trickling_origin(body: &'static [u8], gap: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await.unwrap();
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: video/mp4\r\nContent-Length: {}\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            for byte in body {
                tokio::time::sleep(gap).await;
                socket.write_all(&[*byte]).await.unwrap();
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_slow_body_outlives_timeout() {
        let base = trickling_origin(b"frames", Duration::from_millis(100)).await;
        let storage = ObjectStorage::new(base, Duration::from_millis(250)).unwrap();

        let upstream = storage.fetch("intro.mp4", HeaderMap::new()).await.unwrap();
        assert_eq!(upstream.status, StatusCode::OK);

        let bytes = to_bytes(upstream.body, usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"frames");
    }

    #[tokio::test]
    async fn test_silent_origin_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let storage =
            ObjectStorage::new(format!("http://{}", addr), Duration::from_millis(100)).unwrap();
        let result = storage.fetch("intro.mp4", HeaderMap::new()).await;
        assert!(matches!(result, Err(ProxyError::Network(msg)) if msg == "timed out"));
    }

    #[test]
    fn test_object_url_trims_slash() {
        let storage = ObjectStorage::new("https://media.folio.example/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            storage.object_url("intro.mp4"),
            "https://media.folio.example/intro.mp4"
        );
    }
}
