//! Playlist wire types shared by the proxy and the site.

use serde::{Deserialize, Serialize};

/// One playlist entry as served by the playlist endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Zero-based position in the playlist.
    pub id: usize,
    pub title: String,
    /// Artist names joined with `", "`.
    pub artist: String,
    /// Provider track id.
    pub track_id: String,
    pub image_url: Option<String>,
    pub preview_url: Option<String>,
}

impl Track {
    /// Provider URI used to start playback of this track.
    pub fn uri(&self) -> String {
        format!("spotify:track:{}", self.track_id)
    }
}

/// Body of a successful playlist response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub tracks: Vec<Track>,
}

/// Body of a failed proxy response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Joins artist names the way the playlist endpoint reports them.
pub fn join_artists<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_serializes_camel_case() {
        let track = Track {
            id: 0,
            title: "Song".to_string(),
            artist: "A, B".to_string(),
            track_id: "4uLU6hMCjMI75M1A2tKUQC".to_string(),
            image_url: Some("https://i.scdn.co/image/x".to_string()),
            preview_url: None,
        };
        let value = serde_json::to_value(&track).unwrap();
        assert_eq!(value["trackId"], "4uLU6hMCjMI75M1A2tKUQC");
        assert_eq!(value["imageUrl"], "https://i.scdn.co/image/x");
        assert!(value["previewUrl"].is_null());
        assert_eq!(track.uri(), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    }

    #[test]
    fn test_empty_response_shape() {
        let body = serde_json::to_string(&PlaylistResponse::default()).unwrap();
        assert_eq!(body, r#"{"tracks":[]}"#);
    }

    #[test]
    fn test_join_artists() {
        assert_eq!(join_artists(["A"]), "A");
        assert_eq!(join_artists(["A", "B", "C"]), "A, B, C");
        assert_eq!(join_artists(Vec::<&str>::new()), "");
    }
}
