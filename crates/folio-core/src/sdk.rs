//! Playback SDK state objects.
//!
//! The SDK reports a full state snapshot on every change instead of a state
//! code. [`classify`] turns consecutive snapshots into the same
//! [`PlayerState`] vocabulary the embedded widget uses.

use serde::Deserialize;

use crate::playback::PlayerState;

/// Subset of the SDK's `player_state_changed` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SdkSnapshot {
    pub paused: bool,
    #[serde(default)]
    pub loading: bool,
    /// Playback position in milliseconds.
    #[serde(default)]
    pub position: f64,
    /// Track duration in milliseconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub track_window: TrackWindow,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TrackWindow {
    pub current_track: Option<SdkTrack>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SdkTrack {
    pub id: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub name: String,
}

impl SdkSnapshot {
    pub fn track_id(&self) -> Option<&str> {
        self.track_window
            .current_track
            .as_ref()
            .and_then(|t| t.id.as_deref())
    }
}

/// Classifies `current`, given the snapshot that preceded it.
///
/// The SDK signals the end of a track by pausing it and rewinding to zero, so a
/// playing snapshot followed by a paused one at position 0 on the same track
/// is reported as [`PlayerState::Ended`].
pub fn classify(previous: Option<&SdkSnapshot>, current: &SdkSnapshot) -> PlayerState {
    if current.paused {
        let rewound_after_playing = previous.is_some_and(|prev| {
            !prev.paused && prev.track_id() == current.track_id() && current.position == 0.0
        });
        if rewound_after_playing {
            PlayerState::Ended
        } else {
            PlayerState::Paused
        }
    } else if current.loading {
        PlayerState::Buffering
    } else {
        PlayerState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(paused: bool, position: f64, id: &str) -> SdkSnapshot {
        SdkSnapshot {
            paused,
            position,
            duration: 180_000.0,
            track_window: TrackWindow {
                current_track: Some(SdkTrack {
                    id: Some(id.to_string()),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_payload() {
        let json = r#"{
            "paused": false,
            "position": 1200,
            "duration": 200000,
            "loading": false,
            "shuffle": false,
            "track_window": {
                "current_track": {"id": "4uLU6hMCjMI75M1A2tKUQC", "uri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC", "name": "Song"},
                "previous_tracks": [],
                "next_tracks": []
            }
        }"#;
        let state: SdkSnapshot = serde_json::from_str(json).unwrap();
        assert!(!state.paused);
        assert_eq!(state.position, 1200.0);
        assert_eq!(state.track_id(), Some("4uLU6hMCjMI75M1A2tKUQC"));
    }

    #[test]
    fn test_playing_and_paused() {
        assert_eq!(classify(None, &snapshot(false, 10.0, "a")), PlayerState::Playing);
        assert_eq!(classify(None, &snapshot(true, 10.0, "a")), PlayerState::Paused);
        let loading = SdkSnapshot {
            loading: true,
            ..snapshot(false, 0.0, "a")
        };
        assert_eq!(classify(None, &loading), PlayerState::Buffering);
    }

    #[test]
    fn test_end_of_track() {
        let prev = snapshot(false, 179_500.0, "a");
        assert_eq!(classify(Some(&prev), &snapshot(true, 0.0, "a")), PlayerState::Ended);
    }

    #[test]
    fn test_pause_at_start_is_not_end() {
        // paused mid-track by the user
        let prev = snapshot(false, 5_000.0, "a");
        assert_eq!(classify(Some(&prev), &snapshot(true, 5_000.0, "a")), PlayerState::Paused);
        // already paused before
        let prev = snapshot(true, 0.0, "a");
        assert_eq!(classify(Some(&prev), &snapshot(true, 0.0, "a")), PlayerState::Paused);
        // different track
        let prev = snapshot(false, 100.0, "a");
        assert_eq!(classify(Some(&prev), &snapshot(true, 0.0, "b")), PlayerState::Paused);
    }
}
