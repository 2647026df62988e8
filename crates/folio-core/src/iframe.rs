//! Message codec for the embedded video widget.
//!
//! The widget is driven by JSON strings posted into its iframe and answers
//! with unsolicited JSON strings on the same channel.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::MessageError;
use crate::playback::PlayerState;

/// Origins allowed to talk to us through the widget channel.
pub const TRUSTED_ORIGINS: &[&str] = &[
    "https://www.youtube.com",
    "https://www.youtube-nocookie.com",
];

/// Origin commands are posted to.
pub const WIDGET_ORIGIN: &str = "https://www.youtube.com";

/// Commands understood by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetCommand<'a> {
    /// Load and start a video.
    Load { video_id: &'a str },
    /// Load a video without starting it.
    Cue { video_id: &'a str },
    Play,
    Pause,
}

#[derive(Serialize)]
struct CommandMessage<'a> {
    event: &'static str,
    func: &'static str,
    args: Vec<&'a str>,
}

impl WidgetCommand<'_> {
    /// Serialized message for `postMessage`.
    pub fn encode(&self) -> String {
        let (func, args) = match *self {
            Self::Load { video_id } => ("loadVideoById", vec![video_id]),
            Self::Cue { video_id } => ("cueVideoById", vec![video_id]),
            Self::Play => ("playVideo", vec![]),
            Self::Pause => ("pauseVideo", vec![]),
        };
        let message = CommandMessage {
            event: "command",
            func,
            args,
        };
        serde_json::to_string(&message).unwrap_or_default()
    }
}

/// Handshake that asks the widget to start sending state updates.
pub fn listening_message(id: &str) -> String {
    json!({ "event": "listening", "id": id, "channel": "widget" }).to_string()
}

/// Embed URL with the JS API enabled for `origin`.
pub fn embed_url(video_id: &str, origin: &str) -> String {
    format!(
        "{}/embed/{}?enablejsapi=1&playsinline=1&rel=0&origin={}",
        WIDGET_ORIGIN, video_id, origin
    )
}

pub fn is_trusted_origin(origin: &str) -> bool {
    TRUSTED_ORIGINS.contains(&origin)
}

/// Whether a message was posted by our widget frame.
///
/// Both sides must be known; a missing sender or a detached frame never
/// matches.
pub fn is_widget_source<W: PartialEq>(source: Option<&W>, widget: Option<&W>) -> bool {
    matches!((source, widget), (Some(source), Some(widget)) if source == widget)
}

/// Extracts a player state from a widget message.
///
/// Accepts both `{"event":"onStateChange","info":1}` and
/// `{"event":"infoDelivery","info":{"playerState":1}}`.
pub fn decode_state(origin: &str, data: &str) -> Result<PlayerState, MessageError> {
    if !is_trusted_origin(origin) {
        return Err(MessageError::UntrustedOrigin(origin.to_string()));
    }

    let value: Value =
        serde_json::from_str(data).map_err(|e| MessageError::Malformed(e.to_string()))?;

    let code = match value.get("event").and_then(Value::as_str) {
        Some("onStateChange") => value.get("info").and_then(Value::as_i64),
        Some("infoDelivery") | Some("initialDelivery") => value
            .get("info")
            .and_then(|info| info.get("playerState"))
            .and_then(Value::as_i64),
        _ => None,
    }
    .ok_or(MessageError::NotStateChange)?;

    PlayerState::from_code(code).ok_or(MessageError::UnknownState(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YT: &str = "https://www.youtube.com";

    #[test]
    fn test_encode_commands() {
        assert_eq!(
            WidgetCommand::Load { video_id: "abc123" }.encode(),
            r#"{"event":"command","func":"loadVideoById","args":["abc123"]}"#
        );
        assert_eq!(
            WidgetCommand::Play.encode(),
            r#"{"event":"command","func":"playVideo","args":[]}"#
        );
        assert_eq!(
            WidgetCommand::Cue { video_id: "x" }.encode(),
            r#"{"event":"command","func":"cueVideoById","args":["x"]}"#
        );
    }

    #[test]
    fn test_listening_message() {
        let value: Value = serde_json::from_str(&listening_message("player")).unwrap();
        assert_eq!(value["event"], "listening");
        assert_eq!(value["id"], "player");
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("abc", "https://folio.example"),
            "https://www.youtube.com/embed/abc?enablejsapi=1&playsinline=1&rel=0&origin=https://folio.example"
        );
    }

    #[test]
    fn test_decode_state_change() {
        assert_eq!(
            decode_state(YT, r#"{"event":"onStateChange","info":0}"#),
            Ok(PlayerState::Ended)
        );
        assert_eq!(
            decode_state(YT, r#"{"event":"infoDelivery","info":{"playerState":1}}"#),
            Ok(PlayerState::Playing)
        );
        assert_eq!(
            decode_state(
                "https://www.youtube-nocookie.com",
                r#"{"event":"onStateChange","info":2}"#
            ),
            Ok(PlayerState::Paused)
        );
    }

    #[test]
    fn test_decode_rejects_untrusted_origin() {
        assert!(matches!(
            decode_state("https://evil.example", r#"{"event":"onStateChange","info":1}"#),
            Err(MessageError::UntrustedOrigin(_))
        ));
    }

    #[test]
    fn test_widget_source_must_match_frame() {
        assert!(is_widget_source(Some(&7), Some(&7)));
        assert!(!is_widget_source(Some(&3), Some(&7)));
        assert!(!is_widget_source(None, Some(&7)));
        assert!(!is_widget_source::<i32>(Some(&7), None));
        assert!(!is_widget_source::<i32>(None, None));
    }

    #[test]
    fn test_decode_ignores_other_messages() {
        assert!(matches!(
            decode_state(YT, "not json"),
            Err(MessageError::Malformed(_))
        ));
        assert_eq!(
            decode_state(YT, r#"{"event":"infoDelivery","info":{"currentTime":3.2}}"#),
            Err(MessageError::NotStateChange)
        );
        assert_eq!(
            decode_state(YT, r#"{"event":"onReady"}"#),
            Err(MessageError::NotStateChange)
        );
        assert_eq!(
            decode_state(YT, r#"{"event":"onStateChange","info":9}"#),
            Err(MessageError::UnknownState(9))
        );
    }
}
