//! Browser capabilities and the media-loading policy derived from them.
//!
//! Resolved once at startup from the user agent and the Network Information
//! API, then injected wherever media is rendered.

/// Rough connection class from `navigator.connection.effectiveType`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionSpeed {
    Fast,
    Slow,
    #[default]
    Unknown,
}

impl ConnectionSpeed {
    pub fn from_effective_type(effective_type: Option<&str>) -> Self {
        match effective_type {
            Some("slow-2g" | "2g" | "3g") => Self::Slow,
            Some("4g") => Self::Fast,
            _ => Self::Unknown,
        }
    }
}

/// How a background video should be loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaPolicy {
    /// Render the video with `preload="auto"`.
    PreloadFull,
    /// Render the video with `preload="metadata"`.
    PreloadMetadata,
    /// Skip the video; show its poster image only.
    PosterOnly,
}

impl MediaPolicy {
    /// Value for the `preload` attribute, if a video is rendered at all.
    pub fn preload(&self) -> Option<&'static str> {
        match self {
            Self::PreloadFull => Some("auto"),
            Self::PreloadMetadata => Some("metadata"),
            Self::PosterOnly => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub safari: bool,
    pub connection: ConnectionSpeed,
}

impl Capabilities {
    pub fn detect(user_agent: &str, effective_type: Option<&str>) -> Self {
        Self {
            safari: is_safari(user_agent),
            connection: ConnectionSpeed::from_effective_type(effective_type),
        }
    }

    /// Slow connections get a poster, Safari needs a full preload to start
    /// muted autoplay loops reliably, everyone else loads metadata.
    pub fn media_policy(&self) -> MediaPolicy {
        if self.connection == ConnectionSpeed::Slow {
            MediaPolicy::PosterOnly
        } else if self.safari {
            MediaPolicy::PreloadFull
        } else {
            MediaPolicy::PreloadMetadata
        }
    }
}

/// Every Chromium and Firefox build on Apple platforms also says "Safari".
fn is_safari(user_agent: &str) -> bool {
    const IMPOSTORS: &[&str] = &["Chrome", "Chromium", "CriOS", "FxiOS", "Edg", "Android"];

    user_agent.contains("Safari") && !IMPOSTORS.iter().any(|s| user_agent.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
    const SAFARI_IOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const CHROME_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
    const CHROME_IOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/124.0 Mobile/15E148 Safari/604.1";
    const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

    #[test]
    fn test_safari_detection() {
        assert!(is_safari(SAFARI_MAC));
        assert!(is_safari(SAFARI_IOS));
        assert!(!is_safari(CHROME_MAC));
        assert!(!is_safari(CHROME_IOS));
        assert!(!is_safari(FIREFOX));
    }

    #[test]
    fn test_connection_speed() {
        assert_eq!(ConnectionSpeed::from_effective_type(Some("4g")), ConnectionSpeed::Fast);
        assert_eq!(ConnectionSpeed::from_effective_type(Some("3g")), ConnectionSpeed::Slow);
        assert_eq!(
            ConnectionSpeed::from_effective_type(Some("slow-2g")),
            ConnectionSpeed::Slow
        );
        assert_eq!(ConnectionSpeed::from_effective_type(None), ConnectionSpeed::Unknown);
    }

    #[test]
    fn test_media_policy() {
        assert_eq!(
            Capabilities::detect(SAFARI_MAC, Some("4g")).media_policy(),
            MediaPolicy::PreloadFull
        );
        assert_eq!(
            Capabilities::detect(SAFARI_IOS, Some("2g")).media_policy(),
            MediaPolicy::PosterOnly
        );
        assert_eq!(
            Capabilities::detect(CHROME_MAC, None).media_policy(),
            MediaPolicy::PreloadMetadata
        );
        assert_eq!(MediaPolicy::PosterOnly.preload(), None);
        assert_eq!(MediaPolicy::PreloadFull.preload(), Some("auto"));
    }
}
