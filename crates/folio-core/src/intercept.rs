//! Decides whether an anchor click becomes an animated in-app navigation.

/// An anchor as seen by the click handler, already resolved against the page URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkTarget {
    /// Raw `href` attribute as written in the markup.
    pub href: String,
    /// Origin of the resolved URL (`scheme://host:port`).
    pub origin: String,
    /// Pathname of the resolved URL.
    pub pathname: String,
    /// Query string of the resolved URL, including `?` when present.
    pub search: String,
    /// Fragment of the resolved URL, including `#` when present.
    pub hash: String,
    /// `target` attribute, if any.
    pub target: Option<String>,
    /// Whether the anchor carries a `download` attribute.
    pub download: bool,
}

impl LinkTarget {
    fn has_fragment(&self) -> bool {
        !self.hash.is_empty() || self.href.contains('#')
    }

    fn opens_elsewhere(&self) -> bool {
        self.download
            || self
                .target
                .as_deref()
                .is_some_and(|t| !t.is_empty() && !t.eq_ignore_ascii_case("_self"))
    }
}

/// Mouse button and modifier keys of the click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickModifiers {
    fn is_plain_primary(&self) -> bool {
        self.button == 0 && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

/// Returns the path (with query) to navigate to if the click should be
/// intercepted, or `None` to let the browser handle it.
///
/// A click is intercepted when the link is same-origin, points to a different
/// pathname than `current_path`, has no fragment, and is a plain primary click
/// that would open in the current tab.
pub fn intercept(
    link: &LinkTarget,
    current_origin: &str,
    current_path: &str,
    modifiers: ClickModifiers,
) -> Option<String> {
    if !modifiers.is_plain_primary() || link.opens_elsewhere() {
        return None;
    }
    if link.origin != current_origin || link.has_fragment() {
        return None;
    }
    if link.pathname == current_path {
        return None;
    }

    Some(format!("{}{}", link.pathname, link.search))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://folio.example";

    fn link(href: &str, pathname: &str) -> LinkTarget {
        LinkTarget {
            href: href.to_string(),
            origin: ORIGIN.to_string(),
            pathname: pathname.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_origin_different_path_is_intercepted() {
        let target = link("/projects", "/projects");
        assert_eq!(
            intercept(&target, ORIGIN, "/", ClickModifiers::default()),
            Some("/projects".to_string())
        );
    }

    #[test]
    fn test_query_is_kept() {
        let mut target = link("/memos?tag=rust", "/memos");
        target.search = "?tag=rust".to_string();
        assert_eq!(
            intercept(&target, ORIGIN, "/", ClickModifiers::default()),
            Some("/memos?tag=rust".to_string())
        );
    }

    #[test]
    fn test_current_path_passes_through() {
        let target = link("/memos", "/memos");
        assert_eq!(
            intercept(&target, ORIGIN, "/memos", ClickModifiers::default()),
            None
        );
    }

    #[test]
    fn test_cross_origin_passes_through() {
        let mut target = link("https://github.com/someone", "/someone");
        target.origin = "https://github.com".to_string();
        assert_eq!(intercept(&target, ORIGIN, "/", ClickModifiers::default()), None);
    }

    #[test]
    fn test_fragment_passes_through() {
        let mut target = link("/memos#latest", "/memos");
        target.hash = "#latest".to_string();
        assert_eq!(intercept(&target, ORIGIN, "/", ClickModifiers::default()), None);

        // empty fragment resolves to an empty hash but is still a fragment link
        let target = link("/projects#", "/projects");
        assert_eq!(intercept(&target, ORIGIN, "/", ClickModifiers::default()), None);
    }

    #[test]
    fn test_new_tab_intents_pass_through() {
        let target = link("/projects", "/projects");
        for modifiers in [
            ClickModifiers {
                ctrl: true,
                ..Default::default()
            },
            ClickModifiers {
                meta: true,
                ..Default::default()
            },
            ClickModifiers {
                button: 1,
                ..Default::default()
            },
        ] {
            assert_eq!(intercept(&target, ORIGIN, "/", modifiers), None);
        }

        let mut blank = link("/projects", "/projects");
        blank.target = Some("_blank".to_string());
        assert_eq!(intercept(&blank, ORIGIN, "/", ClickModifiers::default()), None);

        let mut own_tab = link("/projects", "/projects");
        own_tab.target = Some("_self".to_string());
        assert!(intercept(&own_tab, ORIGIN, "/", ClickModifiers::default()).is_some());

        let mut download = link("/cv.pdf", "/cv.pdf");
        download.download = true;
        assert_eq!(intercept(&download, ORIGIN, "/", ClickModifiers::default()), None);
    }
}
