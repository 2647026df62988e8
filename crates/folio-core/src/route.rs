//! Path-based routing and navigation direction.

/// Ordered top-level sections. Moving right in this list is "forward".
pub const ROUTE_ORDER: [&str; 3] = ["/", "/projects", "/memos"];

/// Path the OAuth provider redirects back to.
pub const CALLBACK_PATH: &str = "/callback";

/// Application routes.
/// URL format: `/`, `/projects`, `/memos`, `/memos/<slug>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `/`
    Home,
    /// Project cards: `/projects`
    Projects,
    /// Memo index: `/memos`
    Memos,
    /// Single memo: `/memos/<slug>`
    Memo { slug: String },
    /// OAuth redirect target: `/callback`
    Callback,
    /// Anything else
    NotFound { path: String },
}

impl AppRoute {
    /// Parse a pathname into a route.
    ///
    /// Trailing slashes are ignored and query/fragment parts are dropped.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Self::Home,
            "/projects" => Self::Projects,
            "/memos" => Self::Memos,
            CALLBACK_PATH => Self::Callback,
            _ => match trimmed.strip_prefix("/memos/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Self::Memo {
                    slug: slug.to_string(),
                },
                _ => Self::NotFound {
                    path: path.to_string(),
                },
            },
        }
    }

    /// Canonical pathname for this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Projects => "/projects".to_string(),
            Self::Memos => "/memos".to_string(),
            Self::Memo { slug } => format!("/memos/{}", slug),
            Self::Callback => CALLBACK_PATH.to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Top-level section this route belongs to, used to highlight navigation.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some(ROUTE_ORDER[0]),
            Self::Projects => Some(ROUTE_ORDER[1]),
            Self::Memos | Self::Memo { .. } => Some(ROUTE_ORDER[2]),
            Self::Callback | Self::NotFound { .. } => None,
        }
    }
}

/// Which way the transition sweep travels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Direction of a navigation from `from` to `to`.
///
/// Both paths in [`ROUTE_ORDER`]: compare positions. Otherwise leaving home is
/// forward, returning home is backward, and everything else is forward.
pub fn direction_between(from: &str, to: &str) -> Direction {
    let position = |path: &str| ROUTE_ORDER.iter().position(|r| *r == path);

    match (position(from), position(to)) {
        (Some(a), Some(b)) if b < a => Direction::Backward,
        (Some(_), Some(_)) => Direction::Forward,
        _ if from == ROUTE_ORDER[0] => Direction::Forward,
        _ if to == ROUTE_ORDER[0] => Direction::Backward,
        _ => Direction::Forward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/projects"), AppRoute::Projects);
        assert_eq!(AppRoute::from_path("/projects/"), AppRoute::Projects);
        assert_eq!(AppRoute::from_path("/memos?page=2"), AppRoute::Memos);
        assert_eq!(
            AppRoute::from_path("/memos/rust-notes"),
            AppRoute::Memo {
                slug: "rust-notes".to_string()
            }
        );
        assert_eq!(AppRoute::from_path("/callback?code=abc"), AppRoute::Callback);
        assert_eq!(
            AppRoute::from_path("/memos/a/b"),
            AppRoute::NotFound {
                path: "/memos/a/b".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("/nowhere"),
            AppRoute::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(AppRoute::Home.to_path(), "/");
        assert_eq!(AppRoute::Projects.to_path(), "/projects");
        assert_eq!(
            AppRoute::Memo {
                slug: "hello".to_string()
            }
            .to_path(),
            "/memos/hello"
        );
    }

    #[test]
    fn test_sections() {
        assert_eq!(AppRoute::Home.section(), Some("/"));
        assert_eq!(
            AppRoute::Memo {
                slug: "x".to_string()
            }
            .section(),
            Some("/memos")
        );
        assert_eq!(AppRoute::Callback.section(), None);
    }

    #[test]
    fn test_direction_in_order() {
        assert_eq!(direction_between("/", "/projects"), Direction::Forward);
        assert_eq!(direction_between("/projects", "/memos"), Direction::Forward);
        assert_eq!(direction_between("/", "/memos"), Direction::Forward);
        assert_eq!(direction_between("/memos", "/"), Direction::Backward);
        assert_eq!(direction_between("/memos", "/projects"), Direction::Backward);
        assert_eq!(direction_between("/projects", "/"), Direction::Backward);
    }

    #[test]
    fn test_direction_special_cases() {
        // home -> unlisted section page
        assert_eq!(direction_between("/", "/memos/hello"), Direction::Forward);
        // unlisted section page -> home
        assert_eq!(direction_between("/memos/hello", "/"), Direction::Backward);
        // neither is home
        assert_eq!(
            direction_between("/memos/hello", "/projects"),
            Direction::Forward
        );
        assert_eq!(direction_between("/memos", "/memos/hello"), Direction::Forward);
        assert_eq!(direction_between("/a", "/b"), Direction::Forward);
    }
}
