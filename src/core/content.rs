//! Static site content.
//!
//! Project cards and the memo index are TOML documents compiled into the
//! binary; memo bodies are markdown files looked up by slug.

use serde::Deserialize;

use crate::config::{MEMOS_TOML, PROJECTS_TOML};

/// A project card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
}

/// A memo index entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoEntry {
    pub slug: String,
    pub title: String,
    /// ISO date, displayed as written.
    pub date: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct MemosFile {
    #[serde(default)]
    memos: Vec<MemoEntry>,
}

/// Memo bodies, keyed by slug.
const MEMO_BODIES: &[(&str, &str)] = &[
    (
        "hello-world",
        include_str!("../../assets/content/memos/hello-world.md"),
    ),
    (
        "page-transitions",
        include_str!("../../assets/content/memos/page-transitions.md"),
    ),
    (
        "range-requests",
        include_str!("../../assets/content/memos/range-requests.md"),
    ),
];

fn parse_projects(source: &str) -> Result<Vec<Project>, toml::de::Error> {
    toml::from_str::<ProjectsFile>(source).map(|f| f.projects)
}

fn parse_memos(source: &str) -> Result<Vec<MemoEntry>, toml::de::Error> {
    let mut memos = toml::from_str::<MemosFile>(source)?.memos;
    // Newest first; ISO dates sort lexicographically.
    memos.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(memos)
}

/// All project cards. Malformed content is logged and yields an empty list.
pub fn projects() -> Vec<Project> {
    parse_projects(PROJECTS_TOML).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("projects.toml: {}", e).into());
        Vec::new()
    })
}

/// The memo index, newest first.
pub fn memos() -> Vec<MemoEntry> {
    parse_memos(MEMOS_TOML).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("memos.toml: {}", e).into());
        Vec::new()
    })
}

/// Index entry and markdown body of a memo.
pub fn memo(slug: &str) -> Option<(MemoEntry, &'static str)> {
    let entry = memos().into_iter().find(|m| m.slug == slug)?;
    let body = MEMO_BODIES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, body)| *body)?;
    Some((entry, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_projects() {
        let source = r#"
            [[projects]]
            title = "folio"
            summary = "This site."
            tags = ["rust", "wasm"]
            year = 2025

            [[projects]]
            title = "notes"
            summary = "No link."
        "#;
        let projects = parse_projects(source).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].tags, vec!["rust", "wasm"]);
        assert_eq!(projects[1].url, None);
    }

    #[test]
    fn test_memos_sorted_newest_first() {
        let source = r#"
            [[memos]]
            slug = "old"
            title = "Old"
            date = "2023-01-05"

            [[memos]]
            slug = "new"
            title = "New"
            date = "2024-11-20"
        "#;
        let memos = parse_memos(source).unwrap();
        assert_eq!(memos[0].slug, "new");
        assert_eq!(memos[1].summary, "");
    }

    #[test]
    fn test_bundled_content_is_consistent() {
        let index = parse_memos(MEMOS_TOML).unwrap();
        assert!(!parse_projects(PROJECTS_TOML).unwrap().is_empty());
        for entry in &index {
            assert!(
                MEMO_BODIES.iter().any(|(slug, _)| *slug == entry.slug),
                "missing body for {}",
                entry.slug
            );
        }
    }

    #[test]
    fn test_unknown_memo() {
        assert!(memo("does-not-exist").is_none());
    }
}
