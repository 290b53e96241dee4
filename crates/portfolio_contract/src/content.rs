//! Lenient views over the blog and project listings relayed by the proxy.
//!
//! The proxy forwards upstream JSON verbatim, so these types only pick out the fields the desktop
//! renders and tolerate everything else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "RawBlogPost")]
/// One blog post entry.
pub struct BlogPost {
    /// Post title.
    pub title: String,
    /// Short summary.
    pub summary: Option<String>,
    /// Canonical URL of the post.
    pub url: Option<String>,
    /// Publication timestamp as provided upstream.
    pub published: Option<String>,
}

// Upstreams often send several of these keys at once, so each one is read separately and the
// first present value wins.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawBlogPost {
    title: Option<String>,
    summary: Option<String>,
    brief: Option<String>,
    excerpt: Option<String>,
    description: Option<String>,
    url: Option<String>,
    link: Option<String>,
    published: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at_camel: Option<String>,
    published_at: Option<String>,
    date: Option<String>,
}

impl From<RawBlogPost> for BlogPost {
    fn from(raw: RawBlogPost) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            summary: raw
                .summary
                .or(raw.brief)
                .or(raw.excerpt)
                .or(raw.description),
            url: raw.url.or(raw.link),
            published: raw
                .published
                .or(raw.published_at_camel)
                .or(raw.published_at)
                .or(raw.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "RawProject")]
/// One project listing entry.
pub struct Project {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Repository or homepage URL.
    pub url: Option<String>,
    /// Primary language or stack label.
    pub language: Option<String>,
    /// Star count when the upstream provides one.
    pub stars: Option<u64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawProject {
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    /// Browser URL on GitHub-shaped payloads, where `url` is the API endpoint.
    html_url: Option<String>,
    url: Option<String>,
    link: Option<String>,
    language: Option<String>,
    stars: Option<u64>,
    stargazers_count: Option<u64>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Self {
            name: raw.name.or(raw.title).unwrap_or_default(),
            description: raw.description,
            url: raw.html_url.or(raw.url).or(raw.link),
            language: raw.language,
            stars: raw.stars.or(raw.stargazers_count),
        }
    }
}

/// Extracts a typed list from an upstream payload.
///
/// Accepts a top-level array, or an object holding the array under one of `keys`. Entries that
/// fail to deserialize are skipped.
pub fn extract_list<T>(payload: &Value, keys: &[&str]) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let items = match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => keys
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    };
    items
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_from_top_level_array_or_keyed_object() {
        let wrapped = json!({ "posts": [{ "title": "One", "brief": "b" }, 7] });
        let posts: Vec<BlogPost> = extract_list(&wrapped, &["posts", "data"]);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].summary.as_deref(), Some("b"));

        let bare = json!([{ "name": "crate", "stargazers_count": 3 }]);
        let projects: Vec<Project> = extract_list(&bare, &["projects"]);
        assert_eq!(projects[0].stars, Some(3));
    }

    #[test]
    fn github_repo_objects_prefer_the_browser_url() {
        let payload = json!([{
            "id": 42,
            "name": "desktop",
            "full_name": "portfolio-example/desktop",
            "url": "https://api.github.com/repos/portfolio-example/desktop",
            "html_url": "https://github.com/portfolio-example/desktop",
            "description": "Browser desktop",
            "language": "Rust",
            "stargazers_count": 4,
            "watchers_count": 4
        }]);
        let projects: Vec<Project> = extract_list(&payload, &["projects"]);
        assert_eq!(
            projects,
            vec![Project {
                name: "desktop".to_string(),
                description: Some("Browser desktop".to_string()),
                url: Some("https://github.com/portfolio-example/desktop".to_string()),
                language: Some("Rust".to_string()),
                stars: Some(4),
            }]
        );
    }

    #[test]
    fn overlapping_blog_keys_resolve_in_order() {
        let payload = json!([{
            "title": "Shipping a desktop",
            "brief": "short",
            "description": "long",
            "publishedAt": "2024-03-01T00:00:00Z",
            "date": "2024-03-02"
        }]);
        let posts: Vec<BlogPost> = extract_list(&payload, &["posts"]);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].summary.as_deref(), Some("short"));
        assert_eq!(posts[0].published.as_deref(), Some("2024-03-01T00:00:00Z"));
    }

    #[test]
    fn unknown_shapes_yield_empty_lists() {
        let projects: Vec<Project> = extract_list(&json!("nope"), &["projects"]);
        assert!(projects.is_empty());
    }
}
