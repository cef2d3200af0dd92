//! Post source: one fetch attempt, built-in posts on any failure.

use std::future::Future;

use super::post::{PostRecord, PostsDocument};
use crate::error::FolioResult;

/// Transport used to read the posts document.
///
/// Implementations return the response body for a success status and an
/// error for everything else (network failure, non-2xx status).
pub trait PostFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = FolioResult<String>>;
}

/// Where the loaded posts came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostOrigin {
    Remote,
    Fallback,
}

impl PostOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostOrigin::Remote => "remote",
            PostOrigin::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPosts {
    pub posts: Vec<PostRecord>,
    pub origin: PostOrigin,
}

/// Parse a `{ "posts": [...] }` document
pub fn parse_posts(body: &str) -> FolioResult<Vec<PostRecord>> {
    let document: PostsDocument = serde_json::from_str(body)?;
    Ok(document.posts)
}

/// Posts shown when the endpoint is unavailable
pub fn fallback_posts() -> Vec<PostRecord> {
    vec![
        PostRecord {
            title: "Welcome to My Research Blog".to_string(),
            date: "2025-01-15".to_string(),
            excerpt: "Welcome to my research blog where I'll be sharing insights from my work in \
                      neuromechanics, ergonomics, and fatigue prediction modeling."
                .to_string(),
            tags: vec![
                "research".to_string(),
                "biomechanics".to_string(),
                "ergonomics".to_string(),
            ],
            content: None,
        },
        PostRecord {
            title: "Understanding Motor Unit Fatigue".to_string(),
            date: "2024-12-10".to_string(),
            excerpt: "Exploring the complexities of motor unit fatigue and how we can develop \
                      better predictive models for real-world applications."
                .to_string(),
            tags: vec![
                "motor-units".to_string(),
                "fatigue".to_string(),
                "modeling".to_string(),
            ],
            content: None,
        },
    ]
}

/// Fetch the posts document once. There is no retry: any failure yields
/// the built-in posts.
pub async fn load_posts<F: PostFetcher>(fetcher: &F, endpoint: &str) -> LoadedPosts {
    let result = match fetcher.fetch(endpoint).await {
        Ok(body) => parse_posts(&body),
        Err(e) => Err(e),
    };

    match result {
        Ok(posts) => {
            tracing::info!(count = posts.len(), endpoint, "loaded posts");
            LoadedPosts {
                posts,
                origin: PostOrigin::Remote,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, endpoint, "posts unavailable, using built-in posts");
            LoadedPosts {
                posts: fallback_posts(),
                origin: PostOrigin::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posts() {
        let body = r##"{"posts":[{"title":"A","date":"2025-02-01","excerpt":"x","tags":"a,b","content":"# A"}]}"##;
        let posts = parse_posts(body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].tags, ["a", "b"]);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_posts(r#"[{"title":"A"}]"#).is_err());
        assert!(parse_posts(r#"{"items":[]}"#).is_err());
        assert!(parse_posts("<html>").is_err());
    }

    #[test]
    fn test_fallback_posts() {
        let posts = fallback_posts();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| !p.tags.is_empty()));
    }
}
