//! End-to-end tests for the blog content pipeline:
//! fetch (or fallback) → feed → cards → detail markup.

use std::cell::Cell;

use folio_core::content::{load_posts, BlogFeed, PostFetcher, PostOrigin};
use folio_core::{FolioError, FolioResult};

/// In-memory fetcher that counts how often it was asked
struct StaticFetcher {
    response: Result<&'static str, u16>,
    calls: Cell<usize>,
}

impl StaticFetcher {
    fn ok(body: &'static str) -> Self {
        Self {
            response: Ok(body),
            calls: Cell::new(0),
        }
    }

    fn status(code: u16) -> Self {
        Self {
            response: Err(code),
            calls: Cell::new(0),
        }
    }
}

impl PostFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> FolioResult<String> {
        assert_eq!(url, "/posts.json");
        self.calls.set(self.calls.get() + 1);
        match self.response {
            Ok(body) => Ok(body.to_string()),
            Err(code) => Err(FolioError::HttpStatus(code)),
        }
    }
}

struct OfflineFetcher;

impl PostFetcher for OfflineFetcher {
    async fn fetch(&self, _url: &str) -> FolioResult<String> {
        Err(FolioError::Network("connection refused".to_string()))
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt::try_init();
}

#[tokio::test]
async fn test_network_failure_renders_fallback_cards() {
    init_logging();
    let loaded = load_posts(&OfflineFetcher, "/posts.json").await;
    assert_eq!(loaded.origin, PostOrigin::Fallback);

    let mut feed = BlogFeed::new(160);
    assert!(feed.apply(loaded));
    assert_eq!(feed.cards().len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_single_attempt() {
    init_logging();
    let fetcher = StaticFetcher::status(503);
    let loaded = load_posts(&fetcher, "/posts.json").await;
    assert_eq!(loaded.origin, PostOrigin::Fallback);
    assert_eq!(loaded.posts.len(), 2);
    assert_eq!(fetcher.calls.get(), 1);
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let fetcher = StaticFetcher::ok("<!doctype html><p>Not Found</p>");
    let loaded = load_posts(&fetcher, "/posts.json").await;
    assert_eq!(loaded.origin, PostOrigin::Fallback);
    assert_eq!(loaded.posts.len(), 2);
}

#[tokio::test]
async fn test_empty_post_list_leaves_container_alone() {
    let fetcher = StaticFetcher::ok(r#"{"posts": []}"#);
    let loaded = load_posts(&fetcher, "/posts.json").await;
    assert_eq!(loaded.origin, PostOrigin::Remote);

    let mut feed = BlogFeed::new(160);
    assert!(!feed.apply(loaded));
    assert!(!feed.is_loaded());
    assert!(feed.cards().is_empty());
}

#[tokio::test]
async fn test_remote_posts_render_cards_and_detail() {
    let fetcher = StaticFetcher::ok(
        r##"{"posts": [
            {"title": "Fatigue Models", "date": "2025-03-02", "excerpt": "A look at models.",
             "tags": "fatigue, modeling", "content": "# Fatigue Models\n\nSome **bold** text\n\n- one\n- two"},
            {"title": "Notes", "date": "2025-01-15", "excerpt": "Short notes.", "tags": ["notes"]},
            {"title": "Third", "date": "2024-11-30", "excerpt": "Third post."}
        ]}"##,
    );
    let loaded = load_posts(&fetcher, "/posts.json").await;
    assert_eq!(loaded.origin, PostOrigin::Remote);

    let mut feed = BlogFeed::new(160);
    feed.apply(loaded);
    let cards = feed.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].date_label, "March 2, 2025");
    assert_eq!(cards[0].tags, ["fatigue", "modeling"]);
    assert!(cards[2].tags.is_empty());

    let detail = feed.detail(0).unwrap();
    assert_eq!(
        detail.html,
        "<h1>Fatigue Models</h1>\n<p>Some <strong>bold</strong> text</p>\n<ul><li>one</li><li>two</li></ul>"
    );

    // No content: the excerpt is the detail body
    assert_eq!(feed.detail(1).unwrap().html, "<p>Short notes.</p>");
}
