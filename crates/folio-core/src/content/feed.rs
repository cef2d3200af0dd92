//! Blog feed: the post list handed to the blog panel.
//!
//! Cards carry a `key` instead of embedded handlers; the page looks the
//! full post up with [`BlogFeed::detail`] when "read more" is clicked.

use super::markup::render_markup;
use super::post::PostRecord;
use super::source::{LoadedPosts, PostOrigin};

/// List view of one post
#[derive(Clone, Debug, PartialEq)]
pub struct PostCard {
    pub key: usize,
    pub title: String,
    pub date_label: String,
    pub tags: Vec<String>,
    pub excerpt: String,
}

/// Detail view of one post with rendered body HTML
#[derive(Clone, Debug, PartialEq)]
pub struct PostDetail {
    pub key: usize,
    pub title: String,
    pub date_label: String,
    pub tags: Vec<String>,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogFeed {
    posts: Vec<PostRecord>,
    origin: Option<PostOrigin>,
    excerpt_limit: usize,
}

impl BlogFeed {
    pub fn new(excerpt_limit: usize) -> Self {
        Self {
            posts: Vec::new(),
            origin: None,
            excerpt_limit,
        }
    }

    /// Replace the feed with a load result.
    ///
    /// An empty list leaves the feed (and the placeholder markup the page
    /// shows for an unloaded feed) untouched and returns `false`.
    pub fn apply(&mut self, loaded: LoadedPosts) -> bool {
        if loaded.posts.is_empty() {
            tracing::debug!(origin = loaded.origin.as_str(), "empty post list, keeping placeholder");
            return false;
        }
        self.posts = loaded.posts;
        self.origin = Some(loaded.origin);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<PostOrigin> {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn cards(&self) -> Vec<PostCard> {
        self.posts
            .iter()
            .enumerate()
            .map(|(key, post)| PostCard {
                key,
                title: post.title.clone(),
                date_label: post.formatted_date(),
                tags: post.tags.clone(),
                excerpt: truncate_excerpt(&post.excerpt, self.excerpt_limit),
            })
            .collect()
    }

    /// Full view for the card with `key`
    pub fn detail(&self, key: usize) -> Option<PostDetail> {
        let post = self.posts.get(key)?;
        Some(PostDetail {
            key,
            title: post.title.clone(),
            date_label: post.formatted_date(),
            tags: post.tags.clone(),
            html: render_markup(post.detail_source()),
        })
    }
}

/// Shorten `text` to at most `limit` characters, cutting at the last word
/// boundary and appending `...`
pub fn truncate_excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    let at_word_end = chars.next().map_or(true, char::is_whitespace);
    let cut = match head.rfind(char::is_whitespace) {
        _ if at_word_end => head.as_str(),
        Some(pos) if pos > 0 => &head[..pos],
        _ => head.as_str(),
    };
    format!("{}...", cut.trim_end())
}
