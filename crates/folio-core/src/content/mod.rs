//! Blog content pipeline.
//!
//! ```text
//! PostFetcher ──load_posts──▶ LoadedPosts ──BlogFeed::apply──▶ cards / detail
//!                 │                                              │
//!                 └─ failure: built-in posts                     └─ render_markup
//! ```

pub mod feed;
pub mod markup;
pub mod post;
pub mod source;

pub use feed::{truncate_excerpt, BlogFeed, PostCard, PostDetail};
pub use markup::{escape_html, render_markup};
pub use post::{split_tags, PostRecord, PostsDocument};
pub use source::{fallback_posts, load_posts, parse_posts, LoadedPosts, PostFetcher, PostOrigin};
