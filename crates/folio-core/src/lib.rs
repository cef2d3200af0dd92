//! Academic Portfolio Core Library
//!
//! Browser-independent behavior of the portfolio site: which section is
//! current and how input moves between sections, where blog posts come
//! from and how they are rendered, and how the contact form is validated.
//!
//! ## Overview
//!
//! The page is a fixed sequence of six sections. A single
//! [`NavigationController`] owns the current section; keyboard, wheel,
//! touch and click input reach it only through the [`InputRouter`], which
//! applies the responsive breakpoint and the transition guard. Everything
//! the page shows about navigation (active panel and button, progress,
//! section number, title) is derived from [`NavigationController::view`].
//!
//! Posts are fetched once per page load. Any failure yields the built-in
//! posts; there is no error path visible to the visitor.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{InputEvent, InputRouter, NavigationController, Section, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let mut nav = NavigationController::new(&config.navigation);
//! let mut router = InputRouter::new(&config);
//!
//! let dispatch = router.dispatch(InputEvent::Key("End".into()), 1280.0, &mut nav);
//! assert!(dispatch.prevent_default);
//! assert_eq!(nav.current(), Section::Contact);
//! assert_eq!(nav.view().section_label, "06");
//! ```

pub mod banner;
pub mod config;
pub mod content;
pub mod drawer;
pub mod error;
pub mod form;
pub mod input;
pub mod modal;
pub mod navigation;
pub mod sections;

// Re-exports
pub use banner::{Banner, BannerKind, BannerSlot};
pub use config::{ContentConfig, FormConfig, InputConfig, NavigationConfig, SiteConfig, TransitionMode};
pub use content::{
    fallback_posts, load_posts, render_markup, BlogFeed, LoadedPosts, PostCard, PostDetail,
    PostFetcher, PostOrigin, PostRecord,
};
pub use drawer::MobileDrawer;
pub use error::{FolioError, FolioResult};
pub use form::{ContactForm, FieldKind, FieldSpec, FieldStatus, FormField, SubmitOutcome};
pub use input::{absorbs_wheel, Dispatch, InputEvent, InputRouter, NavCommand, StepDirection};
pub use modal::{CloseReason, ModalController};
pub use navigation::{
    reveal_delay, Depth, NavigationController, NavigationState, NavigationView, PanelState,
    ScrollEffect, Transition,
};
pub use sections::{Section, SECTION_COUNT};
