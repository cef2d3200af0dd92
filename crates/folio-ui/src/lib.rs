//! Academic Portfolio UI Components
//!
//! Presentational Dioxus components shared by the portfolio pages. They
//! hold no navigation or content state of their own; callers pass values
//! in and receive events back.
//!
//! ## Palette
//!
//! - **Indigo (#4f46e5)**: active navigation, progress, links
//! - **Violet (#7c3aed)**: progress gradient end
//! - **Green (#22c55e)** / **Red (#ef4444)**: field and banner validity

pub mod components;

pub use components::*;
