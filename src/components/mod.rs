//! UI components for the portfolio page.

mod blog;
mod contact;
mod mobile_nav;
mod nav_header;
mod step_buttons;

pub use blog::{BlogGrid, PostModal};
pub use contact::ContactFormView;
pub use nav_header::NavHeader;
pub use step_buttons::StepButtons;
