#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
mod context;
mod listeners;
mod pages;
mod theme;

use std::sync::OnceLock;

use dioxus::logger::tracing::Level;
use folio_core::{SiteConfig, TransitionMode};

/// Site configuration, fixed for the lifetime of the page
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (built on first use)
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| SiteConfig::with_mode(transition_mode()))
}

/// Display-toggle unless the binary was built with `scroll-transform`
fn transition_mode() -> TransitionMode {
    if cfg!(feature = "scroll-transform") {
        TransitionMode::ScrollTransform
    } else {
        TransitionMode::DisplayToggle
    }
}

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        // A subscriber is already installed; keep using it
        tracing::debug!("logger already initialized: {}", e);
    }

    let config = site_config();
    tracing::info!(
        mode = config.navigation.mode.as_str(),
        channels = ?config.input.enabled_channels(),
        "portfolio initialized"
    );

    dioxus::LaunchBuilder::web().launch(app::App);
}
