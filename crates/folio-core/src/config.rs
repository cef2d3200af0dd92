//! Site configuration.
//!
//! All tunables live here with their defaults. There is no configuration
//! file; the binary picks the navigation mode at build time and may
//! override individual fields before launch.

use std::time::Duration;

/// How section changes are presented
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransitionMode {
    /// Hide every panel and show the target one, then scroll to the top
    #[default]
    DisplayToggle,
    /// Slide a horizontal track by whole viewport widths, guarded by a
    /// fixed transition window
    ScrollTransform,
}

impl TransitionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionMode::DisplayToggle => "display-toggle",
            TransitionMode::ScrollTransform => "scroll-transform",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationConfig {
    pub mode: TransitionMode,
    /// Viewports at or below this width (px) use plain vertical scrolling
    pub breakpoint_px: f64,
    /// Length of the re-entrancy window in scroll-transform mode
    pub transition_guard: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mode: TransitionMode::default(),
            breakpoint_px: 968.0,
            transition_guard: Duration::from_millis(400),
        }
    }
}

impl NavigationConfig {
    /// Whether a viewport of `width` px gets the desktop interaction model
    pub fn is_wide(&self, width: f64) -> bool {
        width > self.breakpoint_px
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputConfig {
    pub keyboard: bool,
    pub wheel: bool,
    pub swipe: bool,
    /// Accumulated |deltaY| that triggers one step
    pub wheel_threshold: f64,
    /// Inactivity after which the wheel accumulator is cleared
    pub wheel_idle: Duration,
    /// Minimum dominant |deltaX| for a horizontal wheel step
    pub horizontal_wheel_min: f64,
    /// Minimum horizontal travel (px) for a swipe
    pub swipe_min_distance: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard: true,
            wheel: true,
            swipe: true,
            wheel_threshold: 100.0,
            wheel_idle: Duration::from_millis(150),
            horizontal_wheel_min: 50.0,
            swipe_min_distance: 50.0,
        }
    }
}

impl InputConfig {
    /// Names of the enabled optional channels, for the startup log line
    pub fn enabled_channels(&self) -> Vec<&'static str> {
        let mut channels = vec!["click"];
        if self.keyboard {
            channels.push("keyboard");
        }
        if self.wheel {
            channels.push("wheel");
        }
        if self.swipe {
            channels.push("swipe");
        }
        channels
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentConfig {
    pub posts_endpoint: String,
    /// Card excerpts longer than this many characters are truncated
    pub excerpt_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_endpoint: "/posts.json".to_string(),
            excerpt_limit: 160,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    /// How long a status banner stays visible
    pub banner_ttl: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            banner_ttl: Duration::from_secs(5),
        }
    }
}

/// Complete configuration for one page load
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub input: InputConfig,
    pub content: ContentConfig,
    pub form: FormConfig,
}

impl SiteConfig {
    /// Default configuration with the given navigation mode
    pub fn with_mode(mode: TransitionMode) -> Self {
        let mut config = Self::default();
        config.navigation.mode = mode;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.navigation.mode, TransitionMode::DisplayToggle);
        assert_eq!(config.navigation.transition_guard, Duration::from_millis(400));
        assert_eq!(config.input.wheel_idle, Duration::from_millis(150));
        assert_eq!(config.content.posts_endpoint, "/posts.json");
        assert_eq!(config.form.banner_ttl, Duration::from_secs(5));
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let nav = NavigationConfig::default();
        assert!(!nav.is_wide(968.0));
        assert!(nav.is_wide(969.0));
        assert!(!nav.is_wide(375.0));
    }

    #[test]
    fn test_enabled_channels() {
        let mut input = InputConfig::default();
        assert_eq!(input.enabled_channels(), ["click", "keyboard", "wheel", "swipe"]);
        input.wheel = false;
        assert_eq!(input.enabled_channels(), ["click", "keyboard", "swipe"]);
    }

    #[test]
    fn test_with_mode() {
        let config = SiteConfig::with_mode(TransitionMode::ScrollTransform);
        assert_eq!(config.navigation.mode.as_str(), "scroll-transform");
        assert_eq!(config.input, InputConfig::default());
    }
}
