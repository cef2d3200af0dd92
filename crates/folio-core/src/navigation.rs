//! Section navigation state machine.
//!
//! The controller owns the single [`NavigationState`] of the page. Every
//! interaction channel goes through [`NavigationController::go_to_section`]
//! (or the `next`/`previous`/`first`/`last` wrappers); nothing else mutates
//! the current section.
//!
//! The controller does no rendering. Each accepted transition returns a
//! [`Transition`] describing the scroll effect the page has to perform and,
//! in scroll-transform mode, how long the guard must stay up before
//! [`NavigationController::release_transition`] is called. Everything
//! derived from the state (active panel, nav buttons, progress, title) is
//! read from [`NavigationController::view`].

use std::time::Duration;

use crate::config::{NavigationConfig, TransitionMode};
use crate::sections::{Section, SECTION_COUNT};

/// Delay before the first card of a freshly shown panel is revealed
const REVEAL_BASE: Duration = Duration::from_millis(300);
/// Additional delay per card position
const REVEAL_STEP: Duration = Duration::from_millis(100);

/// The page-wide navigation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Section,
    /// Only ever true inside the scroll-transform guard window
    pub transitioning: bool,
}

/// Scroll work the page performs after a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEffect {
    /// Smooth-scroll the viewport back to the top
    ToTop,
    /// Smooth-scroll the section's anchor into view (narrow viewports)
    IntoView(Section),
    /// Slide the horizontal track to `offset_vw` viewport widths
    Track { offset_vw: i32 },
}

/// An accepted section change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
    pub scroll: ScrollEffect,
    /// When set, the caller must call `release_transition` after this long
    pub guard: Option<Duration>,
}

/// Depth effect applied to panels around the current one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Depth {
    pub scale: f64,
    pub opacity: f64,
}

impl Depth {
    /// Depth for a panel `distance` sections away from the current one
    pub fn for_distance(distance: usize) -> Self {
        if distance == 0 {
            return Depth { scale: 1.0, opacity: 1.0 };
        }
        let d = distance as f64;
        Depth {
            scale: 1.0 - d * 0.05,
            opacity: (1.0 - d * 0.3).max(0.3),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub section: Section,
    pub active: bool,
    /// Present only in scroll-transform mode
    pub depth: Option<Depth>,
}

/// Everything the page derives from the navigation state
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationView {
    pub current: Section,
    pub panels: Vec<PanelState>,
    pub nav_active: [bool; SECTION_COUNT],
    /// Zero-padded 1-based section number, e.g. `"03"`
    pub section_label: String,
    /// `(current + 1) / N`
    pub progress: f64,
    pub title: &'static str,
    pub at_start: bool,
    pub at_end: bool,
    /// Horizontal track offset in viewport widths (scroll-transform only)
    pub track_offset_vw: Option<i32>,
}

impl NavigationView {
    /// Progress as a CSS percentage width
    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }

    /// CSS transform for the horizontal track. Narrow viewports always get
    /// an untranslated track.
    pub fn track_transform(&self, wide: bool) -> Option<String> {
        self.track_offset_vw.map(|offset| {
            let offset = if wide { offset } else { 0 };
            format!("translateX({}vw)", offset)
        })
    }
}

/// Owner of the navigation state
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationController {
    state: NavigationState,
    mode: TransitionMode,
    guard: Duration,
}

impl NavigationController {
    /// Start on the first section
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            state: NavigationState::default(),
            mode: config.mode,
            guard: config.transition_guard,
        }
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current(&self) -> Section {
        self.state.current
    }

    pub fn current_index(&self) -> usize {
        self.state.current.index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    /// Move to section `target`.
    ///
    /// Out-of-range targets are ignored. In scroll-transform mode a
    /// self-transition or a request inside the guard window is rejected.
    pub fn go_to_section(&mut self, target: usize) -> Option<Transition> {
        let Some(to) = Section::from_index(target) else {
            tracing::debug!(target, "ignoring out-of-range section");
            return None;
        };
        let from = self.state.current;

        let transition = match self.mode {
            TransitionMode::DisplayToggle => {
                self.state.current = to;
                Transition {
                    from,
                    to,
                    scroll: ScrollEffect::ToTop,
                    guard: None,
                }
            }
            TransitionMode::ScrollTransform => {
                if to == from || self.state.transitioning {
                    tracing::debug!(%to, transitioning = self.state.transitioning, "transition rejected");
                    return None;
                }
                // Raised before the caller starts any animated work.
                self.state.transitioning = true;
                self.state.current = to;
                Transition {
                    from,
                    to,
                    scroll: ScrollEffect::Track {
                        offset_vw: track_offset(to),
                    },
                    guard: Some(self.guard),
                }
            }
        };

        tracing::debug!(%from, %to, mode = self.mode.as_str(), "section transition");
        Some(transition)
    }

    /// Step forward; no-op on the last section
    pub fn next(&mut self) -> Option<Transition> {
        if self.state.current.is_last() {
            return None;
        }
        self.go_to_section(self.current_index() + 1)
    }

    /// Step back; no-op on the first section
    pub fn previous(&mut self) -> Option<Transition> {
        if self.state.current.is_first() {
            return None;
        }
        self.go_to_section(self.current_index() - 1)
    }

    pub fn first(&mut self) -> Option<Transition> {
        self.go_to_section(0)
    }

    pub fn last(&mut self) -> Option<Transition> {
        self.go_to_section(SECTION_COUNT - 1)
    }

    /// Narrow-viewport navigation: mark `target` current and scroll its
    /// anchor into view, bypassing the track and the guard.
    pub fn jump_to_anchor(&mut self, target: usize) -> Option<Transition> {
        let to = Section::from_index(target)?;
        let from = self.state.current;
        self.state.current = to;
        tracing::debug!(%from, %to, "anchor jump");
        Some(Transition {
            from,
            to,
            scroll: ScrollEffect::IntoView(to),
            guard: None,
        })
    }

    /// Close the guard window opened by a scroll-transform transition
    pub fn release_transition(&mut self) {
        self.state.transitioning = false;
    }

    pub fn view(&self) -> NavigationView {
        let current = self.state.current;
        let index = current.index();
        let transform = self.mode == TransitionMode::ScrollTransform;

        let panels = Section::ALL
            .iter()
            .map(|&section| PanelState {
                section,
                active: section == current,
                depth: transform.then(|| Depth::for_distance(section.index().abs_diff(index))),
            })
            .collect();

        let mut nav_active = [false; SECTION_COUNT];
        nav_active[index] = true;

        NavigationView {
            current,
            panels,
            nav_active,
            section_label: format!("{:02}", index + 1),
            progress: (index + 1) as f64 / SECTION_COUNT as f64,
            title: current.title(),
            at_start: current.is_first(),
            at_end: current.is_last(),
            track_offset_vw: transform.then(|| track_offset(current)),
        }
    }
}

fn track_offset(section: Section) -> i32 {
    -(section.index() as i32) * 100
}

/// Entrance delay for the card at `position` inside a newly shown panel
pub fn reveal_delay(position: usize) -> Duration {
    REVEAL_BASE + REVEAL_STEP * position as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(mode: TransitionMode) -> NavigationController {
        NavigationController::new(&NavigationConfig {
            mode,
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_on_home() {
        let nav = controller(TransitionMode::DisplayToggle);
        assert_eq!(nav.current(), Section::Home);
        let view = nav.view();
        assert_eq!(view.section_label, "01");
        assert_eq!(view.title, "Home - Academic Portfolio");
        assert!(view.at_start);
        assert!(!view.at_end);
    }

    #[test]
    fn test_display_toggle_goto() {
        let mut nav = controller(TransitionMode::DisplayToggle);
        let t = nav.go_to_section(3).unwrap();
        assert_eq!(t.from, Section::Home);
        assert_eq!(t.to, Section::Blog);
        assert_eq!(t.scroll, ScrollEffect::ToTop);
        assert_eq!(t.guard, None);
        assert!(!nav.is_transitioning());

        let view = nav.view();
        assert_eq!(view.section_label, "04");
        assert!((view.progress - 4.0 / 6.0).abs() < f64::EPSILON);
        assert_eq!(view.panels.iter().filter(|p| p.active).count(), 1);
        assert!(view.panels[3].active);
        assert_eq!(view.track_offset_vw, None);
        assert!(view.panels.iter().all(|p| p.depth.is_none()));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut nav = controller(TransitionMode::DisplayToggle);
        nav.go_to_section(2);
        let before = nav.clone();
        assert!(nav.go_to_section(6).is_none());
        assert!(nav.go_to_section(usize::MAX).is_none());
        assert_eq!(nav, before);
    }

    #[test]
    fn test_display_toggle_self_transition_keeps_view() {
        let mut nav = controller(TransitionMode::DisplayToggle);
        nav.go_to_section(1);
        let before = nav.view();
        assert!(nav.go_to_section(1).is_some());
        assert_eq!(nav.view(), before);
    }

    #[test]
    fn test_bounds() {
        let mut nav = controller(TransitionMode::DisplayToggle);
        assert!(nav.previous().is_none());
        assert_eq!(nav.current(), Section::Home);

        nav.last();
        assert_eq!(nav.current(), Section::Contact);
        assert!(nav.next().is_none());
        assert_eq!(nav.current(), Section::Contact);

        nav.previous();
        assert_eq!(nav.current(), Section::Cv);
        nav.first();
        assert_eq!(nav.current(), Section::Home);
    }

    #[test]
    fn test_scroll_transform_guard() {
        let mut nav = controller(TransitionMode::ScrollTransform);
        let t = nav.next().unwrap();
        assert_eq!(t.scroll, ScrollEffect::Track { offset_vw: -100 });
        assert_eq!(t.guard, Some(Duration::from_millis(400)));
        assert!(nav.is_transitioning());

        // Inside the window every request is dropped
        assert!(nav.next().is_none());
        assert!(nav.go_to_section(4).is_none());
        assert_eq!(nav.current(), Section::Research);

        nav.release_transition();
        assert!(nav.go_to_section(4).is_some());
        assert_eq!(nav.view().track_offset_vw, Some(-400));
    }

    #[test]
    fn test_scroll_transform_rejects_self_transition() {
        let mut nav = controller(TransitionMode::ScrollTransform);
        assert!(nav.go_to_section(0).is_none());
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_anchor_jump_bypasses_guard() {
        let mut nav = controller(TransitionMode::ScrollTransform);
        let t = nav.jump_to_anchor(5).unwrap();
        assert_eq!(t.scroll, ScrollEffect::IntoView(Section::Contact));
        assert_eq!(t.guard, None);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.view().section_label, "06");
        assert!(nav.jump_to_anchor(9).is_none());
    }

    #[test]
    fn test_depth_effect() {
        let mut nav = controller(TransitionMode::ScrollTransform);
        nav.go_to_section(2);
        let view = nav.view();
        let depths: Vec<_> = view.panels.iter().map(|p| p.depth.unwrap()).collect();
        assert_eq!(depths[2], Depth { scale: 1.0, opacity: 1.0 });
        assert!((depths[1].scale - 0.95).abs() < 1e-9);
        assert!((depths[1].opacity - 0.7).abs() < 1e-9);
        // Opacity floors at 0.3
        assert!((depths[5].opacity - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_track_transform_on_narrow_viewport() {
        let mut nav = controller(TransitionMode::ScrollTransform);
        nav.go_to_section(2);
        let view = nav.view();
        assert_eq!(view.track_transform(true).as_deref(), Some("translateX(-200vw)"));
        assert_eq!(view.track_transform(false).as_deref(), Some("translateX(0vw)"));
    }

    #[test]
    fn test_reveal_delay() {
        assert_eq!(reveal_delay(0), Duration::from_millis(300));
        assert_eq!(reveal_delay(3), Duration::from_millis(600));
    }
}
