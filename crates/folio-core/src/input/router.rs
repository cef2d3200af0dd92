//! Single dispatch point for raw input events

use super::{command_for_key, SwipeTracker, WheelAccumulator};
use crate::config::{InputConfig, NavigationConfig, SiteConfig};
use crate::navigation::{NavigationController, Transition};

/// Direction of the on-screen step buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Previous,
    Next,
}

/// Raw interaction events, already stripped of browser types
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// `KeyboardEvent.key`
    Key(String),
    /// A key typed into an editable element; never navigates
    FieldKey(String),
    Wheel { delta_x: f64, delta_y: f64 },
    TouchStart { x: f64, y: f64 },
    TouchEnd { x: f64, y: f64 },
    /// Click on the nav button for section `index`
    NavClick(usize),
    /// Click on a previous/next step button
    StepClick(StepDirection),
}

/// What the page has to do after an event was routed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Suppress the browser default action for the event
    pub prevent_default: bool,
    pub transition: Option<Transition>,
    /// Restart the wheel inactivity timer
    pub arm_wheel_reset: bool,
}

impl Dispatch {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled(transition: Option<Transition>) -> Self {
        Self {
            prevent_default: true,
            transition,
            arm_wheel_reset: false,
        }
    }
}

/// Routes input events to the navigation controller.
///
/// Keyboard, wheel and swipe only act above the breakpoint, never while
/// a transition is in flight, and never while the router is paused for an
/// overlay. Clicks always act; on narrow viewports a nav click scrolls to
/// the section anchor instead of transitioning.
#[derive(Clone, Debug)]
pub struct InputRouter {
    input: InputConfig,
    navigation: NavigationConfig,
    wheel: WheelAccumulator,
    swipe: SwipeTracker,
    /// Set while an overlay owns keyboard, wheel and touch input
    paused: bool,
}

impl InputRouter {
    pub fn new(config: &SiteConfig) -> Self {
        let input = config.input.clone();
        Self {
            wheel: WheelAccumulator::new(input.wheel_threshold, input.horizontal_wheel_min),
            swipe: SwipeTracker::new(input.swipe_min_distance),
            navigation: config.navigation.clone(),
            input,
            paused: false,
        }
    }

    /// Pause or resume gesture and key routing. Pausing drops any partial
    /// wheel total and swipe so nothing carries over the overlay.
    pub fn set_paused(&mut self, paused: bool) {
        if paused && !self.paused {
            self.wheel.reset();
            self.swipe.cancel();
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn dispatch(
        &mut self,
        event: InputEvent,
        viewport_width: f64,
        nav: &mut NavigationController,
    ) -> Dispatch {
        let wide = self.navigation.is_wide(viewport_width);

        match event {
            InputEvent::NavClick(index) => {
                let transition = if wide {
                    nav.go_to_section(index)
                } else {
                    nav.jump_to_anchor(index)
                };
                Dispatch::handled(transition)
            }
            InputEvent::StepClick(direction) => {
                let transition = match direction {
                    StepDirection::Previous => nav.previous(),
                    StepDirection::Next => nav.next(),
                };
                Dispatch::handled(transition)
            }
            InputEvent::FieldKey(_) => Dispatch::ignored(),
            InputEvent::Key(_)
            | InputEvent::Wheel { .. }
            | InputEvent::TouchStart { .. }
            | InputEvent::TouchEnd { .. }
                if self.paused =>
            {
                Dispatch::ignored()
            }
            InputEvent::TouchStart { x, y } => {
                if self.input.swipe && wide {
                    self.swipe.start(x, y);
                }
                Dispatch::ignored()
            }
            _ if !wide => Dispatch::ignored(),
            _ if nav.is_transitioning() => {
                tracing::trace!("input dropped during transition");
                Dispatch::ignored()
            }
            InputEvent::Key(key) => {
                if !self.input.keyboard {
                    return Dispatch::ignored();
                }
                match command_for_key(&key) {
                    Some(command) => Dispatch::handled(command.apply(nav)),
                    None => Dispatch::ignored(),
                }
            }
            InputEvent::Wheel { delta_x, delta_y } => {
                if !self.input.wheel {
                    return Dispatch::ignored();
                }
                let step = self.wheel.push(delta_x, delta_y);
                Dispatch {
                    prevent_default: true,
                    transition: step.command.and_then(|c| c.apply(nav)),
                    arm_wheel_reset: step.arm_idle_reset,
                }
            }
            InputEvent::TouchEnd { x, y } => {
                if !self.input.swipe {
                    return Dispatch::ignored();
                }
                let transition = self.swipe.end(x, y).and_then(|c| c.apply(nav));
                Dispatch {
                    transition,
                    ..Dispatch::ignored()
                }
            }
        }
    }

    /// Wheel inactivity timer fired
    pub fn reset_wheel(&mut self) {
        self.wheel.reset();
    }
}
