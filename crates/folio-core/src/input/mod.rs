//! Input adapters.
//!
//! Each adapter turns one raw interaction channel into [`NavCommand`]s.
//! The adapters hold only their own gesture state; the [`InputRouter`]
//! applies the responsive gate and the transition guard and is the only
//! place that calls into the navigation controller.

mod keyboard;
mod router;
mod swipe;
mod wheel;

pub use keyboard::command_for_key;
pub use router::{Dispatch, InputEvent, InputRouter, StepDirection};
pub use swipe::SwipeTracker;
pub use wheel::{absorbs_wheel, WheelAccumulator, WheelStep};

use crate::navigation::{NavigationController, Transition};

/// A navigation request produced by an adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
}

impl NavCommand {
    /// Apply the command to the controller
    pub fn apply(self, nav: &mut NavigationController) -> Option<Transition> {
        match self {
            NavCommand::Previous => nav.previous(),
            NavCommand::Next => nav.next(),
            NavCommand::First => nav.first(),
            NavCommand::Last => nav.last(),
            NavCommand::GoTo(index) => nav.go_to_section(index),
        }
    }
}
