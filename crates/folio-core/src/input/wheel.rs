//! Pointer wheel channel.
//!
//! One wheel event produces at most one step. An event whose horizontal
//! delta dominates and exceeds the horizontal minimum is a trackpad swipe
//! and steps immediately without touching the accumulator. Every other
//! event feeds the vertical accumulator.

use super::NavCommand;

/// Result of feeding one wheel event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelStep {
    pub command: Option<NavCommand>,
    /// The caller must (re)start the inactivity timer that calls
    /// [`WheelAccumulator::reset`]
    pub arm_idle_reset: bool,
}

/// Smooths noisy vertical wheel input into discrete steps
#[derive(Clone, Debug, PartialEq)]
pub struct WheelAccumulator {
    threshold: f64,
    horizontal_min: f64,
    total: f64,
}

impl WheelAccumulator {
    pub fn new(threshold: f64, horizontal_min: f64) -> Self {
        Self {
            threshold,
            horizontal_min,
            total: 0.0,
        }
    }

    /// Running total of absolute vertical delta
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn push(&mut self, delta_x: f64, delta_y: f64) -> WheelStep {
        if delta_x.abs() > delta_y.abs() && delta_x.abs() > self.horizontal_min {
            let command = if delta_x > 0.0 {
                NavCommand::Next
            } else {
                NavCommand::Previous
            };
            return WheelStep {
                command: Some(command),
                arm_idle_reset: false,
            };
        }

        self.total += delta_y.abs();

        let mut command = None;
        if self.total > self.threshold {
            if delta_y > 0.0 {
                command = Some(NavCommand::Next);
            } else if delta_y < 0.0 {
                command = Some(NavCommand::Previous);
            }
            self.total = 0.0;
        }

        WheelStep {
            command,
            arm_idle_reset: true,
        }
    }

    /// Inactivity timeout elapsed
    pub fn reset(&mut self) {
        self.total = 0.0;
    }
}

/// Whether a scroll container at `scroll_top` can still move in the
/// direction of `delta_y`. Such events belong to the container, not to
/// section navigation. Mostly-horizontal events are never absorbed.
pub fn absorbs_wheel(
    scroll_top: f64,
    scroll_height: f64,
    client_height: f64,
    delta_x: f64,
    delta_y: f64,
) -> bool {
    if delta_x.abs() > delta_y.abs() {
        return false;
    }
    // One pixel of slack for fractional scroll offsets
    if delta_y > 0.0 {
        scroll_top + client_height < scroll_height - 1.0
    } else if delta_y < 0.0 {
        scroll_top > 1.0
    } else {
        false
    }
}
