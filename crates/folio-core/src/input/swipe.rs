//! Touch swipe channel

use super::NavCommand;

/// Tracks one touch gesture from start to end
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    min_distance: f64,
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    /// Record the first touch point
    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Forget a gesture in progress
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Finish the gesture. A mostly-horizontal travel longer than the
    /// minimum distance becomes a step: rightward is previous, leftward
    /// is next.
    pub fn end(&mut self, x: f64, y: f64) -> Option<NavCommand> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs() > dy.abs() && dx.abs() > self.min_distance {
            if dx > 0.0 {
                Some(NavCommand::Previous)
            } else {
                Some(NavCommand::Next)
            }
        } else {
            None
        }
    }
}
