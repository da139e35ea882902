//! Swipe gestures.
//!
//! A gesture is a press point and a release point. Short gestures are taps,
//! longer ones are classified by their dominant axis.

use crate::types::{Command, DEFAULT_SWIPE_DEAD_ZONE};

/// Classify a gesture by its displacement.
///
/// | Gesture | Command |
/// |---------|---------|
/// | `abs(dx) + abs(dy) < dead_zone` | `RotateCw` |
/// | mostly horizontal, right | `MoveRight` |
/// | mostly horizontal, left | `MoveLeft` |
/// | mostly downward | `HardDrop` |
/// | mostly upward | none |
pub fn classify_swipe(dx: i32, dy: i32, dead_zone: i32) -> Option<Command> {
    if dx.abs() + dy.abs() < dead_zone {
        Some(Command::RotateCw)
    } else if dx.abs() > dy.abs() {
        if dx > 0 {
            Some(Command::MoveRight)
        } else {
            Some(Command::MoveLeft)
        }
    } else if dy > 0 {
        Some(Command::HardDrop)
    } else {
        None
    }
}

/// Tracks one gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    dead_zone: i32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_DEAD_ZONE)
    }
}

impl SwipeTracker {
    pub fn new(dead_zone: i32) -> Self {
        Self {
            start: None,
            dead_zone,
        }
    }

    /// Record where the gesture began. A second begin restarts the gesture.
    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture. Releases without a recorded start are ignored.
    pub fn end(&mut self, x: i32, y: i32) -> Option<Command> {
        let (x0, y0) = self.start.take()?;
        classify_swipe(x - x0, y - y0, self.dead_zone)
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}
