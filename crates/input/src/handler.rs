//! Terminal input handler.
//!
//! Routes crossterm events to the key map, the soft drop latch and the swipe
//! tracker, and yields at most one command per event.

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::gesture::SwipeTracker;
use crate::map::{is_soft_drop_key, map_key};
use crate::soft_drop::SoftDropLatch;
use crate::types::{Command, SOFT_DROP_GRACE_MS};

/// Dead zone for mouse gestures, in terminal cells.
pub const TERMINAL_SWIPE_DEAD_ZONE: i32 = 2;

#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop: SoftDropLatch,
    swipe: SwipeTracker,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(SOFT_DROP_GRACE_MS, TERMINAL_SWIPE_DEAD_ZONE)
    }

    pub fn with_config(grace_ms: u32, dead_zone: i32) -> Self {
        Self {
            soft_drop: SoftDropLatch::with_grace_ms(grace_ms),
            swipe: SwipeTracker::new(dead_zone),
        }
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop.is_held()
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Command> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            // Losing focus means the release will never arrive.
            Event::FocusLost => self.soft_drop.release(),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        match map_key(key)? {
            Command::SoftDropStart => self.soft_drop.press(),
            Command::SoftDropEnd => self.soft_drop.release(),
            command => Some(command),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Command> {
        let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.swipe.end(x, y),
            _ => None,
        }
    }

    /// Advance timers; may end a soft drop whose key went quiet.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        self.soft_drop.update(elapsed_ms)
    }
}
