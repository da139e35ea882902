//! Soft drop latch.
//!
//! Turns a stream of soft-drop key presses, repeats and releases into exactly
//! one `SoftDropStart` and one `SoftDropEnd` per hold. Terminals without key
//! release events only send repeats while the key is held, so the latch also
//! ends the hold once no press has arrived within the grace period.

use crate::types::{Command, SOFT_DROP_GRACE_MS};

#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    idle_ms: u32,
    grace_ms: u32,
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            idle_ms: 0,
            grace_ms,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Key press or repeat. Only the first press of a hold starts soft drop.
    pub fn press(&mut self) -> Option<Command> {
        self.idle_ms = 0;
        if self.held {
            return None;
        }
        self.held = true;
        Some(Command::SoftDropStart)
    }

    /// Key release
    pub fn release(&mut self) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.idle_ms = 0;
        Some(Command::SoftDropEnd)
    }

    /// Advance the idle timer; ends the hold once the grace period passes.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.grace_ms {
            return self.release();
        }
        None
    }
}
