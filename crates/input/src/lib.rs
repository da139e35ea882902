//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::Command`]s. Keyboard input goes
//! through a fixed key table, left-button mouse drags are classified as
//! swipes, and soft drop is latched so terminals without key-release events
//! still end it.

pub mod gesture;
pub mod handler;
pub mod map;
pub mod soft_drop;

pub use blockfall_types as types;

pub use gesture::{classify_swipe, SwipeTracker};
pub use handler::InputHandler;
pub use map::{map_key, should_quit};
pub use soft_drop::SoftDropLatch;
