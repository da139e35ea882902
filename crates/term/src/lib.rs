//! Terminal rendering for the falling-block game.
//!
//! Renders into a plain framebuffer that is diffed and flushed to the
//! terminal by [`TerminalRenderer`]. Grid cells are drawn two columns wide
//! to compensate for terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use palette::style_for;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
