//! Core game logic - pure, deterministic, and testable
//!
//! Everything a falling-block game needs except input and drawing. No I/O
//! happens here: a host feeds commands and elapsed time in and reads grid
//! snapshots, counters and events out.
//!
//! # Module Structure
//!
//! - [`grid`]: the playing field store and its snapshots
//! - [`pieces`]: shape offsets per rotation state
//! - [`rng`]: seeded randomness and the lookahead queue
//! - [`piece`]: the active piece controller (move, rotate, fall, spawn)
//! - [`scoring`]: locking, row clearing and the score counters
//! - [`session`]: the game loop tying it all together
//! - [`config`]: session configuration and validation
//! - [`events`]: what happened, for hosts that log
//!
//! # Rules
//!
//! - Pieces are drawn uniformly (shape and color independently)
//! - Rotation turns about the pivot; by default a rotation that pokes out of
//!   a side wall is shifted back inside
//! - A piece that cannot fall on a gravity step locks where it is
//! - Clearing 1/2/3/4 rows in one lock scores 100/300/500/800
//! - The game ends when a new piece does not fit
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SessionConfig, TickOutcome};
//! use blockfall_types::{Command, DEFAULT_SPEED_MS};
//!
//! let mut game = GameSession::new(SessionConfig::default(), 12345).unwrap();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::HardDrop);
//!
//! // The dropped piece locks on the next gravity step
//! let outcome = game.tick(DEFAULT_SPEED_MS);
//! assert_eq!(outcome, TickOutcome::Locked { rows_cleared: 0 });
//! assert_eq!(game.grid().filled_count(), 8);
//! ```

pub mod config;
pub mod events;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, RotationPolicy, SessionConfig, SpawnSource};
pub use events::SessionEvent;
pub use grid::{CellChange, Grid, GridSnapshot};
pub use piece::ActivePiece;
pub use rng::{PieceQueue, QueueEntry, SimpleRng};
pub use scoring::{line_clear_score, Scoreboard};
pub use session::{GameSession, SessionState, TickOutcome};
