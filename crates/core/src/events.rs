//! Session events
//!
//! A session records what happened during each `apply`/`tick` call. Hosts
//! drain them with `GameSession::take_events` and may log them; the JSON form
//! is one object per event tagged by `event`.

use serde::Serialize;

use blockfall_types::{Point, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new piece entered the grid
    Spawned { kind: ShapeKind, color: u8 },
    /// The active piece came to rest and turned into dropped cells
    Locked { kind: ShapeKind, cells: [Point; 4] },
    /// One or more full rows were removed after a lock
    LinesCleared {
        rows: Vec<usize>,
        points: u32,
        score: u32,
        lines: u32,
    },
    /// A new piece could not be placed
    GameOver { score: u32, lines: u32 },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Spawned { .. } => "spawned",
            SessionEvent::Locked { .. } => "locked",
            SessionEvent::LinesCleared { .. } => "lines_cleared",
            SessionEvent::GameOver { .. } => "game_over",
        }
    }
}
