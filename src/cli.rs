//! Command-line options.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};

use crate::core::{RotationPolicy, SessionConfig, SpawnSource};
use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SPEED_MS, FAST_SPEED_MS, QUEUE_MIN_DEPTH,
};

/// What to do with a rotation that pokes out of a side wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RotationArg {
    /// Shift the piece back inside the grid
    EdgeCorrect,
    /// Refuse the rotation
    Reject,
}

/// Where new pieces come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpawnArg {
    /// A lookahead queue, shown in the side panel
    Queue,
    /// Drawn at random when needed
    Inline,
}

impl From<RotationArg> for RotationPolicy {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::EdgeCorrect => RotationPolicy::EdgeCorrect,
            RotationArg::Reject => RotationPolicy::Reject,
        }
    }
}

impl From<SpawnArg> for SpawnSource {
    fn from(arg: SpawnArg) -> Self {
        match arg {
            SpawnArg::Queue => SpawnSource::Queue,
            SpawnArg::Inline => SpawnSource::Inline,
        }
    }
}

/// Falling-block puzzle game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle game in the terminal. Fill rows edge to edge to clear them.",
    long_about = "Blockfall is a falling-block puzzle game in the terminal.\n\n\
        CONTROLS:\n  Left/Right, h/l, a/d  Move      Up, k, w, z  Rotate CW   x  Rotate CCW\n  \
        Down, j, s            Soft drop Space        Hard drop   q / Esc  Quit\n\n\
        With mouse capture, click to rotate, drag sideways to move and drag down to drop.\n\n\
        Set BLOCKFALL_LOG_PATH to append game events as JSON lines to a file."
)]
pub struct Args {
    /// Rows of random garbage seeded at the bottom of the field.
    #[arg(long, default_value_t = 0, value_name = "ROWS")]
    pub height: u16,

    /// Playfield height in rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    pub rows: u16,

    /// Playfield width in columns.
    #[arg(long, default_value_t = DEFAULT_COLUMNS, value_name = "COLS")]
    pub columns: u16,

    /// RNG seed. Random when not set.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Rotation behaviour at the side walls.
    #[arg(long, value_enum, default_value = "edge-correct")]
    pub rotation: RotationArg,

    /// Piece source.
    #[arg(long, value_enum, default_value = "queue")]
    pub spawn: SpawnArg,

    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_SPEED_MS, value_name = "MS")]
    pub speed_ms: u32,

    /// Gravity interval while soft drop is held.
    #[arg(long, default_value_t = FAST_SPEED_MS, value_name = "MS")]
    pub fast_speed_ms: u32,

    /// Number of upcoming pieces kept in the queue.
    #[arg(long, default_value_t = QUEUE_MIN_DEPTH, value_name = "N")]
    pub preview: usize,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            columns: self.columns,
            garbage_height: self.height,
            normal_speed_ms: self.speed_ms,
            fast_speed_ms: self.fast_speed_ms,
            rotation: self.rotation.into(),
            spawn: self.spawn.into(),
            queue_depth: self.preview,
        }
    }

    /// The seed to play with: `--seed`, or one taken from the clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
