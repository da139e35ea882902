//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the input layer and
//! any renderer.
//!
//! # Grid Dimensions
//!
//! Default playfield:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn pivot**: (columns / 2, 0)
//!
//! Both dimensions are configurable per session; these are only defaults.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Update loop cadence |
//! | `DEFAULT_SPEED_MS` | 500 | Gravity interval |
//! | `FAST_SPEED_MS` | 50 | Gravity interval while soft drop is held |
//! | `SOFT_DROP_GRACE_MS` | 150 | Soft drop latch timeout (terminals without key release) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Command, Rotation, ShapeKind};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Rotation::R270.advance(1), Rotation::R0);
//! assert_eq!(Rotation::R0.advance(-1), Rotation::R270);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(Cell::Color(1).class_name(), "red");
//! ```

use serde::Serialize;

/// Default number of rows in the playfield
pub const DEFAULT_ROWS: u16 = 20;

/// Default number of columns in the playfield
pub const DEFAULT_COLUMNS: u16 = 10;

/// Update loop cadence in milliseconds
pub const TICK_MS: u32 = 50;

/// Gravity interval at normal speed
pub const DEFAULT_SPEED_MS: u32 = 500;

/// Gravity interval while soft drop is held
pub const FAST_SPEED_MS: u32 = 50;

/// Soft drop latch timeout for terminals that never report key release.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Minimum number of queued upcoming pieces after any dequeue
pub const QUEUE_MIN_DEPTH: usize = 5;

/// Number of piece colors (color indices are 1..=COLOR_COUNT)
pub const COLOR_COUNT: u8 = 6;

/// Swipe dead zone (sum of |dx| and |dy|) below which a gesture is a tap.
pub const DEFAULT_SWIPE_DEAD_ZONE: i32 = 10;

/// Line clear score table, indexed by rows cleared in one lock.
///
/// More than 4 rows earns nothing beyond the table.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];


/// The seven tetromino shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    O,
    S,
    Z,
    T,
    L,
    J,
    I,
}

impl ShapeKind {
    /// All shapes in catalog order (used for uniform random selection).
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::I,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "i" => Some(ShapeKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::I => "i",
        }
    }

    /// Shapes whose 180-apart rotation states share one geometry.
    pub fn is_two_fold(&self) -> bool {
        matches!(self, ShapeKind::S | ShapeKind::Z | ShapeKind::I)
    }
}

/// Rotation state in degrees, always normalized into {0, 90, 180, 270}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Normalize any multiple of 90 degrees (negative values wrap to the
    /// positive equivalent). Values between quarter turns round down.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) / 90 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    pub fn degrees(&self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// `(state + 90 * direction) mod 360`
    pub fn advance(&self, direction: i8) -> Self {
        Self::from_degrees(self.degrees() + 90 * i32::from(direction))
    }
}

/// A grid coordinate. Signed so candidate positions may sit outside the grid
/// until they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A single grid cell value
///
/// - `Empty`: nothing here
/// - `Dropped`: part of a locked piece (colorless)
/// - `Color(1..=6)`: occupied by the falling piece, or by a spawn that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Dropped,
    Color(u8),
}

impl Cell {
    /// Build a color cell, rejecting indices outside 1..=COLOR_COUNT.
    pub fn color(index: u8) -> Option<Self> {
        (1..=COLOR_COUNT).contains(&index).then_some(Cell::Color(index))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display class for this cell value (CSS-style class names).
    pub fn class_name(&self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Dropped => "grey",
            Cell::Color(1) => "red",
            Cell::Color(2) => "blue",
            Cell::Color(3) => "yellow",
            Cell::Color(4) => "green",
            Cell::Color(5) => "purple",
            Cell::Color(6) => "orange",
            Cell::Color(_) => "",
        }
    }
}

/// Discrete player commands delivered by an input collaborator.
///
/// Unknown input never becomes a command, so it is ignored by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece +90°
    RotateCw,
    /// Rotate piece -90°
    RotateCcw,
    /// Switch gravity to the fast interval
    SoftDropStart,
    /// Switch gravity back to the normal interval
    SoftDropEnd,
    /// Fall until the piece can fall no further
    HardDrop,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::SoftDropStart,
        Command::SoftDropEnd,
        Command::HardDrop,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "softdropstart" => Some(Command::SoftDropStart),
            "softdropend" => Some(Command::SoftDropEnd),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDropStart => "softDropStart",
            Command::SoftDropEnd => "softDropEnd",
            Command::HardDrop => "hardDrop",
        }
    }
}
