//! Scoring module - locking, line clearing and the score counters
//!
//! A locked piece turns into dropped cells. Full rows are then removed one at
//! a time, scanning top to bottom; removing a row only shifts rows that were
//! already examined, so the scan never skips or double-counts a row.

use blockfall_types::{Cell, LINE_SCORES};

use crate::grid::Grid;
use crate::piece::ActivePiece;

/// Points for clearing `rows` rows in one lock
///
/// | Rows | Points |
/// |------|--------|
/// | 1    | 100    |
/// | 2    | 300    |
/// | 3    | 500    |
/// | 4    | 800    |
///
/// Anything else scores nothing.
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES.get(rows).copied().unwrap_or(0)
}

/// Mark every cell of `piece` as dropped.
pub fn lock_piece(grid: &mut Grid, piece: &ActivePiece) {
    let mut next = grid.snapshot();
    for &p in piece.cells() {
        next.set(p, Cell::Dropped);
    }
    grid.replace(next);
}

/// Remove every full row. Returns the cleared row indices in increasing order.
pub fn clear_full_rows(grid: &mut Grid) -> Vec<usize> {
    let mut next = grid.snapshot();
    let mut cleared = Vec::new();

    for y in 0..next.rows() as usize {
        if next.is_row_full(y) {
            next.remove_row(y);
            cleared.push(y);
        }
    }

    if !cleared.is_empty() {
        grid.replace(next);
    }
    cleared
}

/// Score and line counters. Both only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    score: u32,
    lines: u32,
}

impl Scoreboard {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Record a clear of `rows` rows; returns the points awarded.
    pub fn record_clear(&mut self, rows: usize) -> u32 {
        let points = line_clear_score(rows);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows as u32);
        points
    }
}
