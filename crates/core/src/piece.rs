//! Active piece controller
//!
//! Every operation follows the same three steps: compute the candidate
//! cells, validate them against a working copy of the grid with the piece's
//! own cells already cleared, then either install the working copy or drop
//! it. A rejected operation leaves both the grid and the piece untouched.

use blockfall_types::{Cell, Point, Rotation, ShapeKind};

use crate::config::RotationPolicy;
use crate::grid::Grid;
use crate::pieces::{self, SPAWN_ROTATION};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub color: u8,
    /// Absolute cells, pivot first
    cells: [Point; 4],
}

impl ActivePiece {
    /// Place a new piece at the spawn pivot.
    ///
    /// The piece is created at [`SPAWN_ROTATION`] and advanced one step, which
    /// lands it at R0. Its color is written into every empty spawn cell and
    /// the grid is updated even when the spawn is blocked; occupied cells keep
    /// their value. Returns None when any spawn cell was already occupied.
    pub fn spawn(grid: &mut Grid, kind: ShapeKind, color: u8) -> Option<Self> {
        let rotation = SPAWN_ROTATION.advance(1);
        let cells = pieces::cells(kind, pieces::spawn_pivot(grid.columns()), rotation);
        let paint = Cell::Color(color);

        let mut next = grid.snapshot();
        let mut blocked = false;
        for p in cells {
            if next.is_vacant(p) {
                next.set(p, paint);
            } else {
                blocked = true;
            }
        }
        grid.replace(next);

        if blocked {
            return None;
        }

        Some(Self {
            kind,
            rotation,
            color,
            cells,
        })
    }

    pub fn pivot(&self) -> Point {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Point; 4] {
        &self.cells
    }

    /// Grid value this piece paints
    pub fn cell(&self) -> Cell {
        Cell::Color(self.color)
    }
}

/// Shift the piece one column. `direction` is -1 (left) or +1 (right).
pub fn try_move(grid: &mut Grid, piece: &mut ActivePiece, direction: i8) -> bool {
    let columns = i32::from(grid.columns());
    let candidate = piece.cells.map(|p| p.offset(i32::from(direction), 0));

    // don't allow movement past the edge of the grid
    if candidate.iter().any(|p| p.x < 0 || p.x >= columns) {
        return false;
    }

    commit(grid, piece, candidate)
}

/// Rotate the piece a quarter turn about its pivot. `direction` is +1 or -1.
///
/// The rotation state only advances when the rotation is accepted.
pub fn try_rotate(
    grid: &mut Grid,
    piece: &mut ActivePiece,
    direction: i8,
    policy: RotationPolicy,
) -> bool {
    let rotation = piece.rotation.advance(direction);
    let mut candidate = pieces::cells(piece.kind, piece.pivot(), rotation);
    let columns = grid.columns();

    match policy {
        RotationPolicy::EdgeCorrect => {
            let overrun = edge_overrun(&candidate, columns);
            if overrun != 0 {
                candidate = candidate.map(|p| p.offset(-overrun, 0));
            }
        }
        RotationPolicy::Reject => {
            if candidate
                .iter()
                .any(|p| p.x < 0 || p.x >= i32::from(columns))
            {
                return false;
            }
        }
    }

    if !commit(grid, piece, candidate) {
        return false;
    }
    piece.rotation = rotation;
    true
}

/// Move the piece down one row. Returns false when it cannot fall, which
/// means it has come to rest where it is.
pub fn try_fall(grid: &mut Grid, piece: &mut ActivePiece) -> bool {
    let rows = i32::from(grid.rows());
    let candidate = piece.cells.map(|p| p.offset(0, 1));

    if candidate.iter().any(|p| p.y >= rows) {
        return false;
    }

    commit(grid, piece, candidate)
}

/// Largest horizontal overrun of `candidate` past either side wall.
///
/// Negative for a left overrun, positive for a right overrun, 0 when every
/// cell is inside. Subtracting it from each x brings the cells back in.
pub fn edge_overrun(candidate: &[Point; 4], columns: u16) -> i32 {
    let max_x = i32::from(columns) - 1;

    candidate.iter().fold(0, |acc, p| {
        if p.x < 0 && p.x < acc {
            p.x
        } else if p.x > max_x && p.x - max_x > acc {
            p.x - max_x
        } else {
            acc
        }
    })
}

fn commit(grid: &mut Grid, piece: &mut ActivePiece, candidate: [Point; 4]) -> bool {
    let mut next = grid.snapshot();

    // a piece never collides with itself
    for &p in &piece.cells {
        next.set(p, Cell::Empty);
    }

    // Outside the grid counts as occupied
    if !candidate.iter().all(|&p| next.is_vacant(p)) {
        return false;
    }

    for &p in &candidate {
        next.set(p, piece.cell());
    }

    grid.replace(next);
    piece.cells = candidate;
    true
}
