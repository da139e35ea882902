//! Pieces module - tetromino shapes and rotation geometry
//!
//! Every shape is four cells defined relative to a pivot cell. The pivot is
//! always the first offset, so after any move or rotation the first absolute
//! cell of a piece is still its pivot.
//!
//! S, Z and I fold 180-apart states onto one geometry. O ignores rotation.

use blockfall_types::{Point, Rotation, ShapeKind};

/// Offset of a single cell relative to the pivot
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets, pivot first
pub type PieceShape = [CellOffset; 4];

/// Rotation state a new piece is created with; the spawn step advances it to R0.
pub const SPAWN_ROTATION: Rotation = Rotation::R270;

/// Get the offsets for a shape and rotation state
pub fn offsets(kind: ShapeKind, rotation: Rotation) -> PieceShape {
    match kind {
        ShapeKind::O => o_shape(rotation),
        ShapeKind::S => s_shape(rotation),
        ShapeKind::Z => z_shape(rotation),
        ShapeKind::T => t_shape(rotation),
        ShapeKind::L => l_shape(rotation),
        ShapeKind::J => j_shape(rotation),
        ShapeKind::I => i_shape(rotation),
    }
}

/// Absolute cells for a shape placed at `pivot` in `rotation`
pub fn cells(kind: ShapeKind, pivot: Point, rotation: Rotation) -> [Point; 4] {
    offsets(kind, rotation).map(|(dx, dy)| pivot.offset(dx, dy))
}

/// Pivot for a newly spawned piece: middle column, top row
pub fn spawn_pivot(columns: u16) -> Point {
    Point::new(i32::from(columns / 2), 0)
}

fn is_even(rotation: Rotation) -> bool {
    matches!(rotation, Rotation::R0 | Rotation::R180)
}

/// O piece (same for all rotations)
fn o_shape(_rotation: Rotation) -> PieceShape {
    // [*]*
    //  * *
    [(0, 0), (0, 1), (1, 0), (1, 1)]
}

/// S piece
fn s_shape(rotation: Rotation) -> PieceShape {
    if is_even(rotation) {
        //  [*]*
        // * *
        [(0, 0), (1, 0), (0, 1), (-1, 1)]
    } else {
        //  *
        // [*]*
        //    *
        [(0, 0), (0, -1), (1, 0), (1, 1)]
    }
}

/// Z piece
fn z_shape(rotation: Rotation) -> PieceShape {
    if is_even(rotation) {
        // *[*]
        //   * *
        [(0, 0), (-1, 0), (0, 1), (1, 1)]
    } else {
        //    *
        // *[*]
        // *
        [(0, 0), (0, -1), (-1, 0), (-1, 1)]
    }
}

/// T piece
fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 0), (-1, 0), (1, 0), (0, 1)],
        Rotation::R90 => [(0, 0), (0, -1), (-1, 0), (0, 1)],
        Rotation::R180 => [(0, 0), (-1, 0), (0, -1), (1, 0)],
        Rotation::R270 => [(0, 0), (0, -1), (1, 0), (0, 1)],
    }
}

/// L piece
fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 0), (-1, 0), (-1, 1), (1, 0)],
        Rotation::R90 => [(0, 0), (0, -1), (-1, -1), (0, 1)],
        Rotation::R180 => [(0, 0), (-1, 0), (1, 0), (1, -1)],
        Rotation::R270 => [(0, 0), (0, -1), (0, 1), (1, 1)],
    }
}

/// J piece
fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 0), (-1, 0), (1, 0), (1, 1)],
        Rotation::R90 => [(0, 0), (0, -1), (0, 1), (-1, 1)],
        Rotation::R180 => [(0, 0), (-1, -1), (-1, 0), (1, 0)],
        Rotation::R270 => [(0, 0), (0, -1), (1, -1), (0, 1)],
    }
}

/// I piece
fn i_shape(rotation: Rotation) -> PieceShape {
    if is_even(rotation) {
        // *[*]* *
        [(0, 0), (-1, 0), (1, 0), (2, 0)]
    } else {
        // vertical, pivot second from top
        [(0, 0), (0, -1), (0, 1), (0, 2)]
    }
}
