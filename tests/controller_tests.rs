//! Active piece controller tests

use blockfall::core::piece::{try_fall, try_move, try_rotate};
use blockfall::core::pieces;
use blockfall::core::{ActivePiece, Grid, RotationPolicy};
use blockfall::types::{Cell, Point, Rotation, ShapeKind};

fn colored_cells(grid: &Grid) -> Vec<Point> {
    let snap = grid.current();
    let mut out = Vec::new();
    for y in 0..i32::from(snap.rows()) {
        for x in 0..i32::from(snap.columns()) {
            if matches!(snap.get(Point::new(x, y)), Some(Cell::Color(_))) {
                out.push(Point::new(x, y));
            }
        }
    }
    out
}

fn sorted(mut cells: Vec<Point>) -> Vec<Point> {
    cells.sort_by_key(|p| (p.y, p.x));
    cells
}

#[test]
fn test_every_shape_spawns_centered_at_r0() {
    for kind in ShapeKind::ALL {
        let mut grid = Grid::new(10, 20);
        let piece = ActivePiece::spawn(&mut grid, kind, 1).unwrap();

        assert_eq!(piece.rotation, Rotation::R0);
        assert_eq!(piece.pivot(), Point::new(5, 0));
        assert_eq!(
            piece.cells(),
            &pieces::cells(kind, Point::new(5, 0), Rotation::R0)
        );
        assert_eq!(
            sorted(colored_cells(&grid)),
            sorted(piece.cells().to_vec())
        );
    }
}

#[test]
fn test_grid_always_mirrors_piece_cells() {
    let mut grid = Grid::new(10, 20);
    let mut piece = ActivePiece::spawn(&mut grid, ShapeKind::L, 5).unwrap();
    try_fall(&mut grid, &mut piece);
    try_fall(&mut grid, &mut piece);

    let moves: [fn(&mut Grid, &mut ActivePiece) -> bool; 6] = [
        |g, p| try_move(g, p, -1),
        |g, p| try_rotate(g, p, 1, RotationPolicy::EdgeCorrect),
        |g, p| try_move(g, p, 1),
        |g, p| try_fall(g, p),
        |g, p| try_rotate(g, p, -1, RotationPolicy::EdgeCorrect),
        |g, p| try_move(g, p, -1),
    ];

    for step in moves.iter().cycle().take(60) {
        step(&mut grid, &mut piece);
        assert_eq!(
            sorted(colored_cells(&grid)),
            sorted(piece.cells().to_vec())
        );
        assert_eq!(grid.current().filled_count(), 4);
    }
}

#[test]
fn test_rejected_operations_change_nothing() {
    let mut grid = Grid::new(10, 20);
    let mut piece = ActivePiece::spawn(&mut grid, ShapeKind::I, 2).unwrap();
    while try_move(&mut grid, &mut piece, -1) {}

    let piece_before = piece;
    let grid_before = grid.snapshot();
    assert!(!try_move(&mut grid, &mut piece, -1));
    assert_eq!(piece, piece_before);
    assert_eq!(grid.current(), &grid_before);

    // Vertical I would need row -1 at the top of the field
    assert!(!try_rotate(&mut grid, &mut piece, 1, RotationPolicy::EdgeCorrect));
    assert_eq!(piece, piece_before);
    assert_eq!(grid.current(), &grid_before);
}

#[test]
fn test_rotation_at_left_wall_is_pushed_back_in() {
    let mut grid = Grid::new(10, 20);
    let mut piece = ActivePiece::spawn(&mut grid, ShapeKind::I, 2).unwrap();
    for _ in 0..2 {
        try_fall(&mut grid, &mut piece);
    }
    assert!(try_rotate(&mut grid, &mut piece, 1, RotationPolicy::EdgeCorrect));
    while try_move(&mut grid, &mut piece, -1) {}
    assert_eq!(piece.pivot().x, 0);

    // Horizontal I from pivot 0 would need column -1
    assert!(try_rotate(&mut grid, &mut piece, 1, RotationPolicy::EdgeCorrect));
    assert_eq!(piece.rotation, Rotation::R180);
    let mut xs: Vec<i32> = piece.cells().iter().map(|p| p.x).collect();
    xs.sort();
    assert_eq!(xs, vec![0, 1, 2, 3]);
}

#[test]
fn test_edge_corrected_rotation_still_checks_stack() {
    let mut grid = Grid::new(10, 20);
    let mut piece = ActivePiece::spawn(&mut grid, ShapeKind::I, 2).unwrap();
    for _ in 0..2 {
        try_fall(&mut grid, &mut piece);
    }
    assert!(try_rotate(&mut grid, &mut piece, 1, RotationPolicy::EdgeCorrect));
    while try_move(&mut grid, &mut piece, 1) {}

    // Block where the corrected cells would land
    let mut next = grid.snapshot();
    next.set(Point::new(6, piece.pivot().y), Cell::Dropped);
    grid.replace(next);

    let before = piece;
    assert!(!try_rotate(&mut grid, &mut piece, 1, RotationPolicy::EdgeCorrect));
    assert_eq!(piece, before);
}

#[test]
fn test_four_rotations_return_to_start_away_from_walls() {
    for kind in ShapeKind::ALL {
        let mut grid = Grid::new(10, 20);
        let mut piece = ActivePiece::spawn(&mut grid, kind, 3).unwrap();
        for _ in 0..5 {
            assert!(try_fall(&mut grid, &mut piece));
        }
        let start = piece;

        for _ in 0..4 {
            assert!(
                try_rotate(&mut grid, &mut piece, 1, RotationPolicy::EdgeCorrect),
                "{:?}",
                kind
            );
        }
        assert_eq!(piece, start, "{:?}", kind);

        for _ in 0..4 {
            assert!(try_rotate(&mut grid, &mut piece, -1, RotationPolicy::Reject));
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_fall_onto_stack() {
    let mut grid = Grid::new(10, 20);
    let mut next = grid.snapshot();
    next.set(Point::new(5, 10), Cell::Dropped);
    grid.replace(next);

    let mut piece = ActivePiece::spawn(&mut grid, ShapeKind::O, 6).unwrap();
    while try_fall(&mut grid, &mut piece) {}

    // O's left column rests on (5, 10)
    assert_eq!(piece.pivot(), Point::new(5, 8));
    assert_eq!(grid.get(Point::new(5, 10)), Some(Cell::Dropped));
}
