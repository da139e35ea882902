//! Game loop tests: gravity, locking, clearing, scoring and game over

use blockfall::core::{
    GameSession, GridSnapshot, SessionConfig, SessionEvent, SessionState, SpawnSource, TickOutcome,
};
use blockfall::types::{Cell, Command, Point, ShapeKind, DEFAULT_SPEED_MS, TICK_MS};

/// Start on `field` with the first seed whose opening piece is `kind`.
fn session_with_first(kind: ShapeKind, field: &GridSnapshot) -> GameSession {
    (1..10_000)
        .map(|seed| GameSession::with_grid(SessionConfig::default(), seed, field.clone()).unwrap())
        .find(|game| game.active().map(|p| p.kind) == Some(kind))
        .unwrap()
}

fn fill_rows(field: &mut GridSnapshot, rows: std::ops::Range<i32>, gap: impl Fn(i32) -> bool) {
    for y in rows {
        for x in 0..i32::from(field.columns()) {
            if !gap(x) {
                field.set(Point::new(x, y), Cell::Dropped);
            }
        }
    }
}

#[test]
fn test_single_line_clear_scores_100() {
    let mut field = GridSnapshot::new(10, 20);
    // Leave room for a flat I at columns 4..=7
    fill_rows(&mut field, 19..20, |x| (4..=7).contains(&x));

    let mut game = session_with_first(ShapeKind::I, &field);
    assert!(game.apply(Command::HardDrop));
    game.take_events();

    assert_eq!(game.tick(DEFAULT_SPEED_MS), TickOutcome::Locked { rows_cleared: 1 });
    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);

    // Only the next piece is left
    assert_eq!(game.grid().filled_count(), 4);

    let events = game.take_events();
    assert!(matches!(
        events.as_slice(),
        [
            SessionEvent::Locked { kind: ShapeKind::I, .. },
            SessionEvent::LinesCleared { points: 100, score: 100, lines: 1, .. },
            SessionEvent::Spawned { .. },
        ]
    ));
}

#[test]
fn test_four_line_clear_scores_800() {
    let mut field = GridSnapshot::new(10, 20);
    fill_rows(&mut field, 16..20, |x| x == 9);

    let mut game = session_with_first(ShapeKind::I, &field);

    // One gravity step so the vertical I fits below the top edge
    assert_eq!(game.tick(DEFAULT_SPEED_MS), TickOutcome::Fell);
    assert!(game.apply(Command::RotateCw));
    while game.apply(Command::MoveRight) {}
    assert_eq!(game.active().unwrap().pivot().x, 9);

    assert!(game.apply(Command::HardDrop));
    assert_eq!(game.tick(DEFAULT_SPEED_MS), TickOutcome::Locked { rows_cleared: 4 });
    assert_eq!(game.score(), 800);
    assert_eq!(game.lines(), 4);
    assert_eq!(game.grid().filled_count(), 4);
}

#[test]
fn test_partial_row_survives_clear() {
    let mut field = GridSnapshot::new(10, 20);
    fill_rows(&mut field, 19..20, |x| (4..=7).contains(&x));
    fill_rows(&mut field, 18..19, |x| x >= 4);

    let mut game = session_with_first(ShapeKind::I, &field);
    game.apply(Command::HardDrop);
    game.tick(DEFAULT_SPEED_MS);

    // Row 18 dropped down to the bottom unchanged
    let grid = game.grid();
    for x in 0..10 {
        let expected = if x < 4 { Cell::Dropped } else { Cell::Empty };
        assert_eq!(grid.get(Point::new(x, 19)), Some(expected), "column {}", x);
    }
    assert_eq!(game.score(), 100);
}

#[test]
fn test_hard_drop_does_not_lock_immediately() {
    let mut game = GameSession::new(SessionConfig::default(), 3).unwrap();
    assert!(game.apply(Command::HardDrop));

    // The piece can still slide along the floor before gravity locks it
    let piece = *game.active().unwrap();
    let moved = game.apply(Command::MoveLeft) || game.apply(Command::MoveRight);
    assert!(moved);
    assert_ne!(game.active().unwrap().pivot(), piece.pivot());
    assert!(game.grid().cells().iter().all(|c| *c != Cell::Dropped));
}

#[test]
fn test_gravity_ticks_accumulate() {
    let mut game = GameSession::new(SessionConfig::default(), 8).unwrap();
    let y0 = game.active().unwrap().pivot().y;

    let mut falls = 0;
    for _ in 0..(3 * DEFAULT_SPEED_MS / TICK_MS) {
        if game.tick(TICK_MS) == TickOutcome::Fell {
            falls += 1;
        }
    }
    assert_eq!(falls, 3);
    assert_eq!(game.active().unwrap().pivot().y, y0 + 3);
}

#[test]
fn test_stacking_in_the_middle_ends_the_game() {
    let mut game = GameSession::new(SessionConfig::default(), 21).unwrap();

    let mut locks = 0;
    while !game.is_game_over() {
        game.apply(Command::HardDrop);
        match game.tick(DEFAULT_SPEED_MS) {
            TickOutcome::Locked { rows_cleared } => {
                assert_eq!(rows_cleared, 0);
                locks += 1;
            }
            TickOutcome::GameOver => locks += 1,
            _ => {}
        }
        assert!(locks < 200, "stack never reached the top");
    }

    assert_eq!(game.state(), SessionState::GameOver);
    assert!(game.active().is_none());
    assert_eq!(game.score(), 0);

    // Terminal: nothing moves any more
    let frozen = game.snapshot();
    for command in Command::ALL {
        assert!(!game.apply(command));
    }
    assert_eq!(game.tick(10 * DEFAULT_SPEED_MS), TickOutcome::Idle);
    assert_eq!(game.grid(), &frozen);

    let events = game.take_events();
    assert!(matches!(events.last(), Some(SessionEvent::GameOver { .. })));
}

#[test]
fn test_failed_spawn_leaves_colored_cells() {
    let mut field = GridSnapshot::new(10, 20);
    // Only (5, 0) blocks; the rest of the spawn cells are free
    field.set(Point::new(5, 0), Cell::Dropped);

    let game = GameSession::with_grid(SessionConfig::default(), 1, field).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.grid().get(Point::new(5, 0)), Some(Cell::Dropped));
    let colored = game
        .grid()
        .cells()
        .iter()
        .filter(|c| matches!(c, Cell::Color(_)))
        .count();
    assert_eq!(colored, 3);
}

#[test]
fn test_queue_order_is_spawn_order() {
    let mut game = GameSession::new(SessionConfig::default(), 1234).unwrap();
    for _ in 0..10 {
        let expected = game.upcoming()[0];
        game.apply(Command::HardDrop);
        game.tick(DEFAULT_SPEED_MS);
        if game.is_game_over() {
            break;
        }
        let active = game.active().unwrap();
        assert_eq!((active.kind, active.color), (expected.kind, expected.color));
        assert_eq!(game.upcoming().len(), 5);
    }
}

#[test]
fn test_inline_spawning_is_deterministic() {
    let config = SessionConfig {
        spawn: SpawnSource::Inline,
        ..SessionConfig::default()
    };
    let play = |seed| {
        let mut game = GameSession::new(config.clone(), seed).unwrap();
        let mut kinds = Vec::new();
        for _ in 0..8 {
            kinds.push(game.active().map(|p| p.kind));
            game.apply(Command::HardDrop);
            game.tick(DEFAULT_SPEED_MS);
        }
        kinds
    };
    assert_eq!(play(55), play(55));
}

#[test]
fn test_garbage_seeding_is_reproducible() {
    let config = SessionConfig::default().with_garbage_height(8);
    let a = GameSession::new(config.clone(), 600).unwrap();
    let b = GameSession::new(config, 600).unwrap();
    assert_eq!(a.grid(), b.grid());

    for y in 0..12 {
        // Above the garbage only the spawned piece may appear
        if y >= 2 {
            assert!(a.grid().row(y).iter().all(Cell::is_empty));
        }
    }
    for y in 12..20 {
        assert_eq!(a.grid().row(y)[9], Cell::Empty);
    }
}

#[test]
fn test_rejects_invalid_config() {
    let config = SessionConfig::default().with_size(3, 20);
    assert!(GameSession::new(config, 1).is_err());
}
