//! Session to framebuffer rendering

use blockfall::core::{GameSession, GridSnapshot, SessionConfig};
use blockfall::term::renderer::for_each_changed_run;
use blockfall::term::{encode_diff_into, FrameBuffer, GameView, HudView, Viewport};
use blockfall::types::{Cell, Command, Point, DEFAULT_SPEED_MS};

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 24,
};

// 10x20 grid, 2x1 cells, centered in 60x24: border at (19, 1)
fn screen_pos(p: Point) -> (u16, u16) {
    (20 + 2 * p.x as u16, 2 + p.y as u16)
}

fn draw(game: &GameSession) -> FrameBuffer {
    let upcoming = game.upcoming();
    let hud = HudView::from_session(game, &upcoming);
    GameView::default().render(game.grid(), &hud, VIEWPORT)
}

#[test]
fn test_active_piece_is_drawn_bold() {
    let game = GameSession::new(SessionConfig::default(), 7).unwrap();
    let fb = draw(&game);

    for &p in game.active().unwrap().cells() {
        let (x, y) = screen_pos(p);
        for dx in 0..2 {
            let glyph = fb.get(x + dx, y).unwrap();
            assert_eq!(glyph.ch, '█');
            assert!(glyph.style.bold);
        }
    }
    let (x, y) = screen_pos(Point::new(0, 19));
    assert_eq!(fb.get(x, y).unwrap().ch, '·');
}

#[test]
fn test_locked_piece_turns_grey() {
    let mut game = GameSession::new(SessionConfig::default(), 7).unwrap();
    game.apply(Command::HardDrop);
    let landed = *game.active().unwrap().cells();
    game.tick(DEFAULT_SPEED_MS);

    let fb = draw(&game);
    for p in landed {
        assert_eq!(game.grid().get(p), Some(Cell::Dropped));
        let (x, y) = screen_pos(p);
        let glyph = fb.get(x, y).unwrap();
        assert_eq!(glyph.ch, '█');
        assert!(!glyph.style.bold);
    }
}

#[test]
fn test_side_panel_shows_score_and_queue() {
    let game = GameSession::new(SessionConfig::default(), 7).unwrap();
    let fb = draw(&game);

    assert!(fb.row_text(1).contains("SCORE"));
    assert!(fb.row_text(2).contains('0'));
    assert!(fb.row_text(4).contains("LINES"));
    assert!(fb.row_text(7).contains("NEXT"));

    let first = game.upcoming()[0].kind.as_str().to_uppercase();
    assert!(fb.row_text(8).contains(first.as_str()));
}

#[test]
fn test_game_over_overlay() {
    let mut field = GridSnapshot::new(10, 20);
    field.set(Point::new(5, 0), Cell::Dropped);
    let game = GameSession::with_grid(SessionConfig::default(), 1, field).unwrap();
    assert!(game.is_game_over());

    let fb = draw(&game);
    assert!(fb.row_text(12).contains("GAME OVER"));
}

#[test]
fn test_move_only_redraws_field_rows() {
    let mut game = GameSession::new(SessionConfig::default(), 7).unwrap();
    let before = draw(&game);
    assert!(game.apply(Command::MoveLeft));
    let after = draw(&game);

    let mut runs = Vec::new();
    for_each_changed_run(&before, &after, |x, y, len| {
        runs.push((x, y, len));
        Ok(())
    })
    .unwrap();

    assert!(!runs.is_empty());
    for (x, y, len) in runs {
        // Inside the border, within the rows the piece can span at spawn
        assert!(x >= 20 && x + len <= 40, "run at x={} len={}", x, len);
        assert!((2..=4).contains(&y), "run at y={}", y);
    }

    let mut out = Vec::new();
    encode_diff_into(&before, &before, &mut out).unwrap();
    assert!(out.is_empty());
    encode_diff_into(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());
}
